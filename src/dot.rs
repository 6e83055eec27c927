//! Graph description of a heap buffer, for visualization with graphviz.

use std::fmt::{self, Display, Write};

use crate::position::{Position, Tree};

const LINE_WIDTH: usize = 70;

/// Renders the tree of a heap buffer as a `digraph`.
///
/// # Examples
/// ```
/// use heaplib::Heap;
/// let heap = Heap::from(vec![2, 1]);
/// assert_eq!(
///     heap.dot().to_string(),
///     "digraph heap {\n 0 [label=\"1\"]; 0 -> 1; 1 [label=\"2\"];\n}\n",
/// );
/// ```
pub struct Dot<'a, T> {
    pub(crate) contents: &'a [T],
}

impl <T: Display> Display for Dot<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph heap {{")?;
        let mut line = String::new();
        for index in 0..self.contents.len() {
            let position = Position::new(index);
            write!(line, " {} [label=\"{}\"];", index, self.contents.at(position))?;
            if let Some(left) = self.contents.left_child(position) {
                write!(line, " {} -> {};", index, left)?;
            }
            if let Some(right) = self.contents.right_child(position) {
                write!(line, " {} -> {};", index, right)?;
            }
            if line.len() > LINE_WIDTH {
                writeln!(f, "{}", line)?;
                line.clear();
            }
        }
        if !line.is_empty() {
            writeln!(f, "{}", line)?;
        }
        writeln!(f, "}}")
    }
}

#[test]
fn test_empty_dot() {
    let contents: [i32; 0] = [];
    let dot = Dot { contents: &contents };
    assert_eq!(dot.to_string(), "digraph heap {\n}\n");
}

#[test]
fn test_long_lines_are_split() {
    let contents: Vec<u32> = (0..20).collect();
    let dot = Dot { contents: &contents }.to_string();
    for line in dot.lines() {
        // a single node never produces more than a few dozen characters
        assert!(line.len() < LINE_WIDTH + 40);
    }
    assert!(dot.lines().count() > 3);
    assert!(dot.contains(" 9 -> 19;"));
}
