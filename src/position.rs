//! Index arithmetic for an implicit complete binary tree stored in a flat array.
//!
//! A `Position` carries no data, it only addresses a slot of whichever buffer is in use.
//! Children are always computable, even past the end of the buffer, so callers check them
//! against the buffer length (see [`Tree`]).

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(usize);

impl Position {
    pub const ROOT: Position = Position(0);

    pub const fn new(index: usize) -> Self {
        Position(index)
    }
    pub const fn index(self) -> usize {
        self.0
    }
    /// The parent position. The parent of the root is invalid, and so is the parent of an
    /// invalid position.
    pub const fn parent(self) -> Self {
        Position(((self.0.wrapping_sub(1) as isize) >> 1) as usize)
    }
    pub const fn left_child(self) -> Self {
        Position(self.0.wrapping_shl(1).wrapping_add(1))
    }
    pub const fn right_child(self) -> Self {
        Position(self.0.wrapping_shl(1).wrapping_add(2))
    }
    pub(crate) const fn sibling_right(self) -> Self {
        Position(self.0.wrapping_add(1))
    }
    pub const fn is_root(self) -> bool {
        self.0 == 0
    }
    pub const fn is_valid(self) -> bool {
        (self.0 as isize) >= 0
    }
    /// Depth of the position in the tree, the root being at depth 0.
    ///
    /// # Examples
    /// ```
    /// use heaplib::Position;
    /// assert_eq!(Position::new(0).depth(), 0);
    /// assert_eq!(Position::new(2).depth(), 1);
    /// assert_eq!(Position::new(3).depth(), 2);
    /// assert_eq!(Position::new(6).depth(), 2);
    /// ```
    pub const fn depth(self) -> u32 {
        (usize::BITS - 1).wrapping_sub(self.0.wrapping_add(1).leading_zeros())
    }
    /// Whether the position sits on a min layer of a min-max heap.
    pub const fn is_min_layer(self) -> bool {
        self.depth() % 2 == 0
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tree addressing over a contiguous buffer.
pub trait Tree<T> {
    fn at(&self, position: Position) -> &T;
    fn swap_at(&mut self, i: Position, j: Position);
    fn has(&self, position: Position) -> bool;
    fn left_child(&self, position: Position) -> Option<Position> {
        let left = position.left_child();
        if self.has(left) { Some(left) } else { None }
    }
    fn right_child(&self, position: Position) -> Option<Position> {
        let right = position.right_child();
        if self.has(right) { Some(right) } else { None }
    }
}

impl <T> Tree<T> for [T] {
    fn at(&self, position: Position) -> &T {
        &self[position.0]
    }
    fn swap_at(&mut self, i: Position, j: Position) {
        self.swap(i.0, j.0);
    }
    fn has(&self, position: Position) -> bool {
        position.0 < self.len()
    }
}

#[test]
fn test_children() {
    let p = Position::new(3);
    assert_eq!(p.left_child(), Position::new(7));
    assert_eq!(p.right_child(), Position::new(8));
    assert_eq!(p.left_child().parent(), p);
    assert_eq!(p.right_child().parent(), p);
}

#[test]
fn test_root_parent() {
    assert!(Position::ROOT.is_root());
    assert!(Position::ROOT.is_valid());
    let invalid = Position::ROOT.parent();
    assert!(!invalid.is_valid());
    assert!(!invalid.parent().is_valid());
    assert!(!Position::new(2).parent().parent().is_valid());
}

#[test]
fn test_layers() {
    let layers: Vec<bool> = (0..15).map(|i| Position::new(i).is_min_layer()).collect();
    assert_eq!(
        layers,
        vec![
            true,
            false, false,
            true, true, true, true,
            false, false, false, false, false, false, false, false,
        ]
    );
}

#[test]
fn test_wrapping_children() {
    let far = Position::new(usize::MAX / 2 + 7);
    // both wrap around instead of panicking
    let _ = far.left_child();
    let _ = far.right_child().right_child();
}

#[test]
fn test_tree_slice() {
    let v = [1, 2, 3, 4];
    let s: &[i32] = &v;
    assert_eq!(s.left_child(Position::new(1)), Some(Position::new(3)));
    assert_eq!(s.right_child(Position::new(1)), None);
    assert_eq!(*s.at(Position::new(2)), 3);
}
