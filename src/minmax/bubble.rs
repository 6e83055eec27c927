use crate::position::{Position, Tree};

use super::*;

/// Whether `a` belongs strictly above `b` on a min layer (`IS_MIN`) or on a max layer.
#[inline]
fn precedes<T: Ord, const IS_MIN: bool>(a: &T, b: &T) -> bool {
    if IS_MIN {
        a < b
    } else {
        a > b
    }
}

/// The better of two positions for the layer, keeping `a` on ties.
#[inline]
fn better<T: Ord, const IS_MIN: bool>(buffer: &[T], a: Position, b: Position) -> Position {
    if precedes::<T, IS_MIN>(buffer.at(b), buffer.at(a)) {
        b
    } else {
        a
    }
}

impl <T: Ord> MinMaxHeap<T> {
    /// Moves the element at `index`, which sits on a min layer (`IS_MIN`) or a max layer,
    /// down until it is ordered against all of its descendants.
    ///
    /// Layers alternate, so the element competes with its grandchildren. A grandchild swapped
    /// up may leave the element in conflict with the child between them, which is patched
    /// with one more swap before descending again.
    pub(crate) fn push_down<const IS_MIN: bool>(&mut self, index: usize) {
        if std::mem::size_of::<T>() == 0 {
            return;
        }
        let buffer = &mut self.contents[..];
        debug_assert!(index < buffer.len());
        let mut down_from = Position::new(index);
        loop {
            let left = down_from.left_child();
            let right = down_from.right_child();
            if buffer.has(right.right_child()) {
                // all four grandchildren are present
                let left_grand = left.left_child();
                let right_grand = right.left_child();
                let compare = better::<T, IS_MIN>(
                    buffer,
                    better::<T, IS_MIN>(buffer, left_grand, left_grand.sibling_right()),
                    better::<T, IS_MIN>(buffer, right_grand, right_grand.sibling_right()),
                );
                if !precedes::<T, IS_MIN>(buffer.at(compare), buffer.at(down_from)) {
                    break;
                }
                buffer.swap_at(down_from, compare);
                let parent = compare.parent();
                if precedes::<T, IS_MIN>(buffer.at(parent), buffer.at(compare)) {
                    buffer.swap_at(compare, parent);
                }
                down_from = compare;
            } else {
                // Near the bottom: whatever children and grandchildren exist are leaves, so one
                // swap settles the element.
                if !buffer.has(left) {
                    break;
                }
                let candidates = [right, left.left_child(), left.right_child(), right.left_child()];
                let tree: &[T] = buffer;
                let compare = candidates
                    .into_iter()
                    .filter(|&candidate| tree.has(candidate))
                    .fold(left, |best, candidate| better::<T, IS_MIN>(tree, best, candidate));
                if precedes::<T, IS_MIN>(buffer.at(compare), buffer.at(down_from)) {
                    buffer.swap_at(down_from, compare);
                    if compare > right {
                        let parent = compare.parent();
                        if precedes::<T, IS_MIN>(buffer.at(parent), buffer.at(compare)) {
                            buffer.swap_at(compare, parent);
                        }
                    }
                }
                break;
            }
        }
    }

    /// Moves the element at `index` up through the grandparents of its layer.
    pub(crate) fn push_up<const IS_MIN: bool>(&mut self, index: usize) {
        let buffer = &mut self.contents[..];
        debug_assert!(index < buffer.len());
        let mut up_from = Position::new(index);
        loop {
            let up_to = up_from.parent().parent();
            if !up_to.is_valid() {
                break;
            }
            if !precedes::<T, IS_MIN>(buffer.at(up_from), buffer.at(up_to)) {
                break;
            }
            buffer.swap_at(up_from, up_to);
            up_from = up_to;
        }
    }
}
