use crate::position::{Position, Tree};

use super::*;

impl <T: Ord> MinMaxHeap<T> {
    /// Pushes a value onto the heap.
    ///
    /// # Examples
    /// ```
    /// use heaplib::MinMaxHeap;
    /// let mut heap = MinMaxHeap::new();
    /// heap.push(2);
    /// heap.push(7);
    /// heap.push(1);
    /// assert_eq!(heap.peek_min(), Some(&1));
    /// assert_eq!(heap.peek_max(), Some(&7));
    /// ```
    pub fn push(&mut self, value: T) {
        let index = self.contents.len();
        self.contents.push(value);
        if index == 0 {
            return;
        }
        let buffer = &mut self.contents[..];
        let mut up_from = Position::new(index);
        let mut min_layer = up_from.is_min_layer();
        let parent = up_from.parent();
        let crosses_parent = if min_layer {
            buffer.at(up_from) > buffer.at(parent)
        } else {
            buffer.at(up_from) < buffer.at(parent)
        };
        if crosses_parent {
            // the parent's layer now governs the new element
            buffer.swap_at(up_from, parent);
            up_from = parent;
            min_layer = !min_layer;
        }
        if min_layer {
            self.push_up::<true>(up_from.index());
        } else {
            self.push_up::<false>(up_from.index());
        }
    }
}
