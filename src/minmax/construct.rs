use crate::position::Position;

use super::*;

impl <T: Ord> MinMaxHeap<T> {
    /// Creates an empty `MinMaxHeap<T>`.
    ///
    /// # Examples
    /// ```
    /// use heaplib::MinMaxHeap;
    /// let mut heap = MinMaxHeap::<i32>::new();
    /// heap.push(4);
    /// ```
    pub fn new() -> Self {
        MinMaxHeap { contents: Vec::new() }
    }
    /// Creates an empty `MinMaxHeap<T>` able to hold at least `capacity` elements without
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        MinMaxHeap { contents: Vec::with_capacity(capacity) }
    }
    /// Takes ownership of `contents` and orders it level by level, deepest internal level
    /// first. Each level is pushed down with the direction of its layer.
    pub(crate) fn heapify(contents: Vec<T>) -> Self {
        let mut heap = MinMaxHeap { contents };
        let len = heap.contents.len();
        if len < 2 {
            return heap;
        }
        log::trace!("heapify {} elements", len);
        let highest = Position::new(len - 1).parent();
        let mut depth = highest.depth();
        loop {
            let first = (1usize << depth) - 1;
            let last = highest.index().min(first * 2);
            if depth % 2 == 0 {
                for index in first..=last {
                    heap.push_down::<true>(index);
                }
            } else {
                for index in first..=last {
                    heap.push_down::<false>(index);
                }
            }
            if depth == 0 {
                break;
            }
            depth -= 1;
        }
        heap
    }
}

impl <T: Ord> Default for MinMaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
