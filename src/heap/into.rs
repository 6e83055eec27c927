use super::*;

impl <T: Ord> Heap<T> {
    /// Consumes the heap, returning its buffer in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.contents
    }
    /// Consumes the heap, returning its elements in ascending order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.len());
        vec.extend(self);
        vec
    }
}
