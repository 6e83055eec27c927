use super::*;

impl <T: Ord> MinMaxHeap<T> {
    /// Consumes the heap, returning its buffer in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.contents
    }
    /// Consumes the heap, returning its elements in ascending order.
    ///
    /// # Examples
    /// ```
    /// use heaplib::MinMaxHeap;
    /// let heap = MinMaxHeap::from([3, 1, 2]);
    /// assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3]);
    /// ```
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.len());
        vec.extend(self.drain_min());
        vec
    }
}
