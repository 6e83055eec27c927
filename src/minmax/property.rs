use super::MinMaxHeap;

impl <T: Ord> MinMaxHeap<T> {
    /// Returns the number of elements in the heap.
    ///
    /// # Examples
    /// ```
    /// use heaplib::MinMaxHeap;
    /// let mut heap = MinMaxHeap::new();
    /// assert!(heap.is_empty());
    /// heap.push(1);
    /// assert_eq!(heap.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.contents.len()
    }
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
    pub fn capacity(&self) -> usize {
        self.contents.capacity()
    }
    pub fn clear(&mut self) {
        self.contents.clear();
    }
    /// The underlying buffer, in heap order.
    pub fn as_slice(&self) -> &[T] {
        &self.contents
    }
    /// Returns a graph description of the heap tree.
    pub fn dot(&self) -> crate::dot::Dot<'_, T> {
        crate::dot::Dot { contents: &self.contents }
    }
}
