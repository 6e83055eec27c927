use super::Heap;

impl <T: Ord> Heap<T> {
    /// Returns the number of elements in the heap.
    ///
    /// # Examples
    /// ```
    /// use heaplib::Heap;
    /// let mut heap = Heap::new();
    /// assert_eq!(heap.len(), 0);
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
    /// Removes all elements.
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
