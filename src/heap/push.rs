use super::*;

impl <T: Ord> Heap<T> {
    /// Pushes a value onto the heap.
    ///
    /// # Examples
    /// ```
    /// use heaplib::Heap;
    /// let mut heap = Heap::new();
    /// heap.push(3);
    /// heap.push(1);
    /// assert_eq!(heap.peek(), Some(&1));
    /// ```
    pub fn push(&mut self, value: T) {
        let index = self.contents.len();
        self.contents.push(value);
        self.sift_up(index);
    }
}
