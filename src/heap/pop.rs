use super::*;

impl <T: Ord> Heap<T> {
    /// Returns the minimum element of the heap.
    pub fn peek(&self) -> Option<&T> {
        self.contents.first()
    }
    /// Removes the minimum element of the heap and returns it, or `None` when empty.
    ///
    /// # Examples
    /// ```
    /// use heaplib::Heap;
    /// let mut heap = Heap::from(vec![2, 3, 1]);
    /// assert_eq!(heap.pop(), Some(1));
    /// assert_eq!(heap.pop(), Some(2));
    /// assert_eq!(heap.pop(), Some(3));
    /// assert_eq!(heap.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        match self.contents.len() {
            0 => None,
            1 => self.contents.pop(),
            _ => {
                let result = self.contents.swap_remove(0);
                self.sift_down(0);
                Some(result)
            }
        }
    }
}
