use super::*;

impl <T: Ord> MinMaxHeap<T> {
    /// Returns the minimum element of the heap.
    pub fn peek_min(&self) -> Option<&T> {
        self.contents.first()
    }
    /// Returns the maximum element of the heap.
    ///
    /// # Examples
    /// ```
    /// use heaplib::MinMaxHeap;
    /// let heap = MinMaxHeap::from(vec![4, 9, 1, 6]);
    /// assert_eq!(heap.peek_max(), Some(&9));
    /// ```
    pub fn peek_max(&self) -> Option<&T> {
        self.max_index().map(|index| &self.contents[index])
    }
    fn max_index(&self) -> Option<usize> {
        match self.contents.len() {
            0 => None,
            1 => Some(0),
            2 => Some(1),
            _ if self.contents[1] > self.contents[2] => Some(1),
            _ => Some(2),
        }
    }
    /// Removes the minimum element of the heap and returns it, or `None` when empty.
    ///
    /// # Examples
    /// ```
    /// use heaplib::MinMaxHeap;
    /// let mut heap = MinMaxHeap::from(vec![5, 3, 8]);
    /// assert_eq!(heap.pop_min(), Some(3));
    /// assert_eq!(heap.pop_min(), Some(5));
    /// assert_eq!(heap.pop_min(), Some(8));
    /// assert_eq!(heap.pop_min(), None);
    /// ```
    pub fn pop_min(&mut self) -> Option<T> {
        match self.contents.len() {
            0 => None,
            1 => self.contents.pop(),
            _ => {
                let result = self.contents.swap_remove(0);
                self.push_down::<true>(0);
                Some(result)
            }
        }
    }
    /// Removes the maximum element of the heap and returns it, or `None` when empty.
    ///
    /// # Examples
    /// ```
    /// use heaplib::MinMaxHeap;
    /// let mut heap = MinMaxHeap::from(vec![5, 3, 8]);
    /// assert_eq!(heap.pop_max(), Some(8));
    /// assert_eq!(heap.pop_max(), Some(5));
    /// assert_eq!(heap.pop_max(), Some(3));
    /// assert_eq!(heap.pop_max(), None);
    /// ```
    pub fn pop_max(&mut self) -> Option<T> {
        let len = self.contents.len();
        let index = self.max_index()?;
        if index == len - 1 {
            // the last slot needs no refilling
            return self.contents.pop();
        }
        let result = self.contents.swap_remove(index);
        if len > 3 {
            self.push_down::<false>(index);
        }
        Some(result)
    }
}
