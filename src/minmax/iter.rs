use super::*;

/// Owning iterator that pops the minimum until the heap is empty.
#[derive(Debug, Clone)]
pub struct IntoIter <T: Ord> {
    pub(crate) heap: MinMaxHeap<T>,
}

impl <T: Ord> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.heap.pop_min()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl <T: Ord> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.heap.pop_max()
    }
}

impl <T: Ord> ExactSizeIterator for IntoIter<T> {}

impl <T: Ord> IntoIterator for MinMaxHeap<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { heap: self }
    }
}

/// Borrowing iterator popping ascending elements; whatever is left is dropped with it.
pub struct DrainMin <'a, T: Ord> {
    pub(crate) heap: &'a mut MinMaxHeap<T>,
}

impl <'a, T: Ord> Iterator for DrainMin<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.heap.pop_min()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl <'a, T: Ord> ExactSizeIterator for DrainMin<'a, T> {}

impl <'a, T: Ord> Drop for DrainMin<'a, T> {
    fn drop(&mut self) {
        self.heap.clear();
    }
}

/// Borrowing iterator popping descending elements; whatever is left is dropped with it.
pub struct DrainMax <'a, T: Ord> {
    pub(crate) heap: &'a mut MinMaxHeap<T>,
}

impl <'a, T: Ord> Iterator for DrainMax<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.heap.pop_max()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl <'a, T: Ord> ExactSizeIterator for DrainMax<'a, T> {}

impl <'a, T: Ord> Drop for DrainMax<'a, T> {
    fn drop(&mut self) {
        self.heap.clear();
    }
}

impl <'a, T: Ord> IntoIterator for &'a MinMaxHeap<T> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.contents.iter()
    }
}

impl <T: Ord> MinMaxHeap<T> {
    /// Iterates the elements in heap order, not sorted.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.into_iter()
    }
    /// Pops every element in ascending order. The heap is empty once the iterator is dropped.
    pub fn drain_min(&mut self) -> DrainMin<'_, T> {
        DrainMin { heap: self }
    }
    /// Pops every element in descending order. The heap is empty once the iterator is dropped.
    ///
    /// # Examples
    /// ```
    /// use heaplib::MinMaxHeap;
    /// let mut heap = MinMaxHeap::from(vec![5, 3, 8, 1, 9, 2]);
    /// let sorted: Vec<_> = heap.drain_max().collect();
    /// assert_eq!(sorted, vec![9, 8, 5, 3, 2, 1]);
    /// assert!(heap.is_empty());
    /// ```
    pub fn drain_max(&mut self) -> DrainMax<'_, T> {
        DrainMax { heap: self }
    }
}
