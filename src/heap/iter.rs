use super::*;

/// Owning iterator that pops the heap until it is empty, yielding ascending elements.
#[derive(Debug, Clone)]
pub struct IntoIter <T: Ord> {
    pub(crate) heap: Heap<T>,
}

impl <T: Ord> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl <T: Ord> ExactSizeIterator for IntoIter<T> {}

impl <T: Ord> IntoIterator for Heap<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { heap: self }
    }
}

/// Borrowing iterator that pops ascending elements; whatever is left is dropped with it.
pub struct DrainSorted <'a, T: Ord> {
    pub(crate) heap: &'a mut Heap<T>,
}

impl <'a, T: Ord> Iterator for DrainSorted<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl <'a, T: Ord> ExactSizeIterator for DrainSorted<'a, T> {}

impl <'a, T: Ord> Drop for DrainSorted<'a, T> {
    fn drop(&mut self) {
        self.heap.clear();
    }
}

impl <'a, T: Ord> IntoIterator for &'a Heap<T> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.contents.iter()
    }
}

impl <T: Ord> Heap<T> {
    /// Iterates the elements in heap order, not sorted.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.into_iter()
    }
    /// Pops every element in ascending order. The heap is empty once the iterator is dropped.
    ///
    /// # Examples
    /// ```
    /// use heaplib::Heap;
    /// let mut heap = Heap::from(vec![5, 3, 8, 1, 9, 2]);
    /// let sorted: Vec<_> = heap.drain_sorted().collect();
    /// assert_eq!(sorted, vec![1, 2, 3, 5, 8, 9]);
    /// assert!(heap.is_empty());
    /// ```
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T> {
        DrainSorted { heap: self }
    }
}
