use super::*;

impl <T: Ord> From<Vec<T>> for MinMaxHeap<T> {
    /// Reuses the vector as the heap buffer, no element is copied.
    fn from(vec: Vec<T>) -> Self {
        MinMaxHeap::heapify(vec)
    }
}

impl <T: Ord, const N: usize> From<[T; N]> for MinMaxHeap<T> {
    fn from(array: [T; N]) -> Self {
        MinMaxHeap::heapify(Vec::from(array))
    }
}

impl <T: Ord + Clone> From<&[T]> for MinMaxHeap<T> {
    /// The source is contiguous, so it is copied as one block.
    fn from(slice: &[T]) -> Self {
        MinMaxHeap::heapify(slice.to_vec())
    }
}

impl <T: Ord> FromIterator<T> for MinMaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        MinMaxHeap::heapify(iter.into_iter().collect())
    }
}
