use super::*;

impl <T: Ord> From<Vec<T>> for Heap<T> {
    /// Reuses the vector as the heap buffer, no element is copied.
    fn from(vec: Vec<T>) -> Self {
        Heap::heapify(vec)
    }
}

impl <T: Ord, const N: usize> From<[T; N]> for Heap<T> {
    fn from(array: [T; N]) -> Self {
        Heap::heapify(Vec::from(array))
    }
}

impl <T: Ord + Clone> From<&[T]> for Heap<T> {
    /// The source is contiguous, so it is copied as one block.
    fn from(slice: &[T]) -> Self {
        Heap::heapify(slice.to_vec())
    }
}

impl <T: Ord> FromIterator<T> for Heap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Heap::heapify(iter.into_iter().collect())
    }
}
