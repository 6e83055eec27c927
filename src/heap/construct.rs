use super::*;

impl <T: Ord> Heap<T> {
    /// Creates an empty `Heap<T>`.
    ///
    /// # Examples
    /// ```
    /// use heaplib::Heap;
    /// let mut heap = Heap::<i32>::new();
    /// heap.push(4);
    /// ```
    pub fn new() -> Self {
        Heap { contents: Vec::new() }
    }
    /// Creates an empty `Heap<T>` able to hold at least `capacity` elements without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Heap { contents: Vec::with_capacity(capacity) }
    }
    /// Takes ownership of `contents` and orders it bottom-up in linear time.
    pub(crate) fn heapify(contents: Vec<T>) -> Self {
        let mut heap = Heap { contents };
        let len = heap.contents.len();
        if len < 2 {
            return heap;
        }
        log::trace!("heapify {} elements", len);
        let last_parent = (len - 2) / 2;
        for index in (0..=last_parent).rev() {
            heap.sift_down(index);
        }
        heap
    }
}

impl <T: Ord> Default for Heap<T> {
    fn default() -> Self {
        Self::new()
    }
}
