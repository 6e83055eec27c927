/// A binary min-heap over one contiguous, owned buffer.
///
/// The buffer is a complete binary tree addressed through [`Position`](crate::Position):
/// every element is less than or equal to its children, so the minimum sits at the root.
#[derive(Debug, Clone)]
pub struct Heap <T: Ord> {
    pub(crate) contents: Vec<T>,
}

mod construct;
mod from;
mod bubble;
mod push;
mod pop;
mod property;
mod check;
mod extend;
mod iter;
mod into;

pub use iter::{IntoIter, DrainSorted};
