/// A double-ended priority queue over one contiguous, owned buffer.
///
/// Layers of the tree alternate between min layers (the root's, and every other one below)
/// and max layers. A node on a min layer is less than or equal to all of its descendants, a
/// node on a max layer is greater than or equal to all of them. The minimum is therefore the
/// root and the maximum is one of the root's children.
#[derive(Debug, Clone)]
pub struct MinMaxHeap <T: Ord> {
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

pub use iter::{IntoIter, DrainMin, DrainMax};
