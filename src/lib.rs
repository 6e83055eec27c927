//! Array-backed priority queues: a binary min-heap and a double-ended min-max heap.
//!
//! Both structures keep their elements in one contiguous buffer addressed as an implicit
//! complete binary tree (see [`Position`]).

pub mod position;
pub mod heap;
pub mod minmax;
pub mod dot;
pub mod error;

#[cfg(test)]
mod tests;

pub use position::Position;
pub use heap::Heap;
pub use minmax::MinMaxHeap;
pub use error::HeapErr;
