use crate::error::HeapErr;
use crate::position::{Position, Tree};

use super::*;

/// Checks `position` and its subtree against the closed interval `[lower, upper]` inherited
/// from its ancestors.
fn check<T: Ord>(buffer: &[T], position: Position, lower: &T, upper: &T, min_layer: bool) -> Option<Position> {
    let value = buffer.at(position);
    if value < lower || value > upper {
        log::warn!("position {}: invariants broken", position);
        return Some(position);
    }
    let (lower, upper) = if min_layer { (value, upper) } else { (lower, value) };
    if let Some(left) = buffer.left_child(position) {
        if let Some(broken) = check(buffer, left, lower, upper, !min_layer) {
            return Some(broken);
        }
    }
    if let Some(right) = buffer.right_child(position) {
        if let Some(broken) = check(buffer, right, lower, upper, !min_layer) {
            return Some(broken);
        }
    }
    None
}

impl <T: Ord> MinMaxHeap<T> {
    /// Verifies every node against the bounds set by its ancestors and returns the first
    /// position out of bounds. Meant for tests and debugging.
    ///
    /// # Examples
    /// ```
    /// use heaplib::MinMaxHeap;
    /// let heap = MinMaxHeap::from(vec![5, 3, 8, 1, 9, 2]);
    /// assert_eq!(heap.check_invariants(), None);
    /// ```
    pub fn check_invariants(&self) -> Option<Position> {
        let buffer = &self.contents[..];
        if buffer.len() < 2 {
            return None;
        }
        let top = &buffer[..buffer.len().min(3)];
        let (lower, upper) = match (top.iter().min(), top.iter().max()) {
            (Some(lower), Some(upper)) => (lower, upper),
            _ => return None,
        };
        check(buffer, Position::ROOT, lower, upper, true)
    }
    pub fn validate(&self) -> Result<(), HeapErr> {
        HeapErr::check(self.check_invariants())
    }
}
