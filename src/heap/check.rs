use crate::error::HeapErr;
use crate::position::{Position, Tree};

use super::*;

impl <T: Ord> Heap<T> {
    /// Returns the first position holding an element smaller than its parent, if any.
    pub fn check_invariants(&self) -> Option<Position> {
        let buffer = &self.contents[..];
        let broken = (1..buffer.len())
            .map(Position::new)
            .find(|&position| buffer.at(position) < buffer.at(position.parent()));
        if let Some(position) = broken {
            log::warn!("heap invariants broken at position {}", position);
        }
        broken
    }
    pub fn validate(&self) -> Result<(), HeapErr> {
        HeapErr::check(self.check_invariants())
    }
}
