use std::{error::Error, fmt::Display};

use crate::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapErr {
    /// The element at this position breaks the ordering of the structure.
    InvariantBroken(Position),
}

impl Error for HeapErr {}

impl Display for HeapErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeapErr::InvariantBroken(position) => write!(f, "invariants broken at {}", position),
        }
    }
}

impl HeapErr {
    pub(crate) fn check(broken: Option<Position>) -> Result<(), HeapErr> {
        match broken {
            Some(position) => Err(HeapErr::InvariantBroken(position)),
            None => Ok(()),
        }
    }
}
