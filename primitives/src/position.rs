use serde::{Deserialize, Serialize};

/// Index of a slot within the dense backing sequence. A removal may relocate
/// the tail slot into the freed index, so positions are volatile and must not
/// be held across mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Position(usize);

impl Position {
    pub fn new(n: usize) -> Self {
        Self(n)
    }

    pub fn into_usize(self) -> usize {
        self.0
    }
}

impl From<usize> for Position {
    fn from(n: usize) -> Self {
        Self(n)
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> Self {
        pos.0
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
