use serde::{Deserialize, Serialize};

/// Pre-sizing for the backing sequence and the key index. Zero leaves both
/// to allocate on first insert.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub initial_capacity: usize,
}

impl StoreConfig {
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }
}
