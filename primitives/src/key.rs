use serde::{Deserialize, Serialize};

/// Externally assigned identifier for a stored object. The key is the only
/// stable handle an object has; slot positions move as removals compact the
/// backing sequence.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(transparent)]
pub struct ObjectKey(u64);

impl ObjectKey {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn into_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for ObjectKey {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<ObjectKey> for u64 {
    fn from(key: ObjectKey) -> Self {
        key.0
    }
}

impl std::fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
