use primitives::{ObjectKey, Position};
use serde::{Deserialize, Serialize};

/// Caller-supplied payload of a stored object. Immutable once stored; the
/// only way to change an object is to remove it and add a replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectData {
    pub flag: bool,
    pub value: i64,
    pub name: String,
}

impl ObjectData {
    pub fn new(flag: bool, value: i64, name: impl Into<String>) -> Self {
        Self {
            flag,
            value,
            name: name.into(),
        }
    }
}

/// One element of the dense backing sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub key: ObjectKey,
    pub data: ObjectData,
}

/// Point-lookup snapshot. `position` is where the object sits in the backing
/// sequence right now; a later removal may hand that slot to another object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatedObject {
    pub position: Position,
    pub object: ObjectData,
}
