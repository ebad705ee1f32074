pub mod object;
pub mod store;

pub use object::{LocatedObject, ObjectData, Slot};
pub use store::{Store, StoreConfig, StoreError};
