pub mod key;
pub mod oid;
pub mod position;
pub mod shared_object;

pub use key::ObjectKey;
pub use oid::StoreId;
pub use position::Position;
pub use shared_object::SharedObject;
