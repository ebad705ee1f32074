use primitives::{
    shared_object::{SharedObject, SharedObjectReadGuard, SharedObjectWriteGuard},
    ObjectKey, StoreId,
};

use crate::object::{LocatedObject, ObjectData};

use self::inner::StoreInner;

pub use self::{config::StoreConfig, result::StoreError};

pub mod config;
pub mod inner;
pub mod result;

/// Clonable handle to one indexed object store.
///
/// Each operation holds the lock for its full duration, so a call either
/// commits its whole effect or fails without touching the sequence or the
/// index, even when embedders alias handles.
pub struct Store(SharedObject<StoreInner>);

impl Clone for Store {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl Store {
    pub fn new(id: Option<StoreId>, config: Option<StoreConfig>) -> Self {
        Self(SharedObject::new(StoreInner::new(id, config)))
    }

    pub fn id(&self) -> StoreId {
        self.0.read_with(|inner| inner.id())
    }

    pub fn read(&self) -> SharedObjectReadGuard<'_, StoreInner> {
        self.0.upgradable()
    }

    pub fn write(&self) -> SharedObjectWriteGuard<'_, StoreInner> {
        self.0.upgradable().upgrade()
    }

    /// Stores a new object under `key`. The key must not be live.
    pub fn add(&self, key: ObjectKey, data: ObjectData) -> Result<(), StoreError> {
        let mut inner = self.0.write();
        let position = inner.insert(key, data)?;

        log::debug!("store {}: object {} added at {}", inner.id(), key, position);

        Ok(())
    }

    /// Drops the object stored under `key` in O(1); the tail object is
    /// relocated into the freed slot, which reorders enumeration.
    pub fn remove(&self, key: ObjectKey) -> Result<(), StoreError> {
        let mut inner = self.0.write();
        let removed = inner.remove(key)?;

        log::debug!("store {}: object {} removed", inner.id(), removed.key);

        Ok(())
    }

    /// Looks up `key` and reports the object together with its current
    /// position. The position is not stable across removals.
    pub fn get(&self, key: ObjectKey) -> Result<LocatedObject, StoreError> {
        let inner = self.0.read();
        let (position, data) = inner.get(key)?;

        Ok(LocatedObject {
            position,
            object: data.clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.0.read_with(|inner| inner.len())
    }

    pub fn is_empty(&self) -> bool {
        self.0.read_with(|inner| inner.is_empty())
    }

    pub fn contains(&self, key: ObjectKey) -> bool {
        self.0.read_with(|inner| inner.contains(key))
    }

    /// Snapshot of the keys held at positions `offset..offset + count` in
    /// current backing order.
    pub fn keys(&self, offset: usize, count: usize) -> Result<Vec<ObjectKey>, StoreError> {
        self.0.read_with(|inner| inner.keys(offset, count))
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.0.read_recursive();
        let mut d = f.debug_struct("Store");

        d.field("id", &inner.id());
        d.field(
            "slots",
            &inner.iter().map(|(_, slot)| slot).collect::<Vec<_>>(),
        );
        d.finish()
    }
}
