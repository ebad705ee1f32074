use std::collections::HashMap;

use primitives::{ObjectKey, Position, StoreId};

use crate::object::{ObjectData, Slot};

use super::{config::StoreConfig, result::StoreError};

/// Dense sequence of live slots plus the key index pointing into it.
///
/// Invariant: `slots[index[key]].key == key` for every live key, and
/// `slots.len() == index.len()`. Every operation validates its inputs before
/// the first mutation, so a failed call leaves both structures untouched.
#[derive(Debug)]
pub struct StoreInner {
    id: StoreId,
    slots: Vec<Slot>,
    index: HashMap<ObjectKey, Position>,
}

impl StoreInner {
    pub fn new(id: Option<StoreId>, config: Option<StoreConfig>) -> Self {
        let config = config.unwrap_or_default();

        Self {
            id: id.unwrap_or_default(),
            slots: Vec::with_capacity(config.initial_capacity),
            index: HashMap::with_capacity(config.initial_capacity),
        }
    }

    pub fn id(&self) -> StoreId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, key: ObjectKey) -> bool {
        self.index.contains_key(&key)
    }

    /// Appends the object at the tail of the sequence and indexes its key.
    pub fn insert(&mut self, key: ObjectKey, data: ObjectData) -> Result<Position, StoreError> {
        if self.index.contains_key(&key) {
            return Err(StoreError::DuplicateKey { key });
        }

        let position = Position::new(self.slots.len());

        self.slots.push(Slot { key, data });
        self.index.insert(key, position);

        Ok(position)
    }

    /// Swap-and-truncate removal: the tail slot takes over the freed
    /// position (unless the tail itself was removed) and its key is
    /// re-pointed there. Costs O(1) and reorders enumeration.
    pub fn remove(&mut self, key: ObjectKey) -> Result<Slot, StoreError> {
        let position = self
            .index
            .remove(&key)
            .ok_or(StoreError::KeyNotFound { key })?;

        let removed = self.slots.swap_remove(position.into_usize());

        if let Some(moved) = self.slots.get(position.into_usize()) {
            self.index.insert(moved.key, position);
        }

        Ok(removed)
    }

    pub fn get(&self, key: ObjectKey) -> Result<(Position, &ObjectData), StoreError> {
        let position = self
            .index
            .get(&key)
            .copied()
            .ok_or(StoreError::KeyNotFound { key })?;

        // the index invariant keeps every tracked position in bounds
        Ok((position, &self.slots[position.into_usize()].data))
    }

    /// Snapshot of the keys at positions `offset..offset + count` in current
    /// backing order. Every window is out of bounds on an empty store.
    pub fn keys(&self, offset: usize, count: usize) -> Result<Vec<ObjectKey>, StoreError> {
        let len = self.slots.len();

        let end = match offset.checked_add(count) {
            Some(end) if len > 0 && end <= len => end,
            _ => return Err(StoreError::RangeOutOfBounds { offset, count, len }),
        };

        Ok(self.slots[offset..end].iter().map(|slot| slot.key).collect())
    }

    /// Live slots in position order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Slot)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(n, slot)| (Position::new(n), slot))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn data(n: u64) -> ObjectData {
        ObjectData::new(n % 2 == 0, 100 + n as i64, format!("obj-{n}"))
    }

    #[test]
    fn test_appends_take_tail_positions() {
        let mut inner = StoreInner::new(None, None);

        for n in 0..4 {
            let position = inner.insert(ObjectKey::new(n), data(n)).unwrap();
            assert_eq!(position.into_usize(), n as usize);
        }

        assert_eq!(inner.len(), 4);
    }

    #[test]
    fn test_remove_repoints_tail_key() {
        let mut inner = StoreInner::new(None, None);

        for n in 0..3 {
            inner.insert(ObjectKey::new(n), data(n)).unwrap();
        }

        let removed = inner.remove(ObjectKey::new(0)).unwrap();
        assert_eq!(removed.key, ObjectKey::new(0));

        // tail slot (key 2) now occupies position 0 and the index agrees
        let (position, found) = inner.get(ObjectKey::new(2)).unwrap();
        assert_eq!(position.into_usize(), 0);
        assert_eq!(*found, data(2));

        let order: Vec<_> = inner.iter().map(|(_, slot)| slot.key).collect();
        assert_eq!(order, vec![ObjectKey::new(2), ObjectKey::new(1)]);
    }

    #[test]
    fn test_explicit_id_and_capacity() {
        let id = StoreId::from_uint(9u32).unwrap();
        let inner = StoreInner::new(Some(id), Some(StoreConfig::with_capacity(32)));

        assert_eq!(inner.id(), id);
        assert!(inner.is_empty());
    }
}
