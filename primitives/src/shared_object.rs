use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockUpgradableReadGuard, RwLockWriteGuard};

/// Shared handle to interior state behind a `parking_lot` rwlock. Every
/// operation holds exactly one guard for its full duration, so each call is
/// a single atomic transition over the guarded value.
#[derive(Default)]
#[repr(transparent)]
pub struct SharedObject<T>(Arc<RwLock<T>>);

impl<T> SharedObject<T> {
    pub fn new(value: T) -> Self {
        Self(Arc::new(RwLock::new(value)))
    }

    pub fn read(&self) -> RwLockReadGuard<'_, T> {
        self.0.read()
    }

    pub fn read_recursive(&self) -> RwLockReadGuard<'_, T> {
        self.0.read_recursive()
    }

    pub fn read_with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&*self.0.read())
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.0.write()
    }

    pub fn write_with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        f(&mut *self.0.write())
    }

    pub fn upgradable(&self) -> SharedObjectReadGuard<'_, T> {
        SharedObjectReadGuard(self.0.upgradable_read())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SharedObject<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", &*self.read_recursive())
    }
}

impl<T> Clone for SharedObject<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> PartialEq for SharedObject<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Eq for SharedObject<T> {}

pub struct SharedObjectReadGuard<'a, T>(RwLockUpgradableReadGuard<'a, T>);

impl<'a, T> SharedObjectReadGuard<'a, T> {
    pub fn upgrade(self) -> SharedObjectWriteGuard<'a, T> {
        SharedObjectWriteGuard(RwLockUpgradableReadGuard::upgrade(self.0))
    }
}

impl<'a, T> std::ops::Deref for SharedObjectReadGuard<'a, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a, T> AsRef<T> for SharedObjectReadGuard<'a, T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub struct SharedObjectWriteGuard<'a, T>(RwLockWriteGuard<'a, T>);

impl<'a, T> SharedObjectWriteGuard<'a, T> {
    pub fn downgrade(self) -> SharedObjectReadGuard<'a, T> {
        SharedObjectReadGuard(RwLockWriteGuard::downgrade_to_upgradable(self.0))
    }
}

impl<'a, T> std::ops::Deref for SharedObjectWriteGuard<'a, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a, T> std::ops::DerefMut for SharedObjectWriteGuard<'a, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a, T> AsRef<T> for SharedObjectWriteGuard<'a, T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<'a, T> AsMut<T> for SharedObjectWriteGuard<'a, T> {
    fn as_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_guards() {
        let shared = SharedObject::new(1u32);

        assert_eq!(*shared.read(), 1);

        *shared.write() += 1;
        assert_eq!(shared.read_with(|n| *n), 2);

        let guard = shared.upgradable();
        let mut guard = guard.upgrade();
        *guard += 1;

        let guard = guard.downgrade();
        assert_eq!(*guard, 3);
    }

    #[test]
    fn test_handles_alias_one_value() {
        let a = SharedObject::new(Vec::<u32>::new());
        let b = a.clone();

        b.write_with(|v| v.push(7));

        assert_eq!(a.read().as_slice(), &[7]);
        assert_eq!(a, b);
        assert_ne!(a, SharedObject::new(Vec::new()));
    }
}
