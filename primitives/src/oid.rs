use std::num::NonZeroU32;

use anyhow::Result;
use base62::{decode, encode};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Randomly minted identifier for a store instance, rendered in base62.
/// Zero is reserved so the niche stays available to `Option<StoreId>`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct StoreId(NonZeroU32);

impl StoreId {
    pub const INVALID: Self = Self(NonZeroU32::MAX);
    pub const NIL: Option<Self> = None;

    pub fn new() -> Self {
        loop {
            match NonZeroU32::new(rand::random::<u32>()) {
                Some(id) if id.get() != u32::MAX => return Self(id),
                _ => continue,
            }
        }
    }

    pub fn from_uint(id: impl Into<u32>) -> Option<Self> {
        Some(Self(NonZeroU32::new(id.into())?))
    }

    pub fn try_from_uint(id: impl TryInto<u32>) -> Result<Self> {
        match id.try_into() {
            Ok(id) => match NonZeroU32::new(id) {
                Some(id) => Ok(Self(id)),
                None => anyhow::bail!("cannot be zero"),
            },
            Err(_) => anyhow::bail!("invalid value"),
        }
    }

    pub fn into_u32(self) -> u32 {
        self.0.get()
    }
}

impl Default for StoreId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StoreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", encode(self.0.get()))
    }
}

impl std::fmt::Display for StoreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", encode(self.0.get()))
    }
}

impl std::str::FromStr for StoreId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let raw = decode(s).map_err(|e| anyhow::anyhow!("{e}"))?;

        if raw > u32::MAX as u128 {
            anyhow::bail!("value out of range");
        }

        Self::try_from_uint(raw as u32)
    }
}

impl Serialize for StoreId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&encode(self.0.get()))
    }
}

impl<'de> Deserialize<'de> for StoreId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;

        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new_is_nonzero() {
        for _ in 0..64 {
            let id = StoreId::new();

            assert_ne!(id.into_u32(), 0);
            assert_ne!(id, StoreId::INVALID);
        }
    }

    #[test]
    fn test_from_uint() {
        assert!(StoreId::from_uint(0u32).is_none());
        assert!(StoreId::try_from_uint(0u32).is_err());
        assert!(StoreId::try_from_uint(u64::MAX).is_err());
        assert_eq!(
            StoreId::try_from_uint(7u32).unwrap(),
            StoreId::from_uint(7u32).unwrap()
        );
    }

    #[test]
    fn test_text_roundtrip() -> Result<()> {
        let id = StoreId::new();
        let parsed: StoreId = id.to_string().parse()?;

        assert_eq!(parsed, id);

        Ok(())
    }
}
