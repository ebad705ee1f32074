use primitives::ObjectKey;

/// Caller-input failures. A rejected call commits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("object {key} already exists")]
    DuplicateKey { key: ObjectKey },
    #[error("no object stored under key {key}")]
    KeyNotFound { key: ObjectKey },
    #[error("window {offset}+{count} reaches past the {len} live objects")]
    RangeOutOfBounds {
        offset: usize,
        count: usize,
        len: usize,
    },
}
