use std::sync::Arc;

use crate::error::StoreResult;

/// Uniform key/value interface over opaque byte blobs.
///
/// All implementations must satisfy these invariants:
/// - `get` on a key never written (or already deleted) fails with
///   [`StoreError::NotFound`](crate::StoreError::NotFound), distinct from
///   backend failures.
/// - After a successful `set(k, v)`, an immediately following `get(k)` on
///   the same instance (absent concurrent mutation) returns bytes equal
///   to `v`.
/// - After a successful `delete(k)`, an immediately following `get(k)`
///   fails with `NotFound`.
/// - Value bytes are copied at both boundaries: mutating a caller's buffer
///   after `set` returns, or mutating a returned buffer, never corrupts
///   stored state.
/// - The store never interprets value contents — it is a pure key-value
///   store.
/// - All errors are propagated, never silently ignored.
pub trait ObjectStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `NotFound` if the key does not exist, or a backend error on
    /// failure. The returned buffer is the caller's to keep.
    fn get(&self, key: &str) -> StoreResult<Vec<u8>>;

    /// Store `value` under `key`, overwriting any prior value.
    ///
    /// Repeating a successful `set` yields the same observable state.
    fn set(&self, key: &str, value: &[u8]) -> StoreResult<()>;

    /// Remove `key` if present. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> StoreResult<()>;
}

impl<S: ObjectStore + ?Sized> ObjectStore for Box<S> {
    fn get(&self, key: &str) -> StoreResult<Vec<u8>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        (**self).delete(key)
    }
}

impl<S: ObjectStore + ?Sized> ObjectStore for Arc<S> {
    fn get(&self, key: &str) -> StoreResult<Vec<u8>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        (**self).delete(key)
    }
}
