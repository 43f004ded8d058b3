//! Composable object storage for Strata.
//!
//! This crate defines the key/value contract the rest of the system stores
//! its data through: opaque string keys mapped to opaque byte blobs, with
//! exactly three operations (`get`, `set`, `delete`). Concrete network
//! backends and the filesystem layers above all meet at this interface.
//!
//! # Stores
//!
//! All stores implement the [`ObjectStore`] trait:
//!
//! - [`MemoryStore`] -- `HashMap`-based leaf store for tests and embedding
//! - [`RetryStore`] -- decorator that retries failed operations
//! - [`CacheStore`] -- decorator that adds a bounded LRU cache
//!
//! Decorators wrap any [`ObjectStore`], including each other, forming linear
//! pipelines:
//!
//! ```
//! use strata_store::{CacheStore, MemoryStore, RetryStore, StoreResult};
//!
//! # fn main() -> StoreResult<()> {
//! let backend = MemoryStore::new();
//! let store = CacheStore::new(RetryStore::new(backend, 3)?, 128)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Design Rules
//!
//! 1. The store never interprets value contents -- it is a pure key-value
//!    store.
//! 2. Value bytes are copied at every boundary, in and out. Stored state
//!    never aliases a caller's buffer.
//! 3. A missing key fails with a distinguished `NotFound` error; it is a
//!    valid answer, never retried and never cached.
//! 4. Decorators pass errors through unchanged, never swallowed or
//!    reclassified.
//! 5. Every store is safe for concurrent use when its wrapped store is.
//! 6. All operations are synchronous; timeouts and cancellation belong to
//!    the wrapped backend.

pub mod cache;
pub mod error;
pub mod memory;
pub mod retry;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use cache::CacheStore;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use retry::RetryStore;
pub use traits::ObjectStore;


#[cfg(test)]
mod tests {
    //! Composition tests across the full decorator pipeline.

    use super::*;
    use crate::testing::{CountingStore, FlakyStore};

    #[test]
    fn cache_over_retry_over_memory_roundtrips() {
        let store = CacheStore::new(
            RetryStore::new(MemoryStore::new(), 3).unwrap(),
            128,
        )
        .unwrap();

        store.set("a", b"1").unwrap();
        store.set("b", b"2").unwrap();
        assert_eq!(store.get("a").unwrap(), b"1");
        store.delete("a").unwrap();
        assert!(store.get("a").unwrap_err().is_not_found());
        assert_eq!(store.get("b").unwrap(), b"2");
    }

    #[test]
    fn retry_masks_transient_failures_beneath_the_cache() {
        let backend = FlakyStore::failing(2);
        backend.seed("k", b"v");
        let store = CacheStore::new(RetryStore::new(backend, 3).unwrap(), 4).unwrap();

        // The first two attempts fail; the retry layer absorbs them and the
        // cache fills from the third.
        assert_eq!(store.get("k").unwrap(), b"v");
        // Subsequent reads are cache hits and never reach the backend.
        assert_eq!(store.get("k").unwrap(), b"v");
    }

    #[test]
    fn not_found_propagates_through_the_full_pipeline() {
        let backend = CountingStore::new(MemoryStore::new());
        let store = CacheStore::new(RetryStore::new(backend, 3).unwrap(), 4).unwrap();

        let err = store.get("missing").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn decorators_compose_over_trait_objects() {
        let backend: Box<dyn ObjectStore> = Box::new(MemoryStore::new());
        let store = RetryStore::new(backend, 2).unwrap();

        store.set("k", b"v").unwrap();
        assert_eq!(store.get("k").unwrap(), b"v");
    }
}
