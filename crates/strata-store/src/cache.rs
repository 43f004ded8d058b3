use std::num::NonZeroUsize;
use std::sync::Mutex;

use lru::LruCache;
use tracing::trace;

use crate::error::{StoreError, StoreResult};
use crate::traits::ObjectStore;

/// Decorator that keeps a bounded LRU cache in front of a wrapped store.
///
/// Reads are served from the cache when possible; misses call through and
/// fill the cache on success. Writes go through to the wrapped store and
/// only enter the cache once the write is confirmed, so the cache never
/// holds a value the backend did not accept. Capacity is fixed at
/// construction; the least-recently-used entry is evicted when full.
///
/// Uses a `Mutex` because the LRU bookkeeping mutates on every lookup. The
/// lock is never held across a call into the wrapped store, which may block
/// on I/O.
pub struct CacheStore<S> {
    inner: S,
    cache: Mutex<LruCache<String, Vec<u8>>>,
}

impl<S: ObjectStore> CacheStore<S> {
    /// Wrap `inner` with an LRU cache holding up to `capacity` entries.
    /// Fails with a configuration error if `capacity` is zero.
    pub fn new(inner: S, capacity: usize) -> StoreResult<Self> {
        let capacity = NonZeroUsize::new(capacity).ok_or_else(|| {
            StoreError::Config("cache capacity must be greater than zero".into())
        })?;
        Ok(Self {
            inner,
            cache: Mutex::new(LruCache::new(capacity)),
        })
    }

    /// The fixed cache capacity in entries.
    pub fn capacity(&self) -> usize {
        self.cache.lock().expect("lock poisoned").cap().get()
    }
}

impl<S: ObjectStore> ObjectStore for CacheStore<S> {
    fn get(&self, key: &str) -> StoreResult<Vec<u8>> {
        {
            let mut cache = self.cache.lock().expect("lock poisoned");
            if let Some(value) = cache.get(key) {
                trace!(key, "cache hit");
                return Ok(value.clone());
            }
        }
        trace!(key, "cache miss");
        let value = self.inner.get(key)?;
        let mut cache = self.cache.lock().expect("lock poisoned");
        cache.put(key.to_owned(), value.clone());
        Ok(value)
    }

    fn set(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        // Evict before writing so a failed write cannot leave a stale entry.
        self.cache.lock().expect("lock poisoned").pop(key);
        self.inner.set(key, value)?;
        // Fill only after the write is confirmed.
        self.cache
            .lock()
            .expect("lock poisoned")
            .put(key.to_owned(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        // The eviction is not rolled back if the wrapped delete fails; a
        // failed delete leaves the cache colder than the backend.
        self.cache.lock().expect("lock poisoned").pop(key);
        self.inner.delete(key)
    }
}

impl<S> std::fmt::Debug for CacheStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cache = self.cache.lock().expect("lock poisoned");
        f.debug_struct("CacheStore")
            .field("entries", &cache.len())
            .field("capacity", &cache.cap().get())
            .finish()
    }
}
