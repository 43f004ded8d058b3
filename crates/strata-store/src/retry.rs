use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::traits::ObjectStore;

/// Decorator that retries a wrapped store's operations on failure.
///
/// Each operation is attempted up to `attempts` times sequentially, stopping
/// at the first success. For `get`, a `NotFound` result is a legitimate
/// answer and is returned immediately rather than retried. If every attempt
/// fails, the last error is returned.
///
/// This is a bounded blind-retry policy: no delay between attempts, and no
/// distinction between retryable and permanent backend errors.
pub struct RetryStore<S> {
    inner: S,
    attempts: u32,
}

impl<S: ObjectStore> RetryStore<S> {
    /// Wrap `inner`, retrying each failed operation up to `attempts` times
    /// in total. Fails with a configuration error if `attempts` is zero.
    pub fn new(inner: S, attempts: u32) -> StoreResult<Self> {
        if attempts == 0 {
            return Err(StoreError::Config(
                "attempts must be greater than zero".into(),
            ));
        }
        Ok(Self { inner, attempts })
    }

    /// The configured attempt count.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

impl<S: ObjectStore> ObjectStore for RetryStore<S> {
    fn get(&self, key: &str) -> StoreResult<Vec<u8>> {
        let mut attempt = 1;
        loop {
            match self.inner.get(key) {
                Ok(value) => return Ok(value),
                // A missing key is a terminal answer, not a fault to retry.
                Err(err) if err.is_not_found() => return Err(err),
                Err(err) if attempt < self.attempts => {
                    debug!(key, attempt, error = %err, "get failed; retrying");
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        let mut attempt = 1;
        loop {
            match self.inner.set(key, value) {
                Ok(()) => return Ok(()),
                Err(err) if attempt < self.attempts => {
                    debug!(key, attempt, error = %err, "set failed; retrying");
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        let mut attempt = 1;
        loop {
            match self.inner.delete(key) {
                Ok(()) => return Ok(()),
                Err(err) if attempt < self.attempts => {
                    debug!(key, attempt, error = %err, "delete failed; retrying");
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

impl<S> std::fmt::Debug for RetryStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetryStore")
            .field("attempts", &self.attempts)
            .finish()
    }
}
