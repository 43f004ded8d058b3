/// Errors from object store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested key was not found.
    ///
    /// A missing key is a legitimate answer, not a fault: decorators treat
    /// it as terminal (retry does not re-attempt it, the cache does not
    /// fill on it) and pass it through unchanged.
    #[error("object not found: {0}")]
    NotFound(String),

    /// Invalid construction parameters (zero retry attempts, zero cache
    /// capacity). Raised at construction time only, never during operation.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Opaque failure from a wrapped backend. This layer never inspects or
    /// reclassifies it.
    #[error("backend error: {0}")]
    Backend(String),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Returns `true` if this error is [`StoreError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
