//! Iterator protocol errors

use thiserror::Error;

/// Result type for iterator operations
pub type IterResult<T> = Result<T, IterError>;

/// Protocol-usage and value-resolution errors for state iterators.
///
/// Closed is terminal: after `close()` no operation is meaningful, and a
/// second `close()` is itself an error (idempotence is not guaranteed).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IterError {
    /// Operation on a closed iterator
    #[error("{iterator}.{operation}() called after close()")]
    Closed {
        iterator: &'static str,
        operation: &'static str,
    },

    /// `next()` called past the end of the result set
    #[error("{iterator}.next() called when has_next() is false")]
    Exhausted { iterator: &'static str },

    /// An indexed key no longer resolves to a value in the backing store.
    /// Happens when the key was deleted after the iterator snapshotted the
    /// index; surfaced, never swallowed.
    #[error("no value in collection {collection:?} for indexed key {key:?}")]
    MissingValue { collection: String, key: String },
}
