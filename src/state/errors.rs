//! State mutation errors

use thiserror::Error;

/// Result type for state operations
pub type StateResult<T> = Result<T, StateError>;

/// Not-found conditions surfaced by state mutation.
///
/// Deletes are strict: removing an absent key or collection is reported,
/// never silently ignored.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    /// Named collection has never been written
    #[error("collection {0:?} not found")]
    CollectionNotFound(String),

    /// Key holds no value in the collection
    #[error("key {key:?} not found in collection {collection:?}")]
    KeyNotFound { collection: String, key: String },
}
