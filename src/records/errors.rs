//! Record decoding and capability errors

use thiserror::Error;

use crate::selector::SelectorError;

/// Result type for record operations
pub type RecordResult<T> = Result<T, RecordError>;

/// Errors raised while decoding records or exercising their capabilities
#[derive(Debug, Error)]
pub enum RecordError {
    /// No registered shape pattern matches the key. Fails closed: an
    /// unrecognized shape is a fixture bug, not a condition to recover from.
    #[error("no record shape matches key {0:?}")]
    UnknownShape(String),

    /// Stored value is not valid JSON for the matched shape
    #[error("malformed record value for key {key:?}: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Selector names a field the shape does not expose
    #[error("unsupported selector key {0:?}")]
    UnsupportedSelectorKey(String),

    /// Sort names a field the shape cannot order by
    #[error("unsupported sort key {0:?}")]
    UnsupportedSortKey(String),

    /// Sort field compared across records of different shapes
    #[error("cannot compare records of different shapes by {0:?}")]
    ShapeMismatch(String),

    /// Matcher-level failure surfaced by a field evaluation
    #[error(transparent)]
    Selector(#[from] SelectorError),
}
