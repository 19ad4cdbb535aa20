//! Selector error types

use thiserror::Error;

/// Result type for selector parsing and matching
pub type SelectorResult<T> = Result<T, SelectorError>;

/// Errors raised while parsing or evaluating a selector
#[derive(Debug, Error)]
pub enum SelectorError {
    /// Query string is not valid JSON
    #[error("invalid query JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Query object is structurally wrong (missing selector, bad sort shape)
    #[error("malformed query: {0}")]
    Malformed(String),

    /// A `$regex` pattern failed to compile
    #[error("invalid $regex pattern: {0}")]
    Regex(#[from] regex::Error),

    /// Matcher shape or operand type outside the supported operator set
    #[error("unsupported selector for field {field:?}: {reason}")]
    Unsupported { field: String, reason: String },

    /// String-only operator applied to a non-string field
    #[error("field {0:?} is not string-valued")]
    NotString(String),
}

impl SelectorError {
    /// Create an unsupported-selector error
    pub fn unsupported(field: impl Into<String>, reason: impl Into<String>) -> Self {
        SelectorError::Unsupported {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
