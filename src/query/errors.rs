//! Query entry-point errors

use thiserror::Error;

use crate::records::RecordError;
use crate::selector::SelectorError;

/// Result type for query entry points
pub type QueryResult<T> = Result<T, QueryError>;

/// Failure of a whole query call. No partial results are ever returned:
/// the first decode or evaluation error aborts the scan.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Selector wire format could not be parsed
    #[error(transparent)]
    Selector(#[from] SelectorError),

    /// A state entry could not be decoded, evaluated, or compared
    #[error(transparent)]
    Record(#[from] RecordError),
}
