//! State iterators for ledgersim
//!
//! Two cursor variants share one protocol (`has_next` / `next` / `close`):
//!
//! - `RangeIterator`: bounded by a half-open key interval over one
//!   collection's ordered index; resolves values lazily from the live
//!   store on every `next()`.
//! - `QueryResultIterator`: wraps a result set the query pipeline
//!   materialized eagerly; immune to later store mutations.
//!
//! The lazy-vs-eager split is an intentional trade-off carried over from
//! the ledger this simulator stands in for.
//!
//! # Invariants
//!
//! - Closed is terminal; double close is an error, not a no-op
//! - `next()` past exhaustion is an error, never a value

mod entry;
mod errors;
mod range;
mod result;

pub use entry::StateEntry;
pub use errors::{IterError, IterResult};
pub use range::RangeIterator;
pub use result::QueryResultIterator;
