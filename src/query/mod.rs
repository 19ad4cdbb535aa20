//! Query pipeline for ledgersim
//!
//! Full-scan selector queries over the world state: every entry is
//! decoded and evaluated against the selector, survivors get a stable
//! multi-key sort, and the ordered result is either returned whole or
//! sliced into bookmark-resumable pages.
//!
//! # Design Principles
//!
//! - Deterministic: entries scan in ascending key order, the sort is
//!   stable, and the same state plus the same query yields the same
//!   result sequence
//! - Eager: the result set is materialized at query time; an open result
//!   iterator never observes later mutations
//! - All or nothing: the first decode or evaluation error aborts the
//!   call with no partial results

mod errors;
mod page;
mod pipeline;

pub use errors::{QueryError, QueryResult};
pub use page::PageMetadata;
pub use pipeline::QueryPipeline;

pub(crate) use page::paginate;

pub use crate::scan::QueryResultIterator;
