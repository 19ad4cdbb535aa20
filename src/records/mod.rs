//! Record shapes for ledgersim
//!
//! Stored values are opaque bytes until a query needs to interpret them;
//! the key's shape selects a decoder from a closed set of document shapes.
//!
//! # Design Principles
//!
//! - Closed tagged-variant type: shape dispatch happens once at decode
//!   time, not scattered through the query pipeline
//! - Fail closed: unrecognized key shapes abort the query
//! - Ephemeral: records are decode results, recreated per evaluation

mod affiliate;
mod errors;
mod record;
mod transaction;

pub use affiliate::AffiliateRecord;
pub use errors::{RecordError, RecordResult};
pub use record::Record;
pub use transaction::{TransactionRecord, TxParticipant};
