//! ledgersim - a deterministic in-memory ledger-state simulator
//!
//! Exercises chaincode-style business logic against key-value world state
//! and document-style queries without a real distributed backing store.

pub mod index;
pub mod query;
pub mod records;
pub mod scan;
pub mod selector;
pub mod state;

pub use query::{PageMetadata, QueryResultIterator};
pub use scan::RangeIterator;
pub use state::{Ledger, StateEntry, WriteBatch, WORLD_STATE};
