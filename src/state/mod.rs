//! World state subsystem for ledgersim
//!
//! Holds the key-value stores backing the simulated ledger: the world
//! state plus one store per named private collection, each mirrored by an
//! ordered key index.
//!
//! # Design Principles
//!
//! - Explicit lifecycle: state is constructed per `Ledger` instance and
//!   torn down by the test harness, never ambient process-wide
//! - One mutex: mutation, batch commit, and snapshot materialization are
//!   mutually exclusive
//! - Strict deletes: not-found conditions are reported, not swallowed

mod batch;
mod composite;
mod errors;
mod store;

pub use batch::WriteBatch;
pub use composite::{composite_key, split_composite_key, MAX_CODEPOINT};
pub use errors::{StateError, StateResult};
pub use store::{Ledger, WORLD_STATE};

pub(crate) use store::StateInner;

pub use crate::scan::StateEntry;
