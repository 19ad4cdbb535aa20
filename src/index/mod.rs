//! Key Index subsystem for ledgersim
//!
//! Each collection keeps a sorted sequence of its active keys, kept in
//! lockstep with the collection's store by every put and delete.
//!
//! # Design Principles
//!
//! - Derived state: the index mirrors the store, never the source of truth
//! - In-memory only: reset with the ledger instance
//! - Deterministic: ascending lexicographic traversal order
//!
//! # Invariants
//!
//! - Index key set equals store key set after every mutation
//! - Insertion preserves sort order; duplicate inserts are no-ops

mod ordered;

pub use ordered::KeyIndex;
