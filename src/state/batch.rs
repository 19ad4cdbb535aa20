//! Buffered writes
//!
//! A `WriteBatch` stages puts and deletes the way the simulated ledger
//! buffers state changes during a transaction; `Ledger::commit` flushes
//! the whole batch into the store under one mutex acquisition.

use uuid::Uuid;

/// One staged mutation
#[derive(Debug, Clone)]
pub(crate) enum WriteOp {
    Put {
        collection: String,
        key: String,
        value: Vec<u8>,
    },
    Delete {
        collection: String,
        key: String,
    },
}

/// An ordered batch of staged writes, applied atomically at commit.
///
/// Staged writes are invisible to reads and queries until committed.
#[derive(Debug, Clone)]
pub struct WriteBatch {
    tx_id: String,
    pub(crate) ops: Vec<WriteOp>,
}

impl WriteBatch {
    /// Creates an empty batch with a generated transaction id
    pub fn new() -> Self {
        Self {
            tx_id: Uuid::new_v4().to_string(),
            ops: Vec::new(),
        }
    }

    /// Creates an empty batch with a caller-supplied transaction id
    pub fn with_tx_id(tx_id: impl Into<String>) -> Self {
        Self {
            tx_id: tx_id.into(),
            ops: Vec::new(),
        }
    }

    /// Returns the batch's transaction id
    pub fn tx_id(&self) -> &str {
        &self.tx_id
    }

    /// Stages a put
    pub fn put(&mut self, collection: &str, key: &str, value: impl Into<Vec<u8>>) -> &mut Self {
        self.ops.push(WriteOp::Put {
            collection: collection.to_string(),
            key: key.to_string(),
            value: value.into(),
        });
        self
    }

    /// Stages a delete
    pub fn delete(&mut self, collection: &str, key: &str) -> &mut Self {
        self.ops.push(WriteOp::Delete {
            collection: collection.to_string(),
            key: key.to_string(),
        });
        self
    }

    /// Number of staged operations
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns true if nothing is staged
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl Default for WriteBatch {
    fn default() -> Self {
        Self::new()
    }
}
