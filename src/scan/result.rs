//! Query result iterator
//!
//! Wraps a materialized, already filtered and sorted result set. Unlike
//! `RangeIterator` the entries are frozen at query time: later mutations
//! to the store do not affect an open result iterator.

use super::entry::StateEntry;
use super::errors::{IterError, IterResult};

const ITERATOR_NAME: &str = "QueryResultIterator";

/// Cursor over an eagerly materialized query result
pub struct QueryResultIterator {
    entries: Vec<StateEntry>,
    position: usize,
    closed: bool,
}

impl QueryResultIterator {
    pub(crate) fn new(entries: Vec<StateEntry>) -> Self {
        Self {
            entries,
            position: 0,
            closed: false,
        }
    }

    /// Returns true if the result set contains additional entries
    pub fn has_next(&self) -> bool {
        if self.closed {
            tracing::debug!(iterator = ITERATOR_NAME, "has_next() on closed iterator");
            return false;
        }
        self.position < self.entries.len()
    }

    /// Returns the next entry of the result set
    pub fn next(&mut self) -> IterResult<StateEntry> {
        if self.closed {
            return Err(IterError::Closed {
                iterator: ITERATOR_NAME,
                operation: "next",
            });
        }
        if self.position >= self.entries.len() {
            return Err(IterError::Exhausted {
                iterator: ITERATOR_NAME,
            });
        }

        let entry = self.entries[self.position].clone();
        self.position += 1;
        Ok(entry)
    }

    /// Closes the iterator. A second close is an error.
    pub fn close(&mut self) -> IterResult<()> {
        if self.closed {
            return Err(IterError::Closed {
                iterator: ITERATOR_NAME,
                operation: "close",
            });
        }
        self.closed = true;
        Ok(())
    }
}
