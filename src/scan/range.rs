//! Range iterator over a collection's ordered key index
//!
//! Bounded by the half-open interval [start_key, end_key); an empty pair
//! for both bounds means "all keys". The key sequence is snapshotted at
//! construction, but values resolve from the live store on every `next()`,
//! so mutations after construction are observable (unlike the eager
//! query-result iterator).

use std::sync::{Arc, Mutex};

use crate::state::StateInner;

use super::entry::StateEntry;
use super::errors::{IterError, IterResult};

const ITERATOR_NAME: &str = "RangeIterator";

/// Stateful cursor over a bounded key range of one collection
pub struct RangeIterator {
    inner: Arc<Mutex<StateInner>>,
    collection: String,
    keys: Vec<String>,
    start_key: String,
    end_key: String,
    position: usize,
    closed: bool,
}

impl RangeIterator {
    pub(crate) fn new(
        inner: Arc<Mutex<StateInner>>,
        collection: impl Into<String>,
        keys: Vec<String>,
        start_key: impl Into<String>,
        end_key: impl Into<String>,
    ) -> Self {
        Self {
            inner,
            collection: collection.into(),
            keys,
            start_key: start_key.into(),
            end_key: end_key.into(),
            position: 0,
            closed: false,
        }
    }

    /// Open-ended scan over every key in the collection
    fn unbounded(&self) -> bool {
        self.start_key.is_empty() && self.end_key.is_empty()
    }

    fn in_bounds(&self, key: &str) -> bool {
        key >= self.start_key.as_str() && key < self.end_key.as_str()
    }

    /// Returns true if the range contains additional keys.
    ///
    /// Scans forward from the cursor without advancing it; false once a
    /// key at or past end_key is reached, or the snapshot is exhausted.
    pub fn has_next(&self) -> bool {
        if self.closed {
            tracing::debug!(iterator = ITERATOR_NAME, "has_next() on closed iterator");
            return false;
        }

        let mut position = self.position;
        while position < self.keys.len() {
            if self.unbounded() {
                return true;
            }
            let key = self.keys[position].as_str();
            if key >= self.start_key.as_str() {
                return key < self.end_key.as_str();
            }
            position += 1;
        }

        false
    }

    /// Returns the next in-bounds key and its current value.
    ///
    /// The value is resolved from the backing store at call time; a key
    /// deleted since the snapshot surfaces `IterError::MissingValue`.
    pub fn next(&mut self) -> IterResult<StateEntry> {
        if self.closed {
            return Err(IterError::Closed {
                iterator: ITERATOR_NAME,
                operation: "next",
            });
        }
        if !self.has_next() {
            return Err(IterError::Exhausted {
                iterator: ITERATOR_NAME,
            });
        }

        while self.position < self.keys.len() {
            let key = self.keys[self.position].clone();
            self.position += 1;

            if self.unbounded() || self.in_bounds(&key) {
                let value = self
                    .inner
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .value_of(&self.collection, &key)
                    .ok_or_else(|| IterError::MissingValue {
                        collection: self.collection.clone(),
                        key: key.clone(),
                    })?;
                return Ok(StateEntry { key, value });
            }
        }

        Err(IterError::Exhausted {
            iterator: ITERATOR_NAME,
        })
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
