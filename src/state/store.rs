//! The simulated ledger state
//!
//! `Ledger` owns one key-value store per collection (the world state is
//! the unnamed collection) plus the ordered key index kept in lockstep
//! with each store. A single mutex serializes every mutation and every
//! snapshot-materializing read, so queries never observe a half-applied
//! batch.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::index::KeyIndex;
use crate::query::{paginate, PageMetadata, QueryPipeline, QueryResult};
use crate::scan::{QueryResultIterator, RangeIterator, StateEntry};

use super::batch::{WriteBatch, WriteOp};
use super::composite::{composite_key, MAX_CODEPOINT};
use super::errors::{StateError, StateResult};

/// Name of the world-state collection
pub const WORLD_STATE: &str = "";

/// One collection's store and its ordered key index
#[derive(Debug, Default)]
struct CollectionState {
    values: HashMap<String, Vec<u8>>,
    index: KeyIndex,
}

/// All collection state guarded by the ledger mutex
#[derive(Debug, Default)]
pub(crate) struct StateInner {
    collections: HashMap<String, CollectionState>,
}

impl StateInner {
    pub(crate) fn put(&mut self, collection: &str, key: &str, value: Vec<u8>) {
        let state = self.collections.entry(collection.to_string()).or_default();
        state.values.insert(key.to_string(), value);
        state.index.insert(key);
    }

    pub(crate) fn delete(&mut self, collection: &str, key: &str) -> StateResult<()> {
        let state = self
            .collections
            .get_mut(collection)
            .ok_or_else(|| StateError::CollectionNotFound(collection.to_string()))?;

        if state.values.remove(key).is_none() {
            return Err(StateError::KeyNotFound {
                collection: collection.to_string(),
                key: key.to_string(),
            });
        }
        state.index.remove(key);
        Ok(())
    }

    pub(crate) fn value_of(&self, collection: &str, key: &str) -> Option<Vec<u8>> {
        self.collections
            .get(collection)
            .and_then(|state| state.values.get(key))
            .cloned()
    }

    /// Snapshot of a collection's index; empty for unknown collections
    fn snapshot_keys(&self, collection: &str) -> Vec<String> {
        self.collections
            .get(collection)
            .map(|state| state.index.keys().to_vec())
            .unwrap_or_default()
    }

    /// Materializes a collection's entries in ascending key order
    fn snapshot_entries(&self, collection: &str) -> Vec<StateEntry> {
        let state = match self.collections.get(collection) {
            Some(state) => state,
            None => return Vec::new(),
        };
        state
            .index
            .keys()
            .iter()
            .filter_map(|key| {
                state
                    .values
                    .get(key)
                    .map(|value| StateEntry::new(key.clone(), value.clone()))
            })
            .collect()
    }
}

/// An independent simulated ledger instance.
///
/// Cloning shares the underlying state; construct one per test harness
/// for isolation.
#[derive(Clone, Default)]
pub struct Ledger {
    inner: Arc<Mutex<StateInner>>,
}

impl Ledger {
    /// Creates an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StateInner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Writes a value, creating the collection on first use.
    /// Store and index update together under the mutex.
    pub fn put(&self, collection: &str, key: &str, value: impl Into<Vec<u8>>) {
        self.lock().put(collection, key, value.into());
    }

    /// Reads a value; None when the collection or key is absent
    pub fn get(&self, collection: &str, key: &str) -> Option<Vec<u8>> {
        self.lock().value_of(collection, key)
    }

    /// Deletes a key. Absent collections and keys are not-found errors.
    pub fn delete(&self, collection: &str, key: &str) -> StateResult<()> {
        self.lock().delete(collection, key)
    }

    /// Applies a batch of staged writes in order under one mutex
    /// acquisition, stopping at the first failing operation.
    pub fn commit(&self, batch: WriteBatch) -> StateResult<()> {
        let mut inner = self.lock();
        let op_count = batch.ops.len();
        let tx_id = batch.tx_id().to_string();
        for op in batch.ops {
            match op {
                WriteOp::Put {
                    collection,
                    key,
                    value,
                } => inner.put(&collection, &key, value),
                WriteOp::Delete { collection, key } => inner.delete(&collection, &key)?,
            }
        }
        tracing::debug!(tx_id = %tx_id, ops = op_count, "committed write batch");
        Ok(())
    }

    /// Opens a range scan over `[start_key, end_key)`; both bounds empty
    /// means all keys. The key sequence is snapshotted now, values resolve
    /// lazily.
    pub fn get_range(&self, collection: &str, start_key: &str, end_key: &str) -> RangeIterator {
        let keys = self.lock().snapshot_keys(collection);
        RangeIterator::new(
            Arc::clone(&self.inner),
            collection,
            keys,
            start_key,
            end_key,
        )
    }

    /// Opens a prefix scan: bounds `[prefix, prefix + maximal codepoint)`
    pub fn get_by_prefix(&self, collection: &str, prefix: &str) -> RangeIterator {
        let end_key = format!("{prefix}{MAX_CODEPOINT}");
        self.get_range(collection, prefix, &end_key)
    }

    /// Opens a composite-key prefix scan for an object type and a leading
    /// subset of its attributes
    pub fn get_by_partial_composite_key(
        &self,
        collection: &str,
        object_type: &str,
        attributes: &[&str],
    ) -> RangeIterator {
        let prefix = composite_key(object_type, attributes);
        self.get_by_prefix(collection, &prefix)
    }

    /// Runs a selector query over the world state.
    ///
    /// The result set is filtered, sorted, and materialized eagerly; the
    /// returned iterator is unaffected by later mutations.
    pub fn query(&self, raw: &str) -> QueryResult<QueryResultIterator> {
        let entries = self.lock().snapshot_entries(WORLD_STATE);
        let ordered = QueryPipeline::run(entries, raw)?;
        Ok(QueryResultIterator::new(ordered))
    }

    /// Runs a selector query and slices one page out of the ordered
    /// result set, resuming from `bookmark` when non-empty.
    pub fn query_with_pagination(
        &self,
        raw: &str,
        page_size: u32,
        bookmark: &str,
    ) -> QueryResult<(QueryResultIterator, PageMetadata)> {
        let entries = self.lock().snapshot_entries(WORLD_STATE);
        let ordered = QueryPipeline::run(entries, raw)?;
        let (page, metadata) = paginate(ordered, page_size, bookmark);
        Ok((QueryResultIterator::new(page), metadata))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_round_trip() {
        let ledger = Ledger::new();
        ledger.put(WORLD_STATE, "k1", b"v1".to_vec());

        assert_eq!(ledger.get(WORLD_STATE, "k1"), Some(b"v1".to_vec()));
        assert_eq!(ledger.get(WORLD_STATE, "k2"), None);
    }

    #[test]
    fn test_collections_are_isolated() {
        let ledger = Ledger::new();
        ledger.put("private-a", "k", b"a".to_vec());
        ledger.put("private-b", "k", b"b".to_vec());

        assert_eq!(ledger.get("private-a", "k"), Some(b"a".to_vec()));
        assert_eq!(ledger.get("private-b", "k"), Some(b"b".to_vec()));
        assert_eq!(ledger.get(WORLD_STATE, "k"), None);
    }

    #[test]
    fn test_delete_is_strict() {
        let ledger = Ledger::new();

        assert_eq!(
            ledger.delete("ghost", "k"),
            Err(StateError::CollectionNotFound("ghost".into()))
        );

        ledger.put("c", "k", b"v".to_vec());
        assert_eq!(
            ledger.delete("c", "other"),
            Err(StateError::KeyNotFound {
                collection: "c".into(),
                key: "other".into()
            })
        );
        assert_eq!(ledger.delete("c", "k"), Ok(()));
        assert_eq!(ledger.get("c", "k"), None);
    }

    #[test]
    fn test_overwrite_keeps_single_index_entry() {
        let ledger = Ledger::new();
        ledger.put("c", "k", b"v1".to_vec());
        ledger.put("c", "k", b"v2".to_vec());

        let mut iter = ledger.get_range("c", "", "");
        assert_eq!(iter.next().unwrap().value, b"v2".to_vec());
        assert!(!iter.has_next());
    }

    #[test]
    fn test_commit_applies_batch_in_order() {
        let ledger = Ledger::new();
        ledger.put("c", "stale", b"v".to_vec());

        let mut batch = WriteBatch::with_tx_id("tx1");
        batch.put("c", "k1", b"v1".to_vec());
        batch.delete("c", "stale");
        batch.put("c", "k2", b"v2".to_vec());

        // Staged writes are invisible until commit
        assert_eq!(ledger.get("c", "k1"), None);

        ledger.commit(batch).unwrap();
        assert_eq!(ledger.get("c", "k1"), Some(b"v1".to_vec()));
        assert_eq!(ledger.get("c", "k2"), Some(b"v2".to_vec()));
        assert_eq!(ledger.get("c", "stale"), None);
    }

    #[test]
    fn test_commit_stops_at_first_failing_op() {
        let ledger = Ledger::new();
        ledger.put("c", "k0", b"v".to_vec());

        let mut batch = WriteBatch::new();
        batch.put("c", "k1", b"v1".to_vec());
        batch.delete("c", "missing");
        batch.put("c", "k2", b"v2".to_vec());

        assert!(ledger.commit(batch).is_err());
        // Ops before the failure landed, the rest did not
        assert_eq!(ledger.get("c", "k1"), Some(b"v1".to_vec()));
        assert_eq!(ledger.get("c", "k2"), None);
    }

    #[test]
    fn test_unknown_collection_range_is_empty() {
        let ledger = Ledger::new();
        let iter = ledger.get_range("ghost", "", "");
        assert!(!iter.has_next());
    }
}
