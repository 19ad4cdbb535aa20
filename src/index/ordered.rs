//! Ordered key index backing range scans
//!
//! One `KeyIndex` exists per collection and mirrors the key set of that
//! collection's store. Insertion keeps ascending lexicographic order by
//! scanning from the head, which is acceptable at fixture scale.

use std::cmp::Ordering;

/// Per-collection ordered sequence of active keys.
///
/// Invariant: a key is present here if and only if it currently holds a
/// value in the collection's store. All operations are total.
#[derive(Debug, Clone, Default)]
pub struct KeyIndex {
    keys: Vec<String>,
}

impl KeyIndex {
    /// Creates an empty index
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Inserts a key, preserving ascending order.
    ///
    /// Scans from the front until an equal key (no-op), a strictly greater
    /// key (insert before it), or the end of the sequence (append).
    pub fn insert(&mut self, key: &str) {
        let mut insert_at = self.keys.len();
        for (pos, existing) in self.keys.iter().enumerate() {
            match key.cmp(existing.as_str()) {
                Ordering::Equal => return,
                Ordering::Less => {
                    insert_at = pos;
                    break;
                }
                Ordering::Greater => continue,
            }
        }
        self.keys.insert(insert_at, key.to_string());
    }

    /// Removes a key if present. Returns whether a key was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.keys.iter().position(|k| k == key) {
            Some(pos) => {
                self.keys.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Returns true if the key is present
    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Returns the first (smallest) key, if any
    pub fn first(&self) -> Option<&str> {
        self.keys.first().map(String::as_str)
    }

    /// Traversal view over all keys, ascending
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Number of indexed keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if no keys are indexed
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
