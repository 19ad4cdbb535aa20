//! Iterator item type

/// One (key, value) pair produced by a state iterator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateEntry {
    /// State key
    pub key: String,
    /// Serialized value bytes
    pub value: Vec<u8>,
}

impl StateEntry {
    /// Creates an entry
    pub fn new(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
