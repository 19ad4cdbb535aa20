//! Record decoding registry
//!
//! Maps a stored key's shape to a typed-record decoder. Dispatch tests the
//! key for known substrings, first match wins; an unrecognized shape or a
//! malformed value aborts the calling query.

use std::cmp::Ordering;

use crate::selector::Matcher;

use super::affiliate::AffiliateRecord;
use super::errors::{RecordError, RecordResult};
use super::transaction::TransactionRecord;

/// Key marker selecting the affiliate shape
const AFFILIATE_KEY_MARKER: &str = "eCommerceID~affiliateID";
/// Key marker selecting the transaction shape
const TRANSACTION_KEY_MARKER: &str = "transaction";

/// The decoded interpretation of a raw (key, value) pair.
///
/// Records are ephemeral: decoded fresh for every evaluation and every
/// sort comparison, never cached.
#[derive(Debug, Clone)]
pub enum Record {
    Affiliate(AffiliateRecord),
    Transaction(TransactionRecord),
}

impl Record {
    /// Decodes a stored value into the shape matched by its key.
    ///
    /// Marker order matters where patterns could overlap: the affiliate
    /// marker is tested before the transaction marker.
    pub fn decode(key: &str, value: &[u8]) -> RecordResult<Record> {
        if key.contains(AFFILIATE_KEY_MARKER) {
            let affiliate = serde_json::from_slice(value).map_err(|source| {
                RecordError::Decode {
                    key: key.to_string(),
                    source,
                }
            })?;
            Ok(Record::Affiliate(affiliate))
        } else if key.contains(TRANSACTION_KEY_MARKER) {
            let transaction = serde_json::from_slice(value).map_err(|source| {
                RecordError::Decode {
                    key: key.to_string(),
                    source,
                }
            })?;
            Ok(Record::Transaction(transaction))
        } else {
            Err(RecordError::UnknownShape(key.to_string()))
        }
    }

    /// Evaluates a matcher against a named field of this record
    pub fn evaluate_field(&self, field: &str, matcher: &Matcher) -> RecordResult<bool> {
        match self {
            Record::Affiliate(record) => record.evaluate_field(field, matcher),
            Record::Transaction(record) => record.evaluate_field(field, matcher),
        }
    }

    /// Orders two records by a sortable field, ascending.
    ///
    /// Comparing records of different shapes is a fixture error.
    pub fn compare(&self, other: &Record, field: &str) -> RecordResult<Ordering> {
        match (self, other) {
            (Record::Affiliate(a), Record::Affiliate(b)) => a.compare(b, field),
            (Record::Transaction(a), Record::Transaction(b)) => a.compare(b, field),
            _ => Err(RecordError::ShapeMismatch(field.to_string())),
        }
    }
}
