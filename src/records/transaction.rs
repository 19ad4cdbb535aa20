//! Transaction record shape

use std::cmp::Ordering;

use serde::Deserialize;

use crate::selector::{match_string, match_string_list, Matcher, SelectorError};

use super::errors::{RecordError, RecordResult};

/// One party of a transaction, referenced from the receivers array
#[derive(Debug, Clone, Deserialize)]
pub struct TxParticipant {
    #[serde(rename = "txID", default)]
    pub tx_id: String,
}

/// Decoded transaction document.
///
/// Queryable fields: docType, senders, receivers ($elemMatch only).
/// Sortable field: createdAt.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "docType", default)]
    pub doc_type: String,
    #[serde(default)]
    pub senders: Vec<String>,
    #[serde(default)]
    pub receivers: Vec<TxParticipant>,
    #[serde(rename = "createdAt", default)]
    pub created_at: i64,
}

impl TransactionRecord {
    /// Evaluates a matcher against one of the shape's queryable fields
    pub fn evaluate_field(&self, field: &str, matcher: &Matcher) -> RecordResult<bool> {
        match field {
            "docType" => Ok(match_string(field, &self.doc_type, matcher)?),
            "senders" => Ok(match_string_list(field, &self.senders, matcher)?),
            "receivers" => self.match_receivers(matcher),
            _ => Err(RecordError::UnsupportedSelectorKey(field.to_string())),
        }
    }

    /// Matches the receivers array: only `$elemMatch` over the `txID`
    /// sub-field is supported; the first matching element short-circuits.
    fn match_receivers(&self, matcher: &Matcher) -> RecordResult<bool> {
        match matcher {
            Matcher::ElemMatch { field, values } => {
                if field != "txID" {
                    return Err(SelectorError::unsupported(
                        "receivers",
                        format!("unknown $elemMatch sub-field {field:?}"),
                    )
                    .into());
                }
                Ok(self
                    .receivers
                    .iter()
                    .any(|participant| values.contains(&participant.tx_id)))
            }
            other => Err(SelectorError::unsupported(
                "receivers",
                format!("{} on a participant-list field", other.op_name()),
            )
            .into()),
        }
    }

    /// Orders two transactions by a sortable field, ascending
    pub fn compare(&self, other: &TransactionRecord, field: &str) -> RecordResult<Ordering> {
        match field {
            "createdAt" => Ok(self.created_at.cmp(&other.created_at)),
            _ => Err(RecordError::UnsupportedSortKey(field.to_string())),
        }
    }
}
