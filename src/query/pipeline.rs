//! Filter and sort pipeline
//!
//! Runs the selector query over a materialized snapshot of state entries:
//! parse the wire query, evaluate the selector per entry (false skips the
//! entry, an error aborts the call), then stably sort survivors by the
//! multi-key sort specification. Entries arrive in ascending key order,
//! which the stable sort preserves for ties.

use std::cmp::Ordering;

use crate::records::{Record, RecordResult};
use crate::scan::StateEntry;
use crate::selector::{ParsedQuery, Selector, SelectorEvaluator, SortDirection, SortSpec};

use super::errors::QueryResult;

/// The filter→sort stage shared by plain and paginated queries
pub struct QueryPipeline;

impl QueryPipeline {
    /// Filters and sorts a snapshot according to a raw wire query.
    ///
    /// Returns the ordered survivors; an empty result is not an error.
    pub fn run(entries: Vec<StateEntry>, raw: &str) -> QueryResult<Vec<StateEntry>> {
        let parsed = ParsedQuery::parse(raw).map_err(|err| {
            tracing::error!(error = %err, "query parse failed");
            err
        })?;

        let mut survivors = Self::filter(entries, &parsed.selector)?;
        Self::sort(&mut survivors, &parsed.sort)?;
        Ok(survivors)
    }

    /// Applies the selector to every entry.
    ///
    /// An empty selector keeps everything without decoding, matching the
    /// ledger this simulator stands in for.
    fn filter(entries: Vec<StateEntry>, selector: &Selector) -> QueryResult<Vec<StateEntry>> {
        if selector.is_empty() {
            return Ok(entries);
        }

        let mut survivors = Vec::new();
        for entry in entries {
            let record = Record::decode(&entry.key, &entry.value)?;
            if SelectorEvaluator::matches(&record, selector)? {
                survivors.push(entry);
            }
        }
        Ok(survivors)
    }

    /// Stable multi-key sort; the first sort key is primary, later keys
    /// break ties. Records decode fresh for every comparison.
    fn sort(entries: &mut [StateEntry], sort: &[SortSpec]) -> QueryResult<()> {
        if sort.is_empty() {
            return Ok(());
        }

        let mut failure = None;
        entries.sort_by(|a, b| {
            if failure.is_some() {
                return Ordering::Equal;
            }
            match Self::compare(a, b, sort) {
                Ok(ordering) => ordering,
                Err(err) => {
                    failure = Some(err);
                    Ordering::Equal
                }
            }
        });

        match failure {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    fn compare(a: &StateEntry, b: &StateEntry, sort: &[SortSpec]) -> RecordResult<Ordering> {
        let record_a = Record::decode(&a.key, &a.value)?;
        let record_b = Record::decode(&b.key, &b.value)?;

        for spec in sort {
            let ordering = match spec.direction {
                SortDirection::Asc => record_a.compare(&record_b, &spec.field)?,
                SortDirection::Desc => record_a.compare(&record_b, &spec.field)?.reverse(),
            };
            if ordering != Ordering::Equal {
                return Ok(ordering);
            }
        }
        Ok(Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn transaction_entry(key: &str, senders: &[&str], created_at: i64) -> StateEntry {
        let value = serde_json::to_vec(&json!({
            "docType": "transaction",
            "senders": senders,
            "receivers": [],
            "createdAt": created_at
        }))
        .unwrap();
        StateEntry::new(format!("transaction~{key}"), value)
    }

    fn keys(entries: &[StateEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.key.as_str()).collect()
    }

    #[test]
    fn test_empty_selector_keeps_everything() {
        let entries = vec![
            transaction_entry("tx1", &["a"], 10),
            StateEntry::new("unrecognized~key", b"not even json".to_vec()),
        ];

        // No selector fields, no decode: even unrecognized shapes survive
        let result = QueryPipeline::run(entries, r#"{"selector": {}}"#).unwrap();
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_filter_skips_non_matching() {
        let entries = vec![
            transaction_entry("tx1", &["a"], 10),
            transaction_entry("tx2", &["b"], 5),
        ];

        let result =
            QueryPipeline::run(entries, r#"{"selector": {"senders": {"$in": ["a"]}}}"#).unwrap();
        assert_eq!(keys(&result), ["transaction~tx1"]);
    }

    #[test]
    fn test_non_matching_selector_is_empty_not_error() {
        let entries = vec![transaction_entry("tx1", &["a"], 10)];

        let result =
            QueryPipeline::run(entries, r#"{"selector": {"docType": "affiliate"}}"#).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_decode_error_aborts_call() {
        let entries = vec![
            transaction_entry("tx1", &["a"], 10),
            StateEntry::new("unrecognized~key", b"{}".to_vec()),
        ];

        let result = QueryPipeline::run(entries, r#"{"selector": {"docType": "transaction"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_sort_ascending_by_created_at() {
        let entries = vec![
            transaction_entry("tx1", &["a"], 10),
            transaction_entry("tx2", &["b"], 5),
        ];

        let result = QueryPipeline::run(
            entries,
            r#"{"selector": {}, "sort": [{"createdAt": "asc"}]}"#,
        )
        .unwrap();
        assert_eq!(keys(&result), ["transaction~tx2", "transaction~tx1"]);
    }

    #[test]
    fn test_sort_descending() {
        let entries = vec![
            transaction_entry("tx1", &["a"], 5),
            transaction_entry("tx2", &["b"], 10),
        ];

        let result = QueryPipeline::run(
            entries,
            r#"{"selector": {}, "sort": [{"createdAt": "desc"}]}"#,
        )
        .unwrap();
        assert_eq!(keys(&result), ["transaction~tx2", "transaction~tx1"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let entries = vec![
            transaction_entry("tx3", &["c"], 7),
            transaction_entry("tx1", &["a"], 7),
            transaction_entry("tx2", &["b"], 7),
        ];

        let result = QueryPipeline::run(
            entries,
            r#"{"selector": {}, "sort": [{"createdAt": "asc"}]}"#,
        )
        .unwrap();
        // All tied: input order preserved
        assert_eq!(
            keys(&result),
            ["transaction~tx3", "transaction~tx1", "transaction~tx2"]
        );
    }

    #[test]
    fn test_unsupported_sort_key_aborts_call() {
        let entries = vec![
            transaction_entry("tx1", &["a"], 10),
            transaction_entry("tx2", &["b"], 5),
        ];

        let result =
            QueryPipeline::run(entries, r#"{"selector": {}, "sort": [{"senders": "asc"}]}"#);
        assert!(result.is_err());
    }
}
