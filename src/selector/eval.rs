//! Selector evaluation
//!
//! `SelectorEvaluator` applies a parsed selector to a decoded record with
//! AND semantics across fields. The value-level helpers here implement the
//! matcher operator set for the field types record shapes expose; shapes
//! call them from their `evaluate_field` dispatch.

use serde_json::Value;

use crate::records::{Record, RecordResult};

use super::ast::{Matcher, Selector};
use super::errors::{SelectorError, SelectorResult};

/// Evaluates selectors against decoded records
pub struct SelectorEvaluator;

impl SelectorEvaluator {
    /// Returns true if the record satisfies every (field, matcher) pair.
    ///
    /// The first false excludes the record; the first error aborts the
    /// whole query.
    pub fn matches(record: &Record, selector: &Selector) -> RecordResult<bool> {
        for (field, matcher) in &selector.fields {
            if !record.evaluate_field(field, matcher)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Applies a matcher to a string-valued field
pub fn match_string(field: &str, value: &str, matcher: &Matcher) -> SelectorResult<bool> {
    match matcher {
        Matcher::Literal(expected) | Matcher::Eq(expected) => {
            Ok(expected.as_str() == Some(value))
        }
        Matcher::Regex(re) => Ok(re.is_match(value)),
        Matcher::In(set) => Ok(set.iter().any(|candidate| candidate == value)),
        Matcher::ElemMatch { .. } => Err(SelectorError::unsupported(
            field,
            "$elemMatch on a scalar field",
        )),
    }
}

/// Applies a matcher to a string-list field.
///
/// `$in` holds when any element of the field is in the set, which is what
/// lets `{senders: {"$in": ["a"]}}` match a record with `senders == ["a"]`.
pub fn match_string_list(field: &str, values: &[String], matcher: &Matcher) -> SelectorResult<bool> {
    match matcher {
        Matcher::Literal(expected) | Matcher::Eq(expected) => Ok(string_list_eq(values, expected)),
        Matcher::Regex(_) => Err(SelectorError::NotString(field.to_string())),
        Matcher::In(set) => Ok(values.iter().any(|v| set.contains(v))),
        Matcher::ElemMatch { .. } => Err(SelectorError::unsupported(
            field,
            "$elemMatch on a string-list field",
        )),
    }
}

/// Structural equality between a string-list field and a JSON literal
fn string_list_eq(values: &[String], expected: &Value) -> bool {
    match expected.as_array() {
        Some(items) => {
            items.len() == values.len()
                && items
                    .iter()
                    .zip(values)
                    .all(|(item, value)| item.as_str() == Some(value))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_match_string_literal_equality() {
        let matcher = Matcher::Literal(json!("affiliate"));
        assert!(match_string("docType", "affiliate", &matcher).unwrap());
        assert!(!match_string("docType", "transaction", &matcher).unwrap());
    }

    #[test]
    fn test_match_string_type_mismatch_is_false_not_error() {
        let matcher = Matcher::Literal(json!(42));
        assert!(!match_string("docType", "42", &matcher).unwrap());
    }

    #[test]
    fn test_match_string_regex() {
        let matcher = Matcher::Regex(regex::Regex::new("^/root/").unwrap());
        assert!(match_string("path", "/root/a/b", &matcher).unwrap());
        assert!(!match_string("path", "/other", &matcher).unwrap());
    }

    #[test]
    fn test_match_string_in_membership() {
        let matcher = Matcher::In(vec!["a".into(), "b".into()]);
        assert!(match_string("parentID", "a", &matcher).unwrap());
        assert!(!match_string("parentID", "c", &matcher).unwrap());
    }

    #[test]
    fn test_match_string_rejects_elem_match() {
        let matcher = Matcher::ElemMatch {
            field: "txID".into(),
            values: vec![],
        };
        let err = match_string("docType", "x", &matcher).unwrap_err();
        assert!(matches!(err, SelectorError::Unsupported { .. }));
    }

    #[test]
    fn test_match_string_list_in_intersects() {
        let senders = vec!["a".to_string(), "b".to_string()];

        let matcher = Matcher::In(vec!["b".into(), "z".into()]);
        assert!(match_string_list("senders", &senders, &matcher).unwrap());

        let matcher = Matcher::In(vec!["z".into()]);
        assert!(!match_string_list("senders", &senders, &matcher).unwrap());
    }

    #[test]
    fn test_match_string_list_structural_equality() {
        let senders = vec!["a".to_string(), "b".to_string()];

        let matcher = Matcher::Eq(json!(["a", "b"]));
        assert!(match_string_list("senders", &senders, &matcher).unwrap());

        let matcher = Matcher::Eq(json!(["b", "a"]));
        assert!(!match_string_list("senders", &senders, &matcher).unwrap());

        let matcher = Matcher::Eq(json!("a"));
        assert!(!match_string_list("senders", &senders, &matcher).unwrap());
    }

    #[test]
    fn test_match_string_list_regex_is_not_string_error() {
        let senders = vec!["a".to_string()];
        let matcher = Matcher::Regex(regex::Regex::new("a").unwrap());
        let err = match_string_list("senders", &senders, &matcher).unwrap_err();
        assert!(matches!(err, SelectorError::NotString(_)));
    }
}
