//! Affiliate record shape

use std::cmp::Ordering;

use serde::Deserialize;

use crate::selector::{match_string, Matcher};

use super::errors::{RecordError, RecordResult};

/// Decoded affiliate document.
///
/// Queryable fields: docType, path, parentID, affiliateID.
/// Sortable fields: createdAt, level.
#[derive(Debug, Clone, Deserialize)]
pub struct AffiliateRecord {
    #[serde(rename = "docType", default)]
    pub doc_type: String,
    #[serde(default)]
    pub path: String,
    #[serde(rename = "parentID", default)]
    pub parent_id: String,
    #[serde(rename = "affiliateID", default)]
    pub affiliate_id: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: i64,
    #[serde(default)]
    pub level: i64,
}

impl AffiliateRecord {
    /// Evaluates a matcher against one of the shape's queryable fields
    pub fn evaluate_field(&self, field: &str, matcher: &Matcher) -> RecordResult<bool> {
        let value = match field {
            "docType" => &self.doc_type,
            "path" => &self.path,
            "parentID" => &self.parent_id,
            "affiliateID" => &self.affiliate_id,
            _ => return Err(RecordError::UnsupportedSelectorKey(field.to_string())),
        };
        Ok(match_string(field, value, matcher)?)
    }

    /// Orders two affiliates by a sortable field, ascending
    pub fn compare(&self, other: &AffiliateRecord, field: &str) -> RecordResult<Ordering> {
        match field {
            "createdAt" => Ok(self.created_at.cmp(&other.created_at)),
            "level" => Ok(self.level.cmp(&other.level)),
            _ => Err(RecordError::UnsupportedSortKey(field.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn affiliate(path: &str, level: i64) -> AffiliateRecord {
        AffiliateRecord {
            doc_type: "affiliate".into(),
            path: path.into(),
            parent_id: "root".into(),
            affiliate_id: "aff1".into(),
            created_at: 100,
            level,
        }
    }

    #[test]
    fn test_evaluate_known_fields() {
        let record = affiliate("/root/a", 2);

        let matcher = Matcher::Literal(json!("affiliate"));
        assert!(record.evaluate_field("docType", &matcher).unwrap());

        let matcher = Matcher::In(vec!["aff1".into()]);
        assert!(record.evaluate_field("affiliateID", &matcher).unwrap());
    }

    #[test]
    fn test_evaluate_unknown_field_is_error() {
        let record = affiliate("/root/a", 2);
        let matcher = Matcher::Literal(json!(1));

        let err = record.evaluate_field("level", &matcher).unwrap_err();
        assert!(matches!(err, RecordError::UnsupportedSelectorKey(_)));
    }

    #[test]
    fn test_compare_by_level() {
        let a = affiliate("/a", 1);
        let b = affiliate("/b", 3);

        assert_eq!(a.compare(&b, "level").unwrap(), Ordering::Less);
        assert_eq!(b.compare(&a, "level").unwrap(), Ordering::Greater);
    }

    #[test]
    fn test_compare_unknown_field_is_error() {
        let a = affiliate("/a", 1);
        let err = a.compare(&a, "path").unwrap_err();
        assert!(matches!(err, RecordError::UnsupportedSortKey(_)));
    }

    #[test]
    fn test_decode_field_renames() {
        let record: AffiliateRecord = serde_json::from_value(json!({
            "docType": "affiliate",
            "path": "/root/a",
            "parentID": "root",
            "affiliateID": "aff1",
            "createdAt": 7,
            "level": 1
        }))
        .unwrap();

        assert_eq!(record.parent_id, "root");
        assert_eq!(record.created_at, 7);
    }
}
