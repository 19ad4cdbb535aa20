//! Selector AST structures
//!
//! The wire-format query is parsed once into this tagged representation;
//! evaluation and sorting never re-inspect raw JSON.

use regex::Regex;
use serde_json::Value;

/// A matcher expression applied to one record field
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Bare scalar literal: structural equality
    Literal(Value),
    /// `{$eq: v}`: structural equality
    Eq(Value),
    /// `{$regex: pattern}`: unanchored match on a string field
    Regex(Regex),
    /// `{$in: [v...]}`: set membership on a string or string-list field
    In(Vec<String>),
    /// `{$elemMatch: {<field>: {$in: [v...]}}}`: nested array element match
    ElemMatch {
        /// Sub-field tested on each array element
        field: String,
        /// Membership set for the sub-field
        values: Vec<String>,
    },
}

impl Matcher {
    /// Returns the operator name for error reporting
    pub fn op_name(&self) -> &'static str {
        match self {
            Matcher::Literal(_) => "literal",
            Matcher::Eq(_) => "$eq",
            Matcher::Regex(_) => "$regex",
            Matcher::In(_) => "$in",
            Matcher::ElemMatch { .. } => "$elemMatch",
        }
    }
}

/// A filter over decoded records: field/matcher pairs conjoined with AND
#[derive(Debug, Clone, Default)]
pub struct Selector {
    /// (field, matcher) pairs in wire order
    pub fields: Vec<(String, Matcher)>,
}

impl Selector {
    /// Returns true if the selector has no conditions (matches everything)
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// One key of a multi-key sort specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    /// Field to sort by
    pub field: String,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}
