//! Wire-format query parsing
//!
//! Accepts the JSON query language used by the simulated ledger:
//! `{"selector": {field: matcher, ...}, "sort": [elem, ...]}` where a sort
//! element is either a bare field name (ascending) or a single-entry
//! `{field: "asc"|"desc"}` object.
//!
//! Unsupported matcher shapes are rejected here, at parse time, so the
//! scan never aborts halfway through evaluation.

use regex::Regex;
use serde_json::{Map, Value};

use super::ast::{Matcher, Selector, SortDirection, SortSpec};
use super::errors::{SelectorError, SelectorResult};

/// A query parsed from the wire format
#[derive(Debug, Clone)]
pub struct ParsedQuery {
    /// Filter to apply to every state entry
    pub selector: Selector,
    /// Multi-key sort specification; empty means unsorted
    pub sort: Vec<SortSpec>,
}

impl ParsedQuery {
    /// Parses a raw query string.
    ///
    /// The `selector` key is required (an empty object matches everything);
    /// `sort` is optional.
    pub fn parse(raw: &str) -> SelectorResult<ParsedQuery> {
        let query: Value = serde_json::from_str(raw)?;

        let object = query
            .as_object()
            .ok_or_else(|| SelectorError::Malformed("query is not an object".into()))?;

        let selector_value = object
            .get("selector")
            .ok_or_else(|| SelectorError::Malformed("query has no selector".into()))?;
        let selector_map = selector_value
            .as_object()
            .ok_or_else(|| SelectorError::Malformed("selector is not an object".into()))?;

        let mut fields = Vec::with_capacity(selector_map.len());
        for (field, matcher_value) in selector_map {
            fields.push((field.clone(), parse_matcher(field, matcher_value)?));
        }

        let sort = match object.get("sort") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(elements)) => {
                let mut sort = Vec::with_capacity(elements.len());
                for element in elements {
                    sort.push(parse_sort_element(element)?);
                }
                sort
            }
            Some(_) => return Err(SelectorError::Malformed("sort is not an array".into())),
        };

        Ok(ParsedQuery {
            selector: Selector { fields },
            sort,
        })
    }
}

/// Parses one matcher expression.
///
/// A non-object is a literal equality match. Objects dispatch on the
/// operator key, first match wins: $regex, $eq, $in, $elemMatch.
fn parse_matcher(field: &str, value: &Value) -> SelectorResult<Matcher> {
    let map = match value.as_object() {
        Some(map) => map,
        None => return Ok(Matcher::Literal(value.clone())),
    };

    if let Some(pattern) = map.get("$regex") {
        let pattern = pattern
            .as_str()
            .ok_or_else(|| SelectorError::unsupported(field, "$regex pattern is not a string"))?;
        return Ok(Matcher::Regex(Regex::new(pattern)?));
    }

    if let Some(expected) = map.get("$eq") {
        return Ok(Matcher::Eq(expected.clone()));
    }

    if let Some(values) = map.get("$in") {
        return Ok(Matcher::In(parse_string_set(field, values)?));
    }

    if let Some(inner) = map.get("$elemMatch") {
        return parse_elem_match(field, inner);
    }

    Err(SelectorError::unsupported(
        field,
        format!("unrecognized matcher object {value}"),
    ))
}

/// Parses `{$elemMatch: {<sub-field>: {$in: [v...]}}}`
fn parse_elem_match(field: &str, inner: &Value) -> SelectorResult<Matcher> {
    let inner_map: &Map<String, Value> = inner
        .as_object()
        .ok_or_else(|| SelectorError::unsupported(field, "$elemMatch operand is not an object"))?;

    // Single entry: the sub-field name and its $in clause
    let (sub_field, clause) = match inner_map.iter().next() {
        Some(entry) if inner_map.len() == 1 => entry,
        _ => {
            return Err(SelectorError::unsupported(
                field,
                "$elemMatch must name exactly one sub-field",
            ))
        }
    };
    let clause_map = clause
        .as_object()
        .filter(|m| m.len() == 1)
        .and_then(|m| m.get("$in"))
        .ok_or_else(|| {
            SelectorError::unsupported(field, "$elemMatch sub-field must carry a single $in clause")
        })?;

    Ok(Matcher::ElemMatch {
        field: sub_field.clone(),
        values: parse_string_set(field, clause_map)?,
    })
}

/// Parses a `$in` operand: an array of strings
fn parse_string_set(field: &str, values: &Value) -> SelectorResult<Vec<String>> {
    let array = values
        .as_array()
        .ok_or_else(|| SelectorError::unsupported(field, "$in operand is not an array"))?;

    let mut set = Vec::with_capacity(array.len());
    for value in array {
        match value.as_str() {
            Some(s) => set.push(s.to_string()),
            None => {
                return Err(SelectorError::unsupported(
                    field,
                    "$in elements must be strings",
                ))
            }
        }
    }
    Ok(set)
}

/// Parses one sort element: a bare field name (ascending) or a
/// single-entry `{field: direction}` object.
fn parse_sort_element(element: &Value) -> SelectorResult<SortSpec> {
    match element {
        Value::String(field) => Ok(SortSpec::asc(field)),
        Value::Object(map) => {
            let (field, direction) = map
                .iter()
                .next()
                .ok_or_else(|| SelectorError::Malformed("empty sort element".into()))?;
            let direction = match direction.as_str() {
                Some("asc") => SortDirection::Asc,
                Some("desc") => SortDirection::Desc,
                Some(other) => {
                    return Err(SelectorError::Malformed(format!(
                        "sort direction {other:?} for field {field:?}"
                    )))
                }
                None => {
                    return Err(SelectorError::Malformed(format!(
                        "sort direction for field {field:?} is not a string"
                    )))
                }
            };
            Ok(SortSpec {
                field: field.clone(),
                direction,
            })
        }
        _ => Err(SelectorError::Malformed(format!(
            "sort element {element} is neither a field name nor a direction object"
        ))),
    }
}
