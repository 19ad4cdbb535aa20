//! Composite key construction
//!
//! Composite keys frame an object type and its attributes with U+0000
//! separators, so that a partial composite key is a plain string prefix of
//! every fuller key and prefix range scans find exactly the matching
//! entries.

/// Separator framing composite key components
const COMPONENT_SEPARATOR: char = '\u{0000}';

/// Upper fence appended to a prefix to form the end bound of a prefix scan
pub const MAX_CODEPOINT: char = char::MAX;

/// Builds a composite key from an object type and attribute values.
///
/// Layout: `\u{0000}` + objectType + `\u{0000}` + attr + `\u{0000}` ...
/// Passing a leading subset of attributes yields a partial composite key
/// usable as a scan prefix.
pub fn composite_key(object_type: &str, attributes: &[&str]) -> String {
    let mut key = String::new();
    key.push(COMPONENT_SEPARATOR);
    key.push_str(object_type);
    key.push(COMPONENT_SEPARATOR);
    for attribute in attributes {
        key.push_str(attribute);
        key.push(COMPONENT_SEPARATOR);
    }
    key
}

/// Splits a composite key back into its object type and attributes.
///
/// Returns None if the key does not carry the composite framing.
pub fn split_composite_key(key: &str) -> Option<(String, Vec<String>)> {
    let rest = key.strip_prefix(COMPONENT_SEPARATOR)?;
    let mut components = rest.split(COMPONENT_SEPARATOR);
    let object_type = components.next()?.to_string();

    let mut attributes: Vec<String> = components.map(str::to_string).collect();
    // A well-formed key ends with a separator, leaving one empty tail
    match attributes.pop() {
        Some(tail) if tail.is_empty() => Some((object_type, attributes)),
        _ => None,
    }
}
