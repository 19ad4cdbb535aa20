//! Selector subsystem for ledgersim
//!
//! Implements the document-query filter language applied to decoded
//! records: a flat field/matcher mapping with implicit AND, plus the sort
//! specification carried alongside it on the wire.
//!
//! # Design Principles
//!
//! - Parse once: the wire JSON becomes a tagged matcher AST up front;
//!   unsupported operators are parse-time errors, not scan-time surprises
//! - Closed operator set: literal, $eq, $regex, $in, $elemMatch
//! - AND semantics: a record must satisfy every selector field

mod ast;
mod errors;
mod eval;
mod parse;

pub use ast::{Matcher, Selector, SortDirection, SortSpec};
pub use errors::{SelectorError, SelectorResult};
pub use eval::{match_string, match_string_list, SelectorEvaluator};
pub use parse::ParsedQuery;
