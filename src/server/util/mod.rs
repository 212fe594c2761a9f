//! Small helpers shared across layers: stored-value parsing, input validation, text
//! search and timestamp formatting.

pub mod format;
pub mod parse;
pub mod search;
pub mod validate;
