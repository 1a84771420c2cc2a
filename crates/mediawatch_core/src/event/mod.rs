//! Event line input and token classification.
//!
//! # Responsibility
//! - Read line-delimited event text from any buffered source.
//! - Turn one line into a deduplicated token set and classify it by prefix.
//!
//! # Invariants
//! - Classification depends on the current line only.
//! - No token format is validated; unknown tokens are ignored.

pub mod reader;
pub mod token;
