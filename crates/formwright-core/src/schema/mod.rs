//! Form schema extraction.
//!
//! Turns raw assistant text into a validated `FormSchema`, or explains why
//! the text is conversation rather than a form.

pub mod extractor;

pub use extractor::{extract, extract_schema};
