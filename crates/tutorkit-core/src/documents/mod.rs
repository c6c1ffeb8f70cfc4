//! Loading documents from files.
//!
//! The format is chosen by file extension; Markdown files contribute their
//! YAML front matter. Parsed values go through [`crate::schema`].

pub mod errors;
pub mod handler;
pub mod operations;
pub mod types;

pub use errors::DocumentError;
pub use operations::{extract_front_matter, parse_document_source};
pub use types::DocumentFormat;
