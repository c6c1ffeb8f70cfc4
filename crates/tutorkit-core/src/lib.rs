//! tutorkit-core: validation of environment configuration documents
//!
//! A document describes which commands a sandboxed coding environment runs,
//! which ports it exposes as previews, and how its terminal panels are laid
//! out. This library checks such documents and converts the loosely-shaped
//! input into strict normalized types.
//!
//! # Main Entry Points
//!
//! - [`schema`] - Validators and normalized types
//! - [`documents`] - Read documents from JSON, TOML, YAML or Markdown front matter
//! - [`config`] - Tool configuration

pub mod config;
pub mod documents;
pub mod errors;
pub mod events;
pub mod logging;
pub mod schema;

// Re-export commonly used types at crate root for convenience
pub use config::TutorkitConfig;
pub use documents::{DocumentError, DocumentFormat};
pub use errors::{ConfigError, TutorkitError};
pub use schema::{Document, ValidationError, ValidationOptions, validate_document};

// Re-export handler modules as the primary API
pub use documents::handler as document_ops;

// Re-export logging initialization
pub use logging::init_logging;
