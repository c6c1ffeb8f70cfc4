//! # Document Schema
//!
//! Validation and normalization of environment configuration documents.
//!
//! Input is an already-deserialized `serde_json::Value`. Each validator
//! either returns the normalized shape or a [`ValidationError`] listing
//! every issue found, each with the path it was found at.
//!
//! ## Accepted encodings
//!
//! | Field            | Encodings (tried in order)                                     |
//! |------------------|----------------------------------------------------------------|
//! | command          | `"npm start"`, `["npm start", "Start"]`, `{ command, title }`   |
//! | preview          | `5173`, `[5173, "Web"]`, `{ port, title }`                      |
//! | terminal         | `true` / `false`, `{ panels, activePanel }`                     |
//! | terminal.panels  | `"output"`, `"terminal"`, list of literals / `[kind, title]`    |
//!
//! ## Usage Example
//!
//! ```rust
//! use serde_json::json;
//! use tutorkit_core::schema::{validate_document, CommandSpec};
//!
//! let document = validate_document(&json!({
//!     "title": "Counter",
//!     "mainCommand": ["npm start", "Start"],
//!     "terminal": { "panels": ["terminal", ["output", "Build"]] }
//! }))
//! .unwrap();
//!
//! assert_eq!(
//!     document.environment.commands.main_command,
//!     Some(CommandSpec::titled("npm start", "Start"))
//! );
//! ```

mod command;
mod document;
pub mod errors;
mod preview;
mod terminal;
pub mod types;
mod union;
mod value;

pub use command::{validate_command, validate_commands};
pub use document::{
    unknown_document_keys, validate_document, validate_document_with, validate_environment,
    validate_environment_with,
};
pub use errors::{Alternative, FieldPath, Issue, IssueKind, PathSegment, ValidationError};
pub use preview::validate_preview;
pub use terminal::{ensure_single_output, validate_terminal};
pub use types::{
    CommandSpec, CommandsGroup, Document, EnvironmentSettings, PanelKind, PanelLayout, PanelRef,
    Panels, Port, PreviewSpec, TerminalLayout, ValidationOptions,
};
