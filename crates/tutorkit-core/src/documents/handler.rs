use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{error, info, warn};

use crate::documents::{errors::DocumentError, operations, types::DocumentFormat};
use crate::schema::{
    self, Document, TerminalLayout, ValidationOptions, unknown_document_keys,
};

/// Read, parse and validate the document at `path`.
pub fn load_document(path: &Path, options: &ValidationOptions) -> Result<Document, DocumentError> {
    info!(event = "core.document.load_started", path = %path.display());

    let format = DocumentFormat::from_path(path).ok_or_else(|| DocumentError::UnsupportedFormat {
        path: path.display().to_string(),
    })?;

    let content = fs::read_to_string(path).map_err(|e| {
        error!(
            event = "core.document.read_failed",
            path = %path.display(),
            error = %e
        );
        DocumentError::IoError {
            path: path.display().to_string(),
            source: e,
        }
    })?;

    let value = operations::parse_document_source(&content, format).inspect_err(|e| {
        error!(
            event = "core.document.parse_failed",
            path = %path.display(),
            format = %format,
            error = %e
        );
    })?;

    let document = validate_value(&value, options)?;

    info!(
        event = "core.document.load_completed",
        path = %path.display(),
        title = %document.title
    );
    Ok(document)
}

/// Validate an already-parsed value, logging what validation lets through.
pub fn validate_value(value: &Value, options: &ValidationOptions) -> Result<Document, DocumentError> {
    info!(
        event = "core.document.validate_started",
        strict_document = options.strict_document
    );

    if !options.strict_document {
        for key in unknown_document_keys(value) {
            warn!(event = "core.document.unknown_key_ignored", key = %key);
        }
    }

    let document = schema::validate_document_with(value, options).inspect_err(|e| {
        warn!(
            event = "core.document.validate_failed",
            issue_count = e.issues().len(),
            error = %e
        );
    })?;

    if let Some(TerminalLayout::Layout(layout)) = &document.environment.terminal
        && layout.active_panel_out_of_range()
    {
        warn!(
            event = "core.document.active_panel_out_of_range",
            active_panel = layout.active_panel.map(|p| p.get()),
            panel_count = layout.panels.len()
        );
    }

    info!(event = "core.document.validate_completed", title = %document.title);
    Ok(document)
}
