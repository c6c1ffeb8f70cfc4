//! Document validation, the composition root of the schema.

use serde_json::{Map, Value};

use crate::schema::command::{COMMANDS_GROUP_KEYS, commands_from};
use crate::schema::errors::{FieldPath, Issue, IssueKind, ValidationError};
use crate::schema::preview::previews_at;
use crate::schema::terminal::terminal_at;
use crate::schema::types::{Document, EnvironmentSettings, ValidationOptions};
use crate::schema::value::{
    Collector, Issues, bool_at, failures, object_at, optional, required, string_at,
};

const ENVIRONMENT_KEYS: [&str; 4] = ["previews", "autoReload", "template", "terminal"];

const DOCUMENT_KEYS: [&str; 2] = ["title", "slug"];

fn is_environment_key(key: &str) -> bool {
    COMMANDS_GROUP_KEYS.contains(&key) || ENVIRONMENT_KEYS.contains(&key)
}

fn is_document_key(key: &str) -> bool {
    DOCUMENT_KEYS.contains(&key) || is_environment_key(key)
}

fn environment_from(map: &Map<String, Value>, path: &FieldPath) -> Result<EnvironmentSettings, Issues> {
    let mut collector = Collector::default();
    let commands = collector.field(commands_from(map, path)).unwrap_or_default();
    let previews = collector.field(optional(map, "previews", path, previews_at)).flatten();
    let auto_reload = collector.field(optional(map, "autoReload", path, bool_at)).flatten();
    let template = collector.field(optional(map, "template", path, string_at)).flatten();
    let terminal = collector.field(optional(map, "terminal", path, terminal_at)).flatten();
    collector.finish()?;

    Ok(EnvironmentSettings {
        commands,
        previews,
        auto_reload,
        template,
        terminal,
    })
}

fn reject_unknown_keys(
    map: &Map<String, Value>,
    path: &FieldPath,
    is_known: fn(&str) -> bool,
) -> Result<(), Issues> {
    let issues: Issues = map
        .keys()
        .filter(|key| !is_known(key.as_str()))
        .map(|key| Issue::new(path.key(key), IssueKind::UnexpectedKey { key: key.clone() }))
        .collect();

    if issues.is_empty() { Ok(()) } else { Err(issues) }
}

fn document_at(
    value: &Value,
    path: &FieldPath,
    options: &ValidationOptions,
) -> Result<Document, Issues> {
    let map = object_at(value, path)?;

    let keys = if options.strict_document {
        reject_unknown_keys(map, path, is_document_key)
    } else {
        Ok(())
    };

    match (
        keys,
        required(map, "title", path, string_at),
        optional(map, "slug", path, string_at),
        environment_from(map, path),
    ) {
        (Ok(()), Ok(title), Ok(slug), Ok(environment)) => Ok(Document {
            title,
            slug,
            environment,
        }),
        (keys, title, slug, environment) => Err(failures([
            keys.err(),
            title.err(),
            slug.err(),
            environment.err(),
        ])),
    }
}

/// Validate the environment settings shared by documents: commands,
/// previews, `autoReload`, `template` and `terminal`.
///
/// Unknown keys are ignored unless `options.strict_document` is set.
pub fn validate_environment_with(
    value: &Value,
    options: &ValidationOptions,
) -> Result<EnvironmentSettings, ValidationError> {
    let path = FieldPath::root();
    let map = object_at(value, &path)?;

    let keys = if options.strict_document {
        reject_unknown_keys(map, &path, is_environment_key)
    } else {
        Ok(())
    };

    match (keys, environment_from(map, &path)) {
        (Ok(()), Ok(environment)) => Ok(environment),
        (keys, environment) => Err(ValidationError::from(failures([
            keys.err(),
            environment.err(),
        ]))),
    }
}

pub fn validate_environment(value: &Value) -> Result<EnvironmentSettings, ValidationError> {
    validate_environment_with(value, &ValidationOptions::default())
}

/// Validate a full document with default options.
///
/// Every field is checked independently and all failures are returned
/// together. Absent fields stay absent; no defaults are applied.
pub fn validate_document(value: &Value) -> Result<Document, ValidationError> {
    validate_document_with(value, &ValidationOptions::default())
}

pub fn validate_document_with(
    value: &Value,
    options: &ValidationOptions,
) -> Result<Document, ValidationError> {
    document_at(value, &FieldPath::root(), options).map_err(ValidationError::from)
}

/// Top-level keys that [`validate_document`] ignores.
pub fn unknown_document_keys(value: &Value) -> Vec<String> {
    match value {
        Value::Object(map) => map
            .keys()
            .filter(|key| !is_document_key(key.as_str()))
            .cloned()
            .collect(),
        _ => Vec::new(),
    }
}
