//! Preview validation: a bare port, a `[port, title]` pair, or a strict
//! `{ port, title }` object, tried in that order.

use serde_json::Value;

use crate::schema::errors::{FieldPath, ValidationError};
use crate::schema::types::{Port, PreviewSpec};
use crate::schema::union::{Parser, one_of};
use crate::schema::value::{
    Issues, allowed_keys_only, failures, list_at, number_at, object_at, pair_at, required,
    string_at,
};

const PREVIEW_KEYS: [&str; 2] = ["port", "title"];

const PREVIEW_SHAPES: [(&str, Parser<PreviewSpec>); 3] = [
    ("number", bare_port),
    ("[port, title] pair", paired_port),
    ("{ port, title } object", preview_object),
];

fn port_at(value: &Value, path: &FieldPath) -> Result<Port, Issues> {
    number_at(value, path).map(Port::from)
}

fn bare_port(value: &Value, path: &FieldPath) -> Result<PreviewSpec, Issues> {
    port_at(value, path).map(PreviewSpec::new)
}

fn paired_port(value: &Value, path: &FieldPath) -> Result<PreviewSpec, Issues> {
    let (port, title) = pair_at(value, path)?;

    match (port_at(port, &path.index(0)), string_at(title, &path.index(1))) {
        (Ok(port), Ok(title)) => Ok(PreviewSpec::titled(port, title)),
        (port, title) => Err(failures([port.err(), title.err()])),
    }
}

fn preview_object(value: &Value, path: &FieldPath) -> Result<PreviewSpec, Issues> {
    let map = object_at(value, path)?;

    match (
        allowed_keys_only(map, path, &PREVIEW_KEYS),
        required(map, "port", path, port_at),
        required(map, "title", path, string_at),
    ) {
        (Ok(()), Ok(port), Ok(title)) => Ok(PreviewSpec::titled(port, title)),
        (keys, port, title) => Err(failures([keys.err(), port.err(), title.err()])),
    }
}

pub(crate) fn preview_at(value: &Value, path: &FieldPath) -> Result<PreviewSpec, Issues> {
    one_of(value, path, &PREVIEW_SHAPES)
}

pub(crate) fn previews_at(value: &Value, path: &FieldPath) -> Result<Vec<PreviewSpec>, Issues> {
    list_at(value, path, preview_at)
}

/// Validate one preview in any of its accepted encodings.
pub fn validate_preview(value: &Value) -> Result<PreviewSpec, ValidationError> {
    preview_at(value, &FieldPath::root()).map_err(ValidationError::from)
}
