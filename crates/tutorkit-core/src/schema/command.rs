//! Command validation.
//!
//! A command is accepted as a bare string, a `[command, title]` pair, or a
//! strict `{ command, title }` object, tried in that order.

use serde_json::Value;

use crate::schema::errors::{FieldPath, ValidationError};
use crate::schema::types::{CommandSpec, CommandsGroup};
use crate::schema::union::{Parser, one_of};
use crate::schema::value::{
    Collector, Issues, allowed_keys_only, failures, list_at, object_at, optional, pair_at,
    required, string_at,
};

const COMMAND_KEYS: [&str; 2] = ["command", "title"];

const COMMAND_SHAPES: [(&str, Parser<CommandSpec>); 3] = [
    ("string", bare_command),
    ("[command, title] pair", paired_command),
    ("{ command, title } object", command_object),
];

pub(crate) const COMMANDS_GROUP_KEYS: [&str; 2] = ["mainCommand", "prepareCommands"];

fn bare_command(value: &Value, path: &FieldPath) -> Result<CommandSpec, Issues> {
    string_at(value, path).map(CommandSpec::new)
}

fn paired_command(value: &Value, path: &FieldPath) -> Result<CommandSpec, Issues> {
    let (command, title) = pair_at(value, path)?;

    match (
        string_at(command, &path.index(0)),
        string_at(title, &path.index(1)),
    ) {
        (Ok(command), Ok(title)) => Ok(CommandSpec::titled(command, title)),
        (command, title) => Err(failures([command.err(), title.err()])),
    }
}

fn command_object(value: &Value, path: &FieldPath) -> Result<CommandSpec, Issues> {
    let map = object_at(value, path)?;

    match (
        allowed_keys_only(map, path, &COMMAND_KEYS),
        required(map, "command", path, string_at),
        required(map, "title", path, string_at),
    ) {
        (Ok(()), Ok(command), Ok(title)) => Ok(CommandSpec::titled(command, title)),
        (keys, command, title) => Err(failures([keys.err(), command.err(), title.err()])),
    }
}

pub(crate) fn command_at(value: &Value, path: &FieldPath) -> Result<CommandSpec, Issues> {
    one_of(value, path, &COMMAND_SHAPES)
}

/// Reads `mainCommand` and `prepareCommands` from an already-checked object.
pub(crate) fn commands_from(
    map: &serde_json::Map<String, Value>,
    path: &FieldPath,
) -> Result<CommandsGroup, Issues> {
    let mut collector = Collector::default();
    let main_command = collector
        .field(optional(map, "mainCommand", path, command_at))
        .flatten();
    let prepare_commands = collector
        .field(optional(map, "prepareCommands", path, |value, path| {
            list_at(value, path, command_at)
        }))
        .flatten();
    collector.finish()?;

    Ok(CommandsGroup {
        main_command,
        prepare_commands,
    })
}

/// Validate one command in any of its accepted encodings.
pub fn validate_command(value: &Value) -> Result<CommandSpec, ValidationError> {
    command_at(value, &FieldPath::root()).map_err(ValidationError::from)
}

/// Validate an object holding the optional `mainCommand` and `prepareCommands`.
///
/// Keys other than those two are ignored.
pub fn validate_commands(value: &Value) -> Result<CommandsGroup, ValidationError> {
    let path = FieldPath::root();
    object_at(value, &path)
        .and_then(|map| commands_from(map, &path))
        .map_err(ValidationError::from)
}
