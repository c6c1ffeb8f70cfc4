//! Primitive readers over untyped `serde_json::Value` input.
//!
//! Readers return `Err(Vec<Issue>)` so callers can splice failures from
//! nested values into one aggregated list.

use serde_json::{Map, Number, Value};

use crate::schema::errors::{FieldPath, Issue, IssueKind};

pub(crate) type Issues = Vec<Issue>;

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn type_mismatch(path: &FieldPath, expected: &'static str, value: &Value) -> Issues {
    vec![Issue::new(
        path.clone(),
        IssueKind::TypeMismatch {
            expected,
            found: type_name(value),
        },
    )]
}

pub(crate) fn string_at(value: &Value, path: &FieldPath) -> Result<String, Issues> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(type_mismatch(path, "string", other)),
    }
}

pub(crate) fn bool_at(value: &Value, path: &FieldPath) -> Result<bool, Issues> {
    match value {
        Value::Bool(b) => Ok(*b),
        other => Err(type_mismatch(path, "boolean", other)),
    }
}

pub(crate) fn number_at(value: &Value, path: &FieldPath) -> Result<Number, Issues> {
    match value {
        Value::Number(n) => Ok(n.clone()),
        other => Err(type_mismatch(path, "number", other)),
    }
}

pub(crate) fn object_at<'a>(value: &'a Value, path: &FieldPath) -> Result<&'a Map<String, Value>, Issues> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(type_mismatch(path, "object", other)),
    }
}

/// Keys of `map` outside `allowed`.
pub(crate) fn unexpected_keys<'a>(map: &'a Map<String, Value>, allowed: &[&str]) -> Vec<&'a str> {
    map.keys()
        .map(String::as_str)
        .filter(|key| !allowed.contains(key))
        .collect()
}

/// Rejects every key of `map` outside the `allowed` set.
pub(crate) fn allowed_keys_only(
    map: &Map<String, Value>,
    path: &FieldPath,
    allowed: &[&str],
) -> Result<(), Issues> {
    let issues: Issues = unexpected_keys(map, allowed)
        .into_iter()
        .map(|key| {
            Issue::new(
                path.key(key),
                IssueKind::UnexpectedKey {
                    key: key.to_string(),
                },
            )
        })
        .collect();

    if issues.is_empty() { Ok(()) } else { Err(issues) }
}

/// A two-element sequence.
pub(crate) fn pair_at<'a>(value: &'a Value, path: &FieldPath) -> Result<(&'a Value, &'a Value), Issues> {
    match value {
        Value::Array(items) => match items.as_slice() {
            [first, second] => Ok((first, second)),
            _ => Err(vec![Issue::new(
                path.clone(),
                IssueKind::ArityMismatch {
                    expected: 2,
                    found: items.len(),
                },
            )]),
        },
        other => Err(type_mismatch(path, "array", other)),
    }
}

/// Sequence whose every element passes `parse`; failures of all elements are reported.
pub(crate) fn list_at<T>(
    value: &Value,
    path: &FieldPath,
    parse: impl Fn(&Value, &FieldPath) -> Result<T, Issues>,
) -> Result<Vec<T>, Issues> {
    let Value::Array(items) = value else {
        return Err(type_mismatch(path, "array", value));
    };

    let mut collector = Collector::default();
    let parsed: Vec<T> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| collector.field(parse(item, &path.index(index))))
        .collect();
    collector.finish()?;
    Ok(parsed)
}

pub(crate) fn required<T>(
    map: &Map<String, Value>,
    key: &str,
    path: &FieldPath,
    parse: impl Fn(&Value, &FieldPath) -> Result<T, Issues>,
) -> Result<T, Issues> {
    let field_path = path.key(key);
    match map.get(key) {
        Some(value) => parse(value, &field_path),
        None => Err(vec![Issue::new(field_path, IssueKind::Missing)]),
    }
}

/// Absent keys are `Ok(None)`; `null` is a present value and gets validated.
pub(crate) fn optional<T>(
    map: &Map<String, Value>,
    key: &str,
    path: &FieldPath,
    parse: impl Fn(&Value, &FieldPath) -> Result<T, Issues>,
) -> Result<Option<T>, Issues> {
    map.get(key)
        .map(|value| parse(value, &path.key(key)))
        .transpose()
}

/// Issues of every failed result, in argument order.
pub(crate) fn failures<const N: usize>(errors: [Option<Issues>; N]) -> Issues {
    errors.into_iter().flatten().flatten().collect()
}

/// Accumulates issues from independent fields so every failure surfaces at once.
#[derive(Debug, Default)]
pub(crate) struct Collector {
    issues: Issues,
}

impl Collector {
    pub(crate) fn field<T>(&mut self, result: Result<T, Issues>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(mut issues) => {
                self.issues.append(&mut issues);
                None
            }
        }
    }

    pub(crate) fn finish(self) -> Result<(), Issues> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(self.issues)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pair_at_rejects_wrong_arity() {
        let value = json!(["a", "b", "c"]);
        let issues = pair_at(&value, &FieldPath::root()).unwrap_err();
        assert_eq!(
            issues[0].kind,
            IssueKind::ArityMismatch {
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn test_allowed_keys_only_reports_every_unexpected_key() {
        let value = json!({ "command": "x", "extra": 1, "other": true });
        let map = value.as_object().unwrap();
        let issues = allowed_keys_only(map, &FieldPath::root(), &["command", "title"]).unwrap_err();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].path.to_string(), "extra");
        assert_eq!(issues[1].path.to_string(), "other");
    }

    #[test]
    fn test_optional_treats_null_as_present() {
        let value = json!({ "slug": null });
        let map = value.as_object().unwrap();

        let result = optional(map, "slug", &FieldPath::root(), string_at);
        assert!(result.is_err());

        let result = optional(map, "missing", &FieldPath::root(), string_at);
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn test_list_at_collects_all_failures() {
        let value = json!(["ok", 1, "ok", false]);
        let issues = list_at(&value, &FieldPath::root().key("items"), string_at).unwrap_err();
        let paths: Vec<String> = issues.iter().map(|i| i.path.to_string()).collect();
        assert_eq!(paths, vec!["items[1]", "items[3]"]);
    }
}
