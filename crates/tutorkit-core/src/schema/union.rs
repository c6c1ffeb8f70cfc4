//! Ordered alternative parsing for fields that accept several encodings.

use serde_json::Value;

use crate::schema::errors::{Alternative, FieldPath, Issue, IssueKind};
use crate::schema::value::Issues;

pub(crate) type Parser<T> = fn(&Value, &FieldPath) -> Result<T, Issues>;

/// Tries each `(shape, parser)` in order and returns the first success.
///
/// An alternative that fails only with refinement issues accepted the shape,
/// so its issues are returned as-is. Otherwise every rejected alternative is
/// reported inside a single [`IssueKind::ShapeMismatch`] at `path`.
pub(crate) fn one_of<T>(
    value: &Value,
    path: &FieldPath,
    alternatives: &[(&'static str, Parser<T>)],
) -> Result<T, Issues> {
    let mut rejected = Vec::with_capacity(alternatives.len());

    for &(shape, parse) in alternatives {
        match parse(value, path) {
            Ok(parsed) => return Ok(parsed),
            Err(issues) if !issues.is_empty() && issues.iter().all(|i| i.kind.is_refinement()) => {
                return Err(issues);
            }
            Err(issues) => rejected.push(Alternative { shape, issues }),
        }
    }

    Err(vec![Issue::new(
        path.clone(),
        IssueKind::ShapeMismatch {
            alternatives: rejected,
        },
    )])
}
