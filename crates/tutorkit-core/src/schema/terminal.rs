//! Terminal layout validation.
//!
//! The layout is either a boolean or a strict `{ panels, activePanel }`
//! object. `panels` is a bare `"output"` / `"terminal"` literal or a list of
//! panels, each a bare literal or a `[kind, title]` pair. Parsing the list and
//! enforcing the single-output rule are separate steps; see
//! [`ensure_single_output`].

use std::num::NonZeroU64;

use serde_json::Value;

use crate::schema::errors::{FieldPath, Issue, IssueKind, ValidationError};
use crate::schema::types::{PanelKind, PanelLayout, PanelRef, Panels, TerminalLayout};
use crate::schema::union::{Parser, one_of};
use crate::schema::value::{
    Issues, allowed_keys_only, bool_at, failures, list_at, object_at, optional, pair_at,
    required, string_at, type_mismatch,
};

const LAYOUT_KEYS: [&str; 2] = ["panels", "activePanel"];

const PANEL_KIND_LITERAL: &str = r#""output" | "terminal""#;

const TERMINAL_SHAPES: [(&str, Parser<TerminalLayout>); 2] = [
    ("boolean", toggle),
    ("{ panels, activePanel } object", layout),
];

const PANELS_SHAPES: [(&str, Parser<Panels>); 2] = [
    (PANEL_KIND_LITERAL, single_panel),
    ("panel list", panel_list),
];

const PANEL_SHAPES: [(&str, Parser<PanelRef>); 2] = [
    (PANEL_KIND_LITERAL, bare_panel),
    ("[kind, title] pair", titled_panel),
];

/// Checks that at most one panel is an output panel.
///
/// Scans in order and stops at the second output panel, returning its index.
pub fn ensure_single_output(panels: &[PanelRef]) -> Result<(), usize> {
    let mut outputs = 0usize;
    for (index, panel) in panels.iter().enumerate() {
        if panel.is_output() {
            outputs += 1;
        }
        if outputs > 1 {
            return Err(index);
        }
    }
    Ok(())
}

fn panel_kind_at(value: &Value, path: &FieldPath) -> Result<PanelKind, Issues> {
    let literal = value.as_str().and_then(PanelKind::from_literal);
    literal.ok_or_else(|| {
        vec![Issue::new(
            path.clone(),
            IssueKind::LiteralMismatch {
                expected: PANEL_KIND_LITERAL,
            },
        )]
    })
}

fn bare_panel(value: &Value, path: &FieldPath) -> Result<PanelRef, Issues> {
    panel_kind_at(value, path).map(PanelRef::new)
}

fn titled_panel(value: &Value, path: &FieldPath) -> Result<PanelRef, Issues> {
    let (kind, title) = pair_at(value, path)?;

    match (
        panel_kind_at(kind, &path.index(0)),
        string_at(title, &path.index(1)),
    ) {
        (Ok(kind), Ok(title)) => Ok(PanelRef::titled(kind, title)),
        (kind, title) => Err(failures([kind.err(), title.err()])),
    }
}

fn panel_at(value: &Value, path: &FieldPath) -> Result<PanelRef, Issues> {
    one_of(value, path, &PANEL_SHAPES)
}

fn single_panel(value: &Value, path: &FieldPath) -> Result<Panels, Issues> {
    panel_kind_at(value, path).map(Panels::Single)
}

fn panel_list(value: &Value, path: &FieldPath) -> Result<Panels, Issues> {
    let panels = list_at(value, path, panel_at)?;

    ensure_single_output(&panels).map_err(|index| {
        vec![Issue::new(
            path.clone(),
            IssueKind::PanelConstraintViolation { index },
        )]
    })?;

    Ok(Panels::List(panels))
}

fn panels_at(value: &Value, path: &FieldPath) -> Result<Panels, Issues> {
    one_of(value, path, &PANELS_SHAPES)
}

/// A strictly positive integer.
fn active_panel_at(value: &Value, path: &FieldPath) -> Result<NonZeroU64, Issues> {
    let Value::Number(number) = value else {
        return Err(type_mismatch(path, "number", value));
    };

    let out_of_range = || {
        vec![Issue::new(
            path.clone(),
            IssueKind::RangeViolation {
                value: number.clone(),
            },
        )]
    };

    if let Some(position) = number.as_u64() {
        return NonZeroU64::new(position).ok_or_else(out_of_range);
    }

    // Negative integers and floats; `2.0` is still the integer 2.
    match number.as_f64() {
        Some(position)
            if position >= 1.0 && position.fract() == 0.0 && position <= u64::MAX as f64 =>
        {
            NonZeroU64::new(position as u64).ok_or_else(out_of_range)
        }
        Some(position) if position > 0.0 => Err(type_mismatch(path, "integer", value)),
        _ => Err(out_of_range()),
    }
}

fn toggle(value: &Value, path: &FieldPath) -> Result<TerminalLayout, Issues> {
    bool_at(value, path).map(TerminalLayout::Toggle)
}

fn layout(value: &Value, path: &FieldPath) -> Result<TerminalLayout, Issues> {
    let map = object_at(value, path)?;

    match (
        allowed_keys_only(map, path, &LAYOUT_KEYS),
        required(map, "panels", path, panels_at),
        optional(map, "activePanel", path, active_panel_at),
    ) {
        (Ok(()), Ok(panels), Ok(active_panel)) => Ok(TerminalLayout::Layout(PanelLayout {
            panels,
            active_panel,
        })),
        (keys, panels, active_panel) => {
            Err(failures([keys.err(), panels.err(), active_panel.err()]))
        }
    }
}

pub(crate) fn terminal_at(value: &Value, path: &FieldPath) -> Result<TerminalLayout, Issues> {
    one_of(value, path, &TERMINAL_SHAPES)
}

/// Validate a terminal layout.
pub fn validate_terminal(value: &Value) -> Result<TerminalLayout, ValidationError> {
    terminal_at(value, &FieldPath::root()).map_err(ValidationError::from)
}
