//! Normalized document types.
//!
//! Every accepted surface encoding collapses into one of these shapes. They
//! serialize to camelCase JSON with absent optionals omitted, e.g.
//!
//! ```json
//! {
//!   "title": "Counter",
//!   "mainCommand": { "command": "npm start", "title": "Start" },
//!   "previews": [{ "port": 5173 }],
//!   "terminal": { "panels": [{ "kind": "terminal" }, { "kind": "output", "title": "Build" }] }
//! }
//! ```

use std::num::NonZeroU64;

use serde::Serialize;

/// One runnable shell command with an optional display title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSpec {
    /// Command line as written; never trimmed, may be empty.
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl CommandSpec {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            title: None,
        }
    }

    pub fn titled(command: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            title: Some(title.into()),
        }
    }
}

/// The optional main command plus the commands run before it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandsGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_command: Option<CommandSpec>,
    /// Execution order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prepare_commands: Option<Vec<CommandSpec>>,
}

/// Port number exactly as it appeared in the document.
///
/// Any JSON number is accepted; use [`Port::as_tcp_port`] when a usable TCP
/// port is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Port(serde_json::Number);

impl Port {
    pub fn as_number(&self) -> &serde_json::Number {
        &self.0
    }

    /// The port if it is an integer in `1..=65535`.
    pub fn as_tcp_port(&self) -> Option<u16> {
        self.0
            .as_u64()
            .and_then(|port| u16::try_from(port).ok())
            .filter(|port| *port != 0)
    }
}

impl From<serde_json::Number> for Port {
    fn from(number: serde_json::Number) -> Self {
        Self(number)
    }
}

impl From<u16> for Port {
    fn from(port: u16) -> Self {
        Self(serde_json::Number::from(port))
    }
}

/// An exposed network port with an optional display title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewSpec {
    pub port: Port,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl PreviewSpec {
    pub fn new(port: impl Into<Port>) -> Self {
        Self {
            port: port.into(),
            title: None,
        }
    }

    pub fn titled(port: impl Into<Port>, title: impl Into<String>) -> Self {
        Self {
            port: port.into(),
            title: Some(title.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelKind {
    Output,
    Terminal,
}

impl PanelKind {
    pub fn from_literal(literal: &str) -> Option<Self> {
        match literal {
            "output" => Some(PanelKind::Output),
            "terminal" => Some(PanelKind::Terminal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PanelKind::Output => "output",
            PanelKind::Terminal => "terminal",
        }
    }
}

/// One panel of a terminal layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelRef {
    pub kind: PanelKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl PanelRef {
    pub fn new(kind: PanelKind) -> Self {
        Self { kind, title: None }
    }

    pub fn titled(kind: PanelKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: Some(title.into()),
        }
    }

    pub fn is_output(&self) -> bool {
        self.kind == PanelKind::Output
    }
}

/// The `panels` value of a layout.
///
/// A bare `"output"` / `"terminal"` stays [`Panels::Single`] rather than being
/// rewritten into a one-element list; [`Panels::to_refs`] gives the uniform view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Panels {
    Single(PanelKind),
    /// Rendering order; holds at most one output panel.
    List(Vec<PanelRef>),
}

impl Panels {
    pub(crate) fn len(&self) -> usize {
        match self {
            Panels::Single(_) => 1,
            Panels::List(panels) => panels.len(),
        }
    }

    pub fn to_refs(&self) -> Vec<PanelRef> {
        match self {
            Panels::Single(kind) => vec![PanelRef::new(*kind)],
            Panels::List(panels) => panels.clone(),
        }
    }
}

/// Structured terminal layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelLayout {
    pub panels: Panels,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_panel: Option<NonZeroU64>,
}

impl PanelLayout {
    /// `activePanel` points past the last panel (1-based position).
    ///
    /// Validation does not reject this; callers decide how to handle it.
    pub fn active_panel_out_of_range(&self) -> bool {
        self.active_panel
            .is_some_and(|active| active.get() > self.panels.len() as u64)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TerminalLayout {
    /// Show (`true`) or hide (`false`) the default terminal.
    Toggle(bool),
    Layout(PanelLayout),
}

/// Environment settings shared by every level that configures a sandbox.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentSettings {
    #[serde(flatten)]
    pub commands: CommandsGroup,
    /// Display order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previews: Option<Vec<PreviewSpec>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_reload: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal: Option<TerminalLayout>,
}

/// Root configuration for one environment definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(flatten)]
    pub environment: EnvironmentSettings,
}

/// Knobs for [`crate::schema::validate_document_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Reject top-level Document keys outside the known set instead of ignoring them.
    pub strict_document: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tcp_port_bounds() {
        assert_eq!(Port::from(5173u16).as_tcp_port(), Some(5173));
        assert_eq!(Port::from(0u16).as_tcp_port(), None);
        assert_eq!(Port::from(serde_json::Number::from(70000)).as_tcp_port(), None);
        assert_eq!(Port::from(serde_json::Number::from(-1)).as_tcp_port(), None);
        let fractional = serde_json::Number::from_f64(80.5).unwrap();
        assert_eq!(Port::from(fractional).as_tcp_port(), None);
    }

    #[test]
    fn test_single_panel_shorthand_expands_to_one_ref() {
        let panels = Panels::Single(PanelKind::Output);
        assert_eq!(panels.len(), 1);
        assert_eq!(panels.to_refs(), vec![PanelRef::new(PanelKind::Output)]);
    }

    #[test]
    fn test_active_panel_out_of_range() {
        let layout = PanelLayout {
            panels: Panels::Single(PanelKind::Output),
            active_panel: NonZeroU64::new(2),
        };
        assert!(layout.active_panel_out_of_range());

        let layout = PanelLayout {
            panels: Panels::List(vec![
                PanelRef::new(PanelKind::Terminal),
                PanelRef::new(PanelKind::Output),
            ]),
            active_panel: NonZeroU64::new(2),
        };
        assert!(!layout.active_panel_out_of_range());
    }

    #[test]
    fn test_document_serializes_flat_camel_case() {
        let document = Document {
            title: "Counter".to_string(),
            slug: None,
            environment: EnvironmentSettings {
                commands: CommandsGroup {
                    main_command: Some(CommandSpec::titled("npm start", "Start")),
                    prepare_commands: Some(vec![CommandSpec::new("npm install")]),
                },
                previews: Some(vec![PreviewSpec::new(5173u16)]),
                auto_reload: Some(true),
                template: None,
                terminal: Some(TerminalLayout::Layout(PanelLayout {
                    panels: Panels::Single(PanelKind::Terminal),
                    active_panel: None,
                })),
            },
        };

        assert_eq!(
            serde_json::to_value(&document).unwrap(),
            json!({
                "title": "Counter",
                "mainCommand": { "command": "npm start", "title": "Start" },
                "prepareCommands": [{ "command": "npm install" }],
                "previews": [{ "port": 5173 }],
                "autoReload": true,
                "terminal": { "panels": "terminal" }
            })
        );
    }
}
