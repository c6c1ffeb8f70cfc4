//! Structured validation failures.
//!
//! Every failure carries the [`FieldPath`] it was found at, so callers can
//! report all problems of a document in a single pass.

use std::fmt;

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::errors::TutorkitError;

/// One step into a document: an object key or a sequence index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Location of a value inside the validated document, e.g. `terminal.panels[2]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Path of the child stored under `key`.
    pub fn key(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Key(key.to_string()));
        Self(segments)
    }

    /// Path of the element at `index`.
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        Self(segments)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "<root>");
        }

        for (position, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if position == 0 => write!(f, "{key}")?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One accepted encoding of a union-shaped field and why the input did not match it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alternative {
    pub shape: &'static str,
    pub issues: Vec<Issue>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IssueKind {
    #[error("Input matched none of the accepted shapes ({})", shape_names(.alternatives))]
    ShapeMismatch { alternatives: Vec<Alternative> },

    #[error("Unrecognized key '{key}'")]
    UnexpectedKey { key: String },

    #[error("Expected {expected}, received {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Invalid literal value, expected {expected}")]
    LiteralMismatch { expected: &'static str },

    #[error("Expected exactly {expected} elements, received {found}")]
    ArityMismatch { expected: usize, found: usize },

    #[error("Only a single output panel can be defined.")]
    PanelConstraintViolation {
        /// Position of the second `output` panel in the sequence.
        index: usize,
    },

    #[error("Number must be greater than 0, received {value}")]
    RangeViolation { value: serde_json::Number },

    #[error("Required")]
    Missing,
}

fn shape_names(alternatives: &[Alternative]) -> String {
    alternatives
        .iter()
        .map(|alternative| alternative.shape)
        .collect::<Vec<_>>()
        .join(", ")
}

impl IssueKind {
    pub fn code(&self) -> &'static str {
        match self {
            IssueKind::ShapeMismatch { .. } => "SHAPE_MISMATCH",
            IssueKind::UnexpectedKey { .. } => "UNEXPECTED_KEY",
            IssueKind::TypeMismatch { .. } => "TYPE_MISMATCH",
            IssueKind::LiteralMismatch { .. } => "LITERAL_MISMATCH",
            IssueKind::ArityMismatch { .. } => "ARITY_MISMATCH",
            IssueKind::PanelConstraintViolation { .. } => "PANEL_CONSTRAINT_VIOLATION",
            IssueKind::RangeViolation { .. } => "RANGE_VIOLATION",
            IssueKind::Missing => "MISSING_FIELD",
        }
    }

    /// Rule violations on a value whose shape was accepted.
    ///
    /// Union parsing reports these directly instead of folding them into a
    /// [`IssueKind::ShapeMismatch`].
    pub fn is_refinement(&self) -> bool {
        matches!(
            self,
            IssueKind::PanelConstraintViolation { .. } | IssueKind::RangeViolation { .. }
        )
    }
}

/// A single failure at a single location.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub path: FieldPath,
    pub kind: IssueKind,
}

impl Issue {
    pub fn new(path: FieldPath, kind: IssueKind) -> Self {
        Self { path, kind }
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// This issue or any issue nested in its rejected alternatives has `code`.
    pub fn contains_code(&self, code: &str) -> bool {
        if self.code() == code {
            return true;
        }
        match &self.kind {
            IssueKind::ShapeMismatch { alternatives } => alternatives
                .iter()
                .flat_map(|alternative| &alternative.issues)
                .any(|issue| issue.contains_code(code)),
            _ => false,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

impl Serialize for Issue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = match self.kind {
            IssueKind::ShapeMismatch { .. } | IssueKind::PanelConstraintViolation { .. } => 4,
            _ => 3,
        };
        let mut state = serializer.serialize_struct("Issue", len)?;
        state.serialize_field("path", &self.path)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("message", &self.message())?;
        match &self.kind {
            IssueKind::ShapeMismatch { alternatives } => {
                state.serialize_field("alternatives", alternatives)?;
            }
            IssueKind::PanelConstraintViolation { index } => {
                state.serialize_field("index", index)?;
            }
            _ => {}
        }
        state.end()
    }
}

/// Every issue found while validating one value.
///
/// Never constructed empty by the validators.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("{}", summarize(.issues))]
pub struct ValidationError {
    issues: Vec<Issue>,
}

fn summarize(issues: &[Issue]) -> String {
    let details = issues
        .iter()
        .map(Issue::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    format!("Validation failed with {} issue(s): {}", issues.len(), details)
}

impl ValidationError {
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }

    /// Whether any top-level issue has the given kind code, e.g. `"UNEXPECTED_KEY"`.
    pub fn has_code(&self, code: &str) -> bool {
        self.issues.iter().any(|issue| issue.code() == code)
    }

    /// Like [`ValidationError::has_code`], also searching rejected union alternatives.
    pub fn contains_code(&self, code: &str) -> bool {
        self.issues.iter().any(|issue| issue.contains_code(code))
    }
}

impl From<Vec<Issue>> for ValidationError {
    fn from(issues: Vec<Issue>) -> Self {
        Self { issues }
    }
}

impl TutorkitError for ValidationError {
    fn error_code(&self) -> &'static str {
        "VALIDATION_FAILED"
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
