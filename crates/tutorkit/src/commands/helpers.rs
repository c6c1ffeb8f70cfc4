use clap::ArgMatches;
use tracing::warn;

use tutorkit_core::schema::{Issue, IssueKind};
use tutorkit_core::{TutorkitConfig, ValidationOptions};

/// Load the config hierarchy, falling back to defaults with a warning.
pub fn load_config_with_warning() -> TutorkitConfig {
    match TutorkitConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.tutorkit/config.toml and ./.tutorkit/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            TutorkitConfig::default()
        }
    }
}

/// Validation options from config, with `--strict` taking precedence.
pub fn validation_options(matches: &ArgMatches) -> ValidationOptions {
    let mut options = load_config_with_warning().validation_options();
    if matches.get_flag("strict") {
        options.strict_document = true;
    }
    options
}

/// Format partial failure error message for bulk operations.
pub fn format_partial_failure_error(operation: &str, failed: usize, total: usize) -> String {
    format!(
        "Partial failure: {} of {} document(s) failed to {}",
        failed, total, operation
    )
}

/// Render an issue as indented lines, expanding each rejected shape.
pub fn issue_lines(issue: &Issue, depth: usize) -> Vec<String> {
    let indent = "  ".repeat(depth);
    match &issue.kind {
        IssueKind::ShapeMismatch { alternatives } => {
            let mut lines = vec![format!("{}{}", indent, issue)];
            for alternative in alternatives {
                lines.push(format!("{}  as {}:", indent, alternative.shape));
                for nested in &alternative.issues {
                    lines.extend(issue_lines(nested, depth + 2));
                }
            }
            lines
        }
        IssueKind::PanelConstraintViolation { index } => vec![format!(
            "{}{} (second output panel at index {})",
            indent, issue, index
        )],
        _ => vec![format!("{}{}", indent, issue)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tutorkit_core::schema::{validate_command, validate_terminal};

    #[test]
    fn test_format_partial_failure_error() {
        assert_eq!(
            format_partial_failure_error("validate", 2, 5),
            "Partial failure: 2 of 5 document(s) failed to validate"
        );
    }

    #[test]
    fn test_issue_lines_expand_alternatives() {
        let error = validate_command(&json!(42)).unwrap_err();
        let lines = issue_lines(&error.issues()[0], 1);

        assert!(lines[0].starts_with("  <root>: Input matched none of the accepted shapes"));
        assert_eq!(lines[1], "    as string:");
        assert_eq!(lines[2], "      <root>: Expected string, received number");
        assert_eq!(lines[3], "    as [command, title] pair:");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_issue_lines_name_second_output_panel() {
        let error = validate_terminal(&json!({
            "panels": ["output", "terminal", ["output", "Logs"]]
        }))
        .unwrap_err();
        let lines = issue_lines(&error.issues()[0], 0);

        assert_eq!(
            lines,
            vec!["panels: Only a single output panel can be defined. (second output panel at index 2)"]
        );
    }
}
