use std::path::Path;

use clap::ArgMatches;
use serde::Serialize;
use tracing::{error, info};

use tutorkit_core::schema::Issue;
use tutorkit_core::{Document, DocumentError, TutorkitError, document_ops, events};

use super::helpers::{format_partial_failure_error, issue_lines, validation_options};

/// One entry of `validate --json` output.
#[derive(Serialize)]
struct ValidationReport<'a> {
    file: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    issues: &'a [Issue],
}

impl<'a> ValidationReport<'a> {
    fn new(file: &'a str, outcome: &'a Result<Document, DocumentError>) -> Self {
        match outcome {
            Ok(_) => Self {
                file,
                valid: true,
                error_code: None,
                error: None,
                issues: &[],
            },
            Err(e) => match e.validation() {
                Some(validation) => Self {
                    file,
                    valid: false,
                    error_code: Some(e.error_code()),
                    error: None,
                    issues: validation.issues(),
                },
                None => Self {
                    file,
                    valid: false,
                    error_code: Some(e.error_code()),
                    error: Some(e.to_string()),
                    issues: &[],
                },
            },
        }
    }
}

pub(crate) fn handle_validate_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let files: Vec<&String> = matches
        .get_many::<String>("files")
        .ok_or("No files provided")?
        .collect();
    let json_output = matches.get_flag("json");
    let options = validation_options(matches);

    info!(
        event = "cli.validate_started",
        count = files.len(),
        strict_document = options.strict_document,
        json_output = json_output
    );

    let outcomes: Vec<(&str, Result<Document, DocumentError>)> = files
        .iter()
        .map(|file| {
            let outcome = document_ops::load_document(Path::new(file.as_str()), &options);
            if let Err(e) = &outcome {
                events::log_app_error(e);
            }
            (file.as_str(), outcome)
        })
        .collect();

    let failed = outcomes.iter().filter(|(_, outcome)| outcome.is_err()).count();

    if json_output {
        let reports: Vec<ValidationReport> = outcomes
            .iter()
            .map(|(file, outcome)| ValidationReport::new(file, outcome))
            .collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for (file, outcome) in &outcomes {
            print_outcome(file, outcome);
        }
    }

    if failed > 0 {
        error!(
            event = "cli.validate_failed",
            failed = failed,
            total = outcomes.len()
        );
        return Err(format_partial_failure_error("validate", failed, outcomes.len()).into());
    }

    info!(event = "cli.validate_completed", count = outcomes.len());
    Ok(())
}

fn print_outcome(file: &str, outcome: &Result<Document, DocumentError>) {
    match outcome {
        Ok(document) => println!("✅ {} ({})", file, document.title),
        Err(e) => match e.validation() {
            Some(validation) => {
                println!("❌ {}: {} issue(s)", file, validation.issues().len());
                for issue in validation.issues() {
                    for line in issue_lines(issue, 1) {
                        println!("{}", line);
                    }
                }
            }
            None => println!("❌ {}: {}", file, e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tutorkit_core::schema::validate_document;

    #[test]
    fn test_report_for_valid_document() {
        let outcome = Ok(validate_document(&json!({ "title": "Hello" })).unwrap());
        let report = serde_json::to_value(ValidationReport::new("a.json", &outcome)).unwrap();
        assert_eq!(
            report,
            json!({ "file": "a.json", "valid": true, "issues": [] })
        );
    }

    #[test]
    fn test_report_for_invalid_document() {
        let outcome = validate_document(&json!({ "title": "Hello", "autoReload": "yes" }))
            .map_err(DocumentError::from);
        let report = serde_json::to_value(ValidationReport::new("a.json", &outcome)).unwrap();

        assert_eq!(report["valid"], json!(false));
        assert_eq!(report["error_code"], json!("DOCUMENT_INVALID"));
        assert!(report.get("error").is_none());
        assert_eq!(report["issues"][0]["path"], json!("autoReload"));
        assert_eq!(report["issues"][0]["code"], json!("TYPE_MISMATCH"));
    }

    #[test]
    fn test_report_for_unreadable_document() {
        let outcome: Result<Document, DocumentError> = Err(DocumentError::MissingFrontMatter);
        let report = serde_json::to_value(ValidationReport::new("a.md", &outcome)).unwrap();

        assert_eq!(report["error_code"], json!("DOCUMENT_MISSING_FRONT_MATTER"));
        assert!(report["error"].as_str().unwrap().contains("front matter"));
        assert_eq!(report["issues"], json!([]));
    }
}
