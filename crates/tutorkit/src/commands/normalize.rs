use std::path::Path;

use clap::ArgMatches;
use tracing::info;

use tutorkit_core::{document_ops, events};

use super::helpers::{issue_lines, validation_options};

pub(crate) fn handle_normalize_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = matches
        .get_one::<String>("file")
        .ok_or("No file provided")?;
    let options = validation_options(matches);

    info!(
        event = "cli.normalize_started",
        file = file.as_str(),
        strict_document = options.strict_document
    );

    match document_ops::load_document(Path::new(file), &options) {
        Ok(document) => {
            println!("{}", serde_json::to_string_pretty(&document)?);
            info!(event = "cli.normalize_completed", file = file.as_str());
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to normalize '{}': {}", file, e);
            if let Some(validation) = e.validation() {
                for issue in validation.issues() {
                    for line in issue_lines(issue, 1) {
                        eprintln!("{}", line);
                    }
                }
            }

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
