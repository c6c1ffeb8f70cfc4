use clap::ArgMatches;
use tracing::error;

use tutorkit_core::events;

pub mod helpers;

mod normalize;
mod validate;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("validate", sub_matches)) => validate::handle_validate_command(sub_matches),
        Some(("normalize", sub_matches)) => normalize::handle_normalize_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
