use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("tutorkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Validate and normalize environment configuration documents")
        .long_about("TutorKit checks documents that describe a sandboxed coding environment: the commands it runs, the ports it exposes as previews, and how its terminal panels are laid out. Documents may be JSON, TOML, YAML, or the YAML front matter of a Markdown file.")
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only log errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("validate")
                .about("Validate one or more documents and report every issue")
                .arg(
                    Arg::new("files")
                        .help("Document files (.json, .toml, .yaml, .yml, .md, .mdx)")
                        .required(true)
                        .num_args(1..)
                        .index(1)
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .help("Reject unknown top-level keys (overrides config)")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("normalize")
                .about("Print the normalized form of a document as JSON")
                .arg(
                    Arg::new("file")
                        .help("Document file")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .help("Reject unknown top-level keys (overrides config)")
                        .action(ArgAction::SetTrue)
                )
        )
}
