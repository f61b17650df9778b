use crate::constants::{exit_codes, verbosity};
use clap::{error::ErrorKind, Args, CommandFactory, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// toolsmith - generate MCP server scaffolds from tool definitions.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate server.py, mcp.json and README.md for a project.
    #[command(visible_alias = "gen")]
    Export(ExportArgs),

    /// Check a project for problems without generating anything.
    Validate(ValidateArgs),
}

/// Arguments of `toolsmith export`.
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Project file, directory containing toolsmith.{json,yaml,yml}, or `-` for stdin.
    #[arg(value_name = "PROJECT")]
    pub project: String,

    /// Destination directory for the generated files or archive.
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Bundle the artifacts into mcp_project_<name>.zip instead of loose files.
    #[arg(long)]
    pub zip: bool,

    /// Force overwrite of an existing output directory or archive.
    #[arg(short, long)]
    pub force: bool,

    /// Preview actions without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Generate even when validation reports errors.
    #[arg(long = "skip-validation")]
    pub skip_validation: bool,
}

/// Arguments of `toolsmith validate`.
#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Project file, directory containing toolsmith.{json,yaml,yml}, or `-` for stdin.
    #[arg(value_name = "PROJECT")]
    pub project: String,
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        if matches!(
            e.kind(),
            ErrorKind::MissingRequiredArgument
                | ErrorKind::MissingSubcommand
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        ) {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_minimal_export() {
        let cli = Cli::parse_from(["toolsmith", "export", "project.json", "out"]);
        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.project, "project.json");
                assert_eq!(args.output_dir, PathBuf::from("out"));
                assert!(!args.zip && !args.force && !args.dry_run && !args.skip_validation);
            }
            other => panic!("Expected export, got {other:?}"),
        }
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parses_full_export_flags() {
        let cli = Cli::parse_from([
            "toolsmith",
            "-vv",
            "gen",
            "-",
            "out",
            "--zip",
            "--force",
            "--dry-run",
            "--skip-validation",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.project, "-");
                assert!(args.zip && args.force && args.dry_run && args.skip_validation);
            }
            other => panic!("Expected export, got {other:?}"),
        }
    }

    #[test]
    fn parses_validate() {
        let cli = Cli::parse_from(["toolsmith", "validate", "dir", "-v"]);
        assert_eq!(cli.verbose, 1);
        assert!(matches!(cli.command, Commands::Validate(ValidateArgs { ref project }) if project == "dir"));
    }
}
