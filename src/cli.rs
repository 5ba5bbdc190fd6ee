//! Command-line interface module for organize.
//!
//! This module handles argument parsing, runs the organizer with the injected
//! logger, prints the summary, and maps the outcome to a process exit code.

use crate::config::Config;
use crate::file_organizer::{FileOrganizer, OrganizeError};
use crate::logger::Logger;
use crate::logging::Verbosity;
use crate::output::OutputFormatter;
use clap::Parser;
use std::path::PathBuf;

/// Normal completion, including runs where some files were skipped.
pub const EXIT_SUCCESS: u8 = 0;
/// An error reached the command-line boundary.
pub const EXIT_FAILURE: u8 = 1;
/// The directory to organize does not exist.
pub const EXIT_DIRECTORY_NOT_FOUND: u8 = 2;

/// Organize files by extension.
#[derive(Parser, Debug, Clone)]
#[command(name = "organize", version, about)]
pub struct Args {
    /// Directory to organize
    pub directory: PathBuf,

    /// Show what would be done without making changes
    #[arg(long)]
    pub dry_run: bool,

    /// Path to a TOML configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug details
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

/// Runs one organization pass and returns the exit code.
///
/// A missing directory has already been logged by the organizer; any other
/// error is logged here.
///
/// # Examples
///
/// ```no_run
/// use organize::cli::{Args, run_cli};
/// use organize::config::Config;
/// use organize::logger::TracingLogger;
/// use clap::Parser;
///
/// let args = Args::parse_from(["organize", "/path/to/directory", "--dry-run"]);
/// let code = run_cli(&args, &Config::default(), &TracingLogger);
/// std::process::exit(i32::from(code));
/// ```
pub fn run_cli(args: &Args, config: &Config, logger: &dyn Logger) -> u8 {
    let organizer = FileOrganizer::new(logger);

    match organizer.organize(&args.directory, args.dry_run) {
        Ok(report) => {
            if config.output.summary {
                OutputFormatter::summary_table(&report);
            }
            EXIT_SUCCESS
        }
        Err(OrganizeError::DirectoryNotFound { .. }) => EXIT_DIRECTORY_NOT_FOUND,
        Err(e) => {
            logger.error(&format!("Error: {}", e));
            EXIT_FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_directory_and_dry_run() {
        let args = Args::parse_from(["organize", "/tmp/downloads", "--dry-run"]);
        assert_eq!(args.directory, PathBuf::from("/tmp/downloads"));
        assert!(args.dry_run);
        assert!(args.config.is_none());
        assert_eq!(args.verbosity(), Verbosity::Normal);
    }

    #[test]
    fn test_dry_run_defaults_to_false() {
        let args = Args::parse_from(["organize", "."]);
        assert!(!args.dry_run);
    }

    #[test]
    fn test_directory_is_required() {
        assert!(Args::try_parse_from(["organize"]).is_err());
    }

    #[test]
    fn test_verbosity_flags() {
        let args = Args::parse_from(["organize", ".", "-v"]);
        assert_eq!(args.verbosity(), Verbosity::Verbose);

        let args = Args::parse_from(["organize", ".", "--quiet"]);
        assert_eq!(args.verbosity(), Verbosity::Quiet);

        assert!(Args::try_parse_from(["organize", ".", "-v", "-q"]).is_err());
    }
}
