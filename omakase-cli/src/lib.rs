//! Omakase CLI library
//!
//! Command-line front end for the restaurant-themed design pattern
//! vignettes. Invoked with no subcommand it serves the full tasting
//! menu to stdout.

use clap::Parser;

pub mod commands;
pub mod error;

pub use error::{exit_code, CliResult};

/// Top-level argument parser.
#[derive(Debug, Parser)]
#[command(
    name = "omakase",
    version,
    about = "Serve the design pattern tasting menu"
)]
pub struct Cli {
    /// Subcommand (default: serve the full menu)
    #[command(subcommand)]
    pub command: Option<commands::Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::Path;

    #[test]
    fn test_cli_declaration_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bare_invocation_has_no_subcommand() {
        let cli = Cli::parse_from(["omakase"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_run_accepts_keys_and_output() {
        let cli = Cli::parse_from(["omakase", "run", "singleton", "builder", "-o", "menu.txt"]);
        match cli.command {
            Some(commands::Commands::Run(args)) => {
                assert_eq!(args.keys, ["singleton", "builder"]);
                assert_eq!(args.output.as_deref(), Some(Path::new("menu.txt")));
            }
            other => panic!("expected run command, got {other:?}"),
        }
    }

    #[test]
    fn test_list_defaults_to_text_format() {
        let cli = Cli::parse_from(["omakase", "list"]);
        match cli.command {
            Some(commands::Commands::List(args)) => {
                assert!(matches!(args.format, commands::list::ListFormat::Text));
            }
            other => panic!("expected list command, got {other:?}"),
        }
    }
}
