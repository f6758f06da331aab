//! CLI command implementations

use clap::Subcommand;

pub mod list;
pub mod run;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve vignettes from the catalogue
    Run(run::RunArgs),

    /// List the catalogue
    List(list::ListArgs),
}
