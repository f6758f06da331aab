//! Binary entry point for the omakase catalogue

use clap::Parser;
use omakase_cli::commands::{run::RunArgs, Commands};
use omakase_cli::{exit_code, Cli};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Run(args)) => args.execute(),
        Some(Commands::List(args)) => args.execute(),
        None => RunArgs::full_menu().execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(exit_code(&err));
    }
}
