//! Run command implementation

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use omakase_core::{catalogue, Printer, Vignette};

use crate::error::CliResult;

/// Arguments for the run command
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Vignette keys to serve, in the order given (default: the full menu)
    #[arg(value_name = "KEY")]
    pub keys: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl RunArgs {
    /// Arguments for a bare invocation: the whole catalogue to stdout.
    pub fn full_menu() -> Self {
        RunArgs {
            keys: Vec::new(),
            output: None,
            quiet: false,
            verbose: 0,
        }
    }

    /// Execute the run command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging()?;

        log::debug!("Arguments: {self:?}");

        let vignettes = self.selection()?;
        log::info!("Serving {} vignette(s)", vignettes.len());

        let mut sink = self.open_output()?;
        let mut out = Printer::new(sink.as_mut());
        for vignette in &vignettes {
            log::debug!("Serving '{}'", vignette.key());
            vignette.serve(&mut out)?;
        }
        out.finish()?;

        Ok(())
    }

    /// Resolve the requested keys, defaulting to the whole catalogue.
    fn selection(&self) -> CliResult<Vec<Box<dyn Vignette>>> {
        if self.keys.is_empty() {
            return Ok(catalogue::menu());
        }

        let mut vignettes = Vec::with_capacity(self.keys.len());
        for key in &self.keys {
            vignettes.push(catalogue::find(key)?);
        }
        Ok(vignettes)
    }

    fn open_output(&self) -> CliResult<Box<dyn Write>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout().lock())),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> CliResult<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }
}
