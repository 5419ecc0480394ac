//! Command-line interface for checking a single wall description file

use crate::algorithm::filler::{FillReport, fill};
use crate::io::configuration::ERROR_PREFIX;
use crate::io::error::{Result, WallError};
use crate::io::input::WallInput;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{Level, debug, info};

#[derive(Parser, Debug)]
#[command(name = "brickwall")]
#[command(
    author,
    version,
    about = "Check whether a wall shape can be built greedily from a brick inventory"
)]
/// Command-line arguments for the wall checker
pub struct Cli {
    /// Wall description file
    // Optional so that a missing path is reported as an `ERROR:` line
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Log parsing and filling details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Maximum level of log events written to stderr
    pub const fn log_level(&self) -> Level {
        if self.verbose { Level::DEBUG } else { Level::WARN }
    }
}

/// Install the stderr log subscriber for the given level
///
/// Later calls are ignored once a global subscriber is set.
pub fn init_logging(level: Level) {
    let installed = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok();
    debug!(installed, %level, "logging initialised");
}

/// The single stdout line and exit status of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// `yes`, `no` or an `ERROR:` diagnostic
    pub line: String,
    /// Zero for any verdict, otherwise the error kind's code
    pub exit_code: u8,
}

impl Outcome {
    /// Render the result of a run
    pub fn from_result(result: &Result<FillReport>) -> Self {
        match result {
            Ok(report) => Self {
                line: report.verdict().to_string(),
                exit_code: 0,
            },
            Err(error) => Self {
                line: format!("{ERROR_PREFIX} {error}"),
                exit_code: error.exit_code(),
            },
        }
    }
}

/// Runs one wall description through parsing and filling
pub struct WallChecker {
    cli: Cli,
}

impl WallChecker {
    /// Create a checker for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Path of the description to check
    ///
    /// # Errors
    ///
    /// Returns [`WallError::MissingArgument`] if no path was given
    pub fn input_path(&self) -> Result<&Path> {
        self.cli
            .input
            .as_deref()
            .ok_or(WallError::MissingArgument)
    }

    /// Read the description and fill the wall
    ///
    /// # Errors
    ///
    /// Returns an error if the path is missing, unreadable, or the
    /// description is invalid
    pub fn check(&self) -> Result<FillReport> {
        let path = self.input_path()?;
        let WallInput {
            mut shape,
            inventory,
        } = WallInput::from_path(path)?;

        let report = fill(&mut shape, &inventory);
        info!(
            path = %path.display(),
            bricks_placed = report.bricks_placed(),
            unfilled_cells = report.unfilled_cells,
            verdict = %report.verdict(),
            "wall checked"
        );
        Ok(report)
    }

    /// Check the wall and print the single outcome line to stdout
    // The outcome line is the program's output
    #[allow(clippy::print_stdout)]
    pub fn run(&self) -> Outcome {
        let outcome = Outcome::from_result(&self.check());
        println!("{}", outcome.line);
        outcome
    }
}
