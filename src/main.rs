//! CLI entry point for the brick wall feasibility checker

use brickwall::io::cli::{Cli, WallChecker, init_logging};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let outcome = WallChecker::new(cli).run();
    ExitCode::from(outcome.exit_code)
}
