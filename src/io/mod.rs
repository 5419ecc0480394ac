/// Command-line interface and run orchestration
pub mod cli;
/// Format constants, output words and exit codes
pub mod configuration;
/// Error types
pub mod error;
/// Line reading and the full description pipeline
pub mod input;
