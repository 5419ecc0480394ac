//! Error types for reading and validating wall descriptions

use std::fmt;
use std::path::PathBuf;

use crate::io::configuration::{
    EXIT_DUPLICATE_BRICK_LENGTH, EXIT_FILE_NOT_FOUND, EXIT_IO_FAILURE, EXIT_MALFORMED_INPUT,
    EXIT_MISSING_ARGUMENT, EXIT_TOO_MANY_INVENTORY_LINES,
};

/// Main error type for every stage of a run
///
/// The filler itself never fails; all variants come from locating,
/// reading or validating the input description.
#[derive(Debug)]
pub enum WallError {
    /// No input file path was supplied on the command line
    MissingArgument,

    /// Input path does not resolve to a file that can be opened
    FileNotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// Reading from the input failed
    Io {
        /// Path of the input being read
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Input violates the structure or value rules of the format
    MalformedInput {
        /// 1-based line on which the violation was detected
        line: usize,
        /// Which rule was broken
        reason: String,
    },

    /// The same brick length was declared on two inventory lines
    DuplicateBrickLength {
        /// 1-based line of the repeated declaration
        line: usize,
        /// Repeated brick length
        length: u8,
    },

    /// Non-empty input follows the declared number of inventory lines
    TooManyInventoryLines {
        /// 1-based line of the first surplus entry
        line: usize,
        /// Number of inventory lines the input declared
        declared: usize,
    },
}

impl WallError {
    /// Process exit status reported for this error kind
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::MissingArgument => EXIT_MISSING_ARGUMENT,
            Self::FileNotFound { .. } => EXIT_FILE_NOT_FOUND,
            Self::Io { .. } => EXIT_IO_FAILURE,
            Self::MalformedInput { .. } => EXIT_MALFORMED_INPUT,
            Self::DuplicateBrickLength { .. } => EXIT_DUPLICATE_BRICK_LENGTH,
            Self::TooManyInventoryLines { .. } => EXIT_TOO_MANY_INVENTORY_LINES,
        }
    }
}

impl fmt::Display for WallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArgument => write!(f, "Please, specify the input file name"),
            Self::FileNotFound { path } => {
                write!(f, "Can't find the file with data '{}'", path.display())
            }
            Self::Io {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "I/O error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::MalformedInput { line, reason } => {
                write!(f, "Malformed input at line {line}: {reason}")
            }
            Self::DuplicateBrickLength { line, length } => {
                write!(
                    f,
                    "Brick length {length} at line {line} is already declared in the inventory"
                )
            }
            Self::TooManyInventoryLines { line, declared } => {
                write!(
                    f,
                    "Unexpected content at line {line}: inventory declares {declared} line(s)"
                )
            }
        }
    }
}

impl std::error::Error for WallError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for wall results
pub type Result<T> = std::result::Result<T, WallError>;

/// Create a malformed input error for the given line
pub fn malformed(line: usize, reason: impl Into<String>) -> WallError {
    WallError::MalformedInput {
        line,
        reason: reason.into(),
    }
}
