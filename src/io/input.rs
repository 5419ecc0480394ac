//! Line-oriented input reading and the full wall description pipeline
//!
//! The description is consumed strictly top to bottom: dimensions, shape rows,
//! sort count, inventory lines. Each stage either yields validated data or
//! fails the whole read.

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, ErrorKind, Lines};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::bricks::inventory::{BrickInventory, parse_inventory, parse_sort_count};
use crate::io::configuration::TOKEN_SEPARATOR;
use crate::io::error::{Result, WallError, malformed};
use crate::spatial::dimensions::parse_dimensions;
use crate::spatial::shape::{WallShape, parse_shape};

/// Label used for inputs that do not come from a file
const IN_MEMORY_ORIGIN: &str = "<memory>";

/// Sequential line source that tracks 1-based line numbers for diagnostics
pub struct LineReader<R> {
    lines: Lines<R>,
    origin: PathBuf,
    line_number: usize,
}

impl<R: BufRead> LineReader<R> {
    /// Wrap a buffered reader, naming its origin for I/O diagnostics
    pub fn new(reader: R, origin: impl Into<PathBuf>) -> Self {
        Self {
            lines: reader.lines(),
            origin: origin.into(),
            line_number: 0,
        }
    }

    /// Number of lines consumed so far
    pub const fn line_number(&self) -> usize {
        self.line_number
    }

    /// Line number the next read will report
    pub const fn next_line_number(&self) -> usize {
        self.line_number + 1
    }

    /// Read the next line, or `None` at end of input
    ///
    /// # Errors
    ///
    /// Returns [`WallError::Io`] if the underlying reader fails or the line
    /// is not valid UTF-8
    pub fn next_line(&mut self) -> Result<Option<String>> {
        match self.lines.next() {
            Some(Ok(line)) => {
                self.line_number += 1;
                Ok(Some(line))
            }
            Some(Err(source)) => Err(WallError::Io {
                path: self.origin.clone(),
                operation: "read",
                source,
            }),
            None => Ok(None),
        }
    }

    /// Read the next line, treating end of input as malformed
    ///
    /// # Errors
    ///
    /// Returns [`WallError::MalformedInput`] naming `expected` when the input
    /// has ended, or [`WallError::Io`] if reading fails
    pub fn require_line(&mut self, expected: &str) -> Result<String> {
        let line_number = self.next_line_number();
        self.next_line()?.ok_or_else(|| {
            malformed(
                line_number,
                format!("input ended where {expected} was expected"),
            )
        })
    }

    /// Skip blank lines and return the number of the first non-empty one, if any
    ///
    /// # Errors
    ///
    /// Returns [`WallError::Io`] if reading fails
    pub fn find_remaining_content(&mut self) -> Result<Option<usize>> {
        while let Some(line) = self.next_line()? {
            if !line.is_empty() {
                return Ok(Some(self.line_number));
            }
        }
        Ok(None)
    }
}

/// Split a line into exactly two tokens around a single separator
///
/// Leading, trailing or doubled separators yield `None`, as does any
/// count of tokens other than two.
pub fn split_pair(line: &str) -> Option<(&str, &str)> {
    let (first, second) = line.split_once(TOKEN_SEPARATOR)?;
    (!first.is_empty() && !second.is_empty() && !second.contains(TOKEN_SEPARATOR))
        .then_some((first, second))
}

/// Parse a decimal 32-bit signed integer token
pub fn parse_integer(token: &str) -> Option<i32> {
    token.parse::<i32>().ok()
}

/// Validated wall description ready for the filler
#[derive(Debug, Clone)]
pub struct WallInput {
    /// Cells that need bricks, row-major
    pub shape: WallShape,
    /// Available bricks, longest first
    pub inventory: BrickInventory,
}

impl WallInput {
    /// Read and validate a full description from a line source
    ///
    /// # Errors
    ///
    /// Returns the first validation or read error encountered; see
    /// [`WallError`] for the kinds
    pub fn parse<R: BufRead>(reader: &mut LineReader<R>) -> Result<Self> {
        let first_line = reader.require_line("wall width and height")?;
        let dimensions = parse_dimensions(&first_line, reader.line_number())?;
        debug!(
            width = dimensions.width,
            height = dimensions.height,
            "parsed wall dimensions"
        );

        let shape = parse_shape(reader, dimensions)?;
        debug!(
            cells_to_fill = shape.needs_brick_count(),
            "parsed wall shape"
        );

        let sort_count = parse_sort_count(reader)?;
        debug!(sort_count, "parsed count of brick sorts");

        let inventory = parse_inventory(reader, sort_count)?;
        debug!(
            sorts = inventory.len(),
            bricks = inventory.total_bricks(),
            "parsed brick inventory"
        );

        Ok(Self { shape, inventory })
    }

    /// Read and validate a description held in memory
    ///
    /// # Errors
    ///
    /// Same as [`WallInput::parse`]
    pub fn from_text(text: &str) -> Result<Self> {
        let mut reader = LineReader::new(Cursor::new(text), IN_MEMORY_ORIGIN);
        Self::parse(&mut reader)
    }

    /// Open a file and read a description from it
    ///
    /// # Errors
    ///
    /// Returns [`WallError::FileNotFound`] if the path is missing or a directory,
    /// [`WallError::Io`] if it cannot be opened or read, and otherwise the
    /// errors of [`WallInput::parse`]
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                WallError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                WallError::Io {
                    path: path.to_path_buf(),
                    operation: "open",
                    source,
                }
            }
        })?;

        if file.metadata().is_ok_and(|metadata| metadata.is_dir()) {
            return Err(WallError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let mut reader = LineReader::new(BufReader::new(file), path);
        Self::parse(&mut reader)
    }
}
