//! Wall width and height from the first input line

use crate::io::configuration::{MIN_WALL_DIMENSION, UTF8_BOM};
use crate::io::error::{Result, malformed};
use crate::io::input::{parse_integer, split_pair};

/// Size of the wall's shape matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallDimensions {
    /// Cells per row
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl WallDimensions {
    /// Total number of cells, if it fits in `usize`
    pub const fn cell_count(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }
}

/// Parse `"<width> <height>"`, stripping a leading byte-order marker first
///
/// # Errors
///
/// Returns [`WallError::MalformedInput`](crate::WallError::MalformedInput) at
/// `line_number` if the line is not two space-separated tokens, either token
/// is not an integer, either value is below one, or the cell count overflows
pub fn parse_dimensions(line: &str, line_number: usize) -> Result<WallDimensions> {
    let line = line.strip_prefix(UTF8_BOM).unwrap_or(line);

    let (width_token, height_token) = split_pair(line).ok_or_else(|| {
        malformed(
            line_number,
            "wall width and height must be two positive integers separated by a single space",
        )
    })?;

    let (Some(width), Some(height)) = (parse_integer(width_token), parse_integer(height_token))
    else {
        return Err(malformed(
            line_number,
            "wall width and height must be integers",
        ));
    };

    if width < MIN_WALL_DIMENSION || height < MIN_WALL_DIMENSION {
        return Err(malformed(
            line_number,
            format!("wall width and height must be positive (got {width}x{height})"),
        ));
    }

    let dimensions = WallDimensions {
        width: width as usize,
        height: height as usize,
    };

    if dimensions.cell_count().is_none() {
        return Err(malformed(line_number, "wall has too many cells"));
    }

    Ok(dimensions)
}
