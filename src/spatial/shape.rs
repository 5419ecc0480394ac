//! Wall shape matrix and its parser
//!
//! The shape is a row-major grid of tri-state cells. Parsing produces only
//! [`Cell::NeedsBrick`] and [`Cell::Empty`]; the filler later turns covered
//! cells into [`Cell::Filled`].

use std::fmt;
use std::io::BufRead;

use ndarray::Array2;

use crate::io::configuration::{CELL_EMPTY, CELL_FILLED, CELL_NEEDS_BRICK};
use crate::io::error::{Result, malformed};
use crate::io::input::LineReader;
use crate::spatial::dimensions::WallDimensions;

/// State of one position in the wall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Never bricked
    Empty,
    /// Must be covered by a brick
    NeedsBrick,
    /// Covered by a placed brick
    Filled,
}

impl Cell {
    /// Map a shape character to a cell, rejecting anything but '0' and '1'
    pub const fn from_shape_char(c: char) -> Option<Self> {
        match c {
            CELL_NEEDS_BRICK => Some(Self::NeedsBrick),
            CELL_EMPTY => Some(Self::Empty),
            _ => None,
        }
    }

    /// Character used when rendering the wall
    pub const fn as_char(self) -> char {
        match self {
            Self::Empty => CELL_EMPTY,
            Self::NeedsBrick => CELL_NEEDS_BRICK,
            Self::Filled => CELL_FILLED,
        }
    }
}

/// Wall shape matrix indexed by (row, column)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallShape {
    cells: Array2<Cell>,
}

impl WallShape {
    /// Build a shape from row-major flags, `true` meaning the cell needs a brick
    ///
    /// # Errors
    ///
    /// Returns [`WallError::MalformedInput`](crate::WallError::MalformedInput)
    /// if the dimensions are not positive or `flags` does not hold exactly
    /// `width * height` entries
    pub fn from_flags(dimensions: WallDimensions, flags: Vec<bool>) -> Result<Self> {
        if dimensions.width == 0 || dimensions.height == 0 {
            return Err(malformed(0, "wall width and height must be positive"));
        }

        let cells = flags
            .into_iter()
            .map(|needs_brick| {
                if needs_brick {
                    Cell::NeedsBrick
                } else {
                    Cell::Empty
                }
            })
            .collect::<Vec<_>>();

        Array2::from_shape_vec((dimensions.height, dimensions.width), cells)
            .map(|cells| Self { cells })
            .map_err(|error| malformed(0, format!("wall cells do not match dimensions: {error}")))
    }

    /// Cells per row
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Width and height of the shape
    pub fn dimensions(&self) -> WallDimensions {
        WallDimensions {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Cell at (row, col), or `None` outside the wall
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get([row, col]).copied()
    }

    /// Number of cells that still need a brick
    pub fn needs_brick_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::NeedsBrick)
            .count()
    }

    /// True when no cell still needs a brick
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::NeedsBrick)
    }

    pub(crate) const fn cells_mut(&mut self) -> &mut Array2<Cell> {
        &mut self.cells
    }
}

impl fmt::Display for WallShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.rows().into_iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
        }
        Ok(())
    }
}

/// Read `dimensions.height` rows of exactly `dimensions.width` '0'/'1' characters
///
/// # Errors
///
/// Returns [`WallError::MalformedInput`](crate::WallError::MalformedInput) if
/// the input ends early, a row has the wrong length, or a row contains any
/// other character; [`WallError::Io`](crate::WallError::Io) if reading fails
pub fn parse_shape<R: BufRead>(
    reader: &mut LineReader<R>,
    dimensions: WallDimensions,
) -> Result<WallShape> {
    // Grows only as validated rows arrive; the declared size is untrusted
    let mut flags = Vec::new();

    for row in 0..dimensions.height {
        let line_number = reader.next_line_number();
        let Some(line) = reader.next_line()? else {
            return Err(malformed(
                line_number,
                format!(
                    "expected {} wall rows but input ended after {row}",
                    dimensions.height
                ),
            ));
        };

        if line.chars().count() != dimensions.width {
            return Err(malformed(
                line_number,
                format!("wall row must be exactly {} characters", dimensions.width),
            ));
        }

        for c in line.chars() {
            let cell = Cell::from_shape_char(c).ok_or_else(|| {
                malformed(line_number, "wall row may only contain '0' and '1'")
            })?;
            flags.push(cell == Cell::NeedsBrick);
        }
    }

    WallShape::from_flags(dimensions, flags)
}
