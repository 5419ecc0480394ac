//! Brick inventory: the declared sort count and the length/count lines
//!
//! Sorts are kept as an explicit sequence ordered by descending length, fixed
//! once at construction. The filler relies on that order.

use std::io::BufRead;

use crate::io::configuration::{
    MAX_BRICK_LENGTH, MIN_BRICK_COUNT, MIN_BRICK_LENGTH, MIN_COUNT_OF_BRICKS_SORTS,
};
use crate::io::error::{Result, WallError, malformed};
use crate::io::input::{LineReader, parse_integer, split_pair};

/// Bricks of one length and how many of them are available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickSort {
    /// Brick length in cells
    pub length: u8,
    /// Number of bricks of this length
    pub count: u32,
}

impl BrickSort {
    /// Validate a raw (length, count) pair
    pub fn new(length: i32, count: i32) -> Option<Self> {
        if !(MIN_BRICK_LENGTH..=MAX_BRICK_LENGTH).contains(&length) || count < MIN_BRICK_COUNT {
            return None;
        }
        Some(Self {
            length: u8::try_from(length).ok()?,
            count: u32::try_from(count).ok()?,
        })
    }
}

/// Available bricks, one entry per distinct length, longest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrickInventory {
    sorts: Vec<BrickSort>,
}

impl BrickInventory {
    /// Build an inventory from sorts in any order
    ///
    /// # Errors
    ///
    /// Returns [`WallError::DuplicateBrickLength`] (reported at line 0) if
    /// two sorts share a length
    pub fn from_sorts(sorts: impl IntoIterator<Item = BrickSort>) -> Result<Self> {
        let mut inventory = Self::default();
        for sort in sorts {
            inventory.insert(sort, 0)?;
        }
        Ok(inventory)
    }

    fn insert(&mut self, sort: BrickSort, line: usize) -> Result<()> {
        // Descending by length; the search key is reversed to match
        match self
            .sorts
            .binary_search_by(|existing| sort.length.cmp(&existing.length))
        {
            Ok(_) => Err(WallError::DuplicateBrickLength {
                line,
                length: sort.length,
            }),
            Err(position) => {
                self.sorts.insert(position, sort);
                Ok(())
            }
        }
    }

    /// Sorts in descending length order
    pub fn iter(&self) -> impl Iterator<Item = &BrickSort> {
        self.sorts.iter()
    }

    /// Number of distinct brick lengths
    pub const fn len(&self) -> usize {
        self.sorts.len()
    }

    /// True when no sorts are present
    pub const fn is_empty(&self) -> bool {
        self.sorts.is_empty()
    }

    /// Total number of bricks across all lengths
    pub fn total_bricks(&self) -> u64 {
        self.sorts.iter().map(|sort| u64::from(sort.count)).sum()
    }
}

impl<'a> IntoIterator for &'a BrickInventory {
    type Item = &'a BrickSort;
    type IntoIter = std::slice::Iter<'a, BrickSort>;

    fn into_iter(self) -> Self::IntoIter {
        self.sorts.iter()
    }
}

/// Read the number of inventory lines that follow
///
/// # Errors
///
/// Returns [`WallError::MalformedInput`] if the line is missing, not an
/// integer, or below the minimum sort count
pub fn parse_sort_count<R: BufRead>(reader: &mut LineReader<R>) -> Result<usize> {
    let line = reader.require_line("the count of brick sorts")?;
    let line_number = reader.line_number();

    let count = parse_integer(&line)
        .ok_or_else(|| malformed(line_number, "count of brick sorts must be an integer"))?;

    if count < MIN_COUNT_OF_BRICKS_SORTS {
        return Err(malformed(
            line_number,
            format!("count of brick sorts must be at least {MIN_COUNT_OF_BRICKS_SORTS}"),
        ));
    }

    Ok(count as usize)
}

/// Read exactly `sort_count` inventory lines, then require that no content follows
///
/// # Errors
///
/// Returns [`WallError::MalformedInput`] for a missing line, a line that is
/// not two space-separated tokens, or values that are not integers in range;
/// [`WallError::DuplicateBrickLength`] for a repeated length; and
/// [`WallError::TooManyInventoryLines`] if non-empty input remains
pub fn parse_inventory<R: BufRead>(
    reader: &mut LineReader<R>,
    sort_count: usize,
) -> Result<BrickInventory> {
    let mut inventory = BrickInventory::default();

    for _ in 0..sort_count {
        let line = reader.require_line("a brick length and count")?;
        let line_number = reader.line_number();

        let (length_token, count_token) = split_pair(&line).ok_or_else(|| {
            malformed(
                line_number,
                "each line must contain two positive integers separated by a single space",
            )
        })?;

        // Non-numeric and out-of-range values share one message
        let sort = parse_integer(length_token)
            .zip(parse_integer(count_token))
            .and_then(|(length, count)| BrickSort::new(length, count))
            .ok_or_else(|| {
                malformed(
                    line_number,
                    format!(
                        "each line must contain two positive integers, \
                         brick length from {MIN_BRICK_LENGTH} to {MAX_BRICK_LENGTH}"
                    ),
                )
            })?;

        inventory.insert(sort, line_number)?;
    }

    if let Some(line) = reader.find_remaining_content()? {
        return Err(WallError::TooManyInventoryLines {
            line,
            declared: sort_count,
        });
    }

    Ok(inventory)
}
