//! Greedy wall filling
//!
//! Each brick length is processed once, longest first. For a length `L` the
//! wall is scanned row by row, left to right, tracking the current run of
//! consecutive cells that still need a brick. As soon as a run reaches `L`
//! cells and bricks of that length remain, the run is covered and closed.
//! Empty or already filled cells and row ends close the run without placing.
//! There is no lookahead and no backtracking, so a wall that some other order
//! could cover may still be reported as infeasible.

use ndarray::Array2;
use tracing::{debug, trace};

use crate::algorithm::verdict::Verdict;
use crate::bricks::inventory::BrickInventory;
use crate::spatial::shape::{Cell, WallShape};

/// Bricks of one length used during a fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Brick length in cells
    pub length: u8,
    /// Bricks of this length in the inventory
    pub available: u32,
    /// Bricks actually laid
    pub placed: u32,
}

impl Placement {
    /// Bricks of this length that found no place
    pub const fn left_over(&self) -> u32 {
        self.available - self.placed
    }
}

/// Summary of a completed fill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillReport {
    /// One entry per inventory sort, longest first
    pub placements: Vec<Placement>,
    /// Cells still needing a brick after every length was processed
    pub unfilled_cells: usize,
}

impl FillReport {
    /// Feasible iff nothing is left unfilled
    pub const fn verdict(&self) -> Verdict {
        if self.unfilled_cells == 0 {
            Verdict::Yes
        } else {
            Verdict::No
        }
    }

    /// Total bricks laid across all lengths
    pub fn bricks_placed(&self) -> u64 {
        self.placements
            .iter()
            .map(|placement| u64::from(placement.placed))
            .sum()
    }
}

#[derive(Debug, Clone, Copy)]
struct Run {
    start: usize,
    len: usize,
}

/// Fill `shape` in place from `inventory` and report what was placed
pub fn fill(shape: &mut WallShape, inventory: &BrickInventory) -> FillReport {
    let mut placements = Vec::with_capacity(inventory.len());

    for sort in inventory {
        let placed = place_length(shape.cells_mut(), usize::from(sort.length), sort.count);
        let placement = Placement {
            length: sort.length,
            available: sort.count,
            placed,
        };
        debug!(
            length = placement.length,
            placed = placement.placed,
            left_over = placement.left_over(),
            "processed brick length"
        );
        placements.push(placement);
    }

    let unfilled_cells = shape.needs_brick_count();
    trace!("wall after filling:\n{shape}");

    FillReport {
        placements,
        unfilled_cells,
    }
}

/// Decide feasibility without touching the caller's shape
pub fn is_constructible(shape: &WallShape, inventory: &BrickInventory) -> Verdict {
    let mut working = shape.clone();
    fill(&mut working, inventory).verdict()
}

/// One greedy pass for a single brick length; returns the number of bricks laid
fn place_length(cells: &mut Array2<Cell>, length: usize, available: u32) -> u32 {
    let mut remaining = available;

    for mut row in cells.rows_mut() {
        // Runs never continue across a row boundary
        let mut run: Option<Run> = None;

        for col in 0..row.len() {
            if row.get(col) != Some(&Cell::NeedsBrick) {
                run = None;
                continue;
            }

            let current = run.get_or_insert(Run { start: col, len: 0 });
            current.len += 1;

            // With no supply left the run stays open and keeps growing past `length`
            if current.len == length && remaining > 0 {
                row.iter_mut()
                    .skip(current.start)
                    .take(length)
                    .for_each(|cell| *cell = Cell::Filled);
                run = None;
                remaining -= 1;
            }
        }
    }

    available - remaining
}
