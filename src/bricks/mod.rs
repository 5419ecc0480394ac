//! Brick inventory
//!
//! Parses the sort count and the per-length lines of a wall description into
//! an inventory ordered by descending brick length.

/// Inventory parsing and the length-ordered inventory type
pub mod inventory;

pub use inventory::{BrickInventory, BrickSort};
