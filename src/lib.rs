//! Greedy feasibility check for building a brick wall from a brick inventory
//!
//! A wall description gives the wall's shape as a '0'/'1' matrix and the
//! available bricks as (length, count) pairs. The filler lays bricks greedily,
//! longest length first, and reports whether every required cell was covered.

#![forbid(unsafe_code)]

/// Greedy filling and its verdict
pub mod algorithm;
/// Brick inventory parsing and storage
pub mod bricks;
/// Input/output operations, configuration constants and error handling
pub mod io;
/// Wall dimensions and shape matrix
pub mod spatial;

pub use algorithm::filler::{FillReport, fill, is_constructible};
pub use algorithm::verdict::Verdict;
pub use io::error::{Result, WallError};
pub use io::input::WallInput;
