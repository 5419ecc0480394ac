//! Spatial data structures for the wall
//!
//! This module contains:
//! - Wall dimension parsing
//! - The tri-state shape matrix and its parser

/// Wall width and height
pub mod dimensions;
/// Shape matrix and cell states
pub mod shape;

pub use dimensions::WallDimensions;
pub use shape::{Cell, WallShape};
