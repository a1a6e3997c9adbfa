//! Spatial data structures for the district grid
//!
//! This module contains:
//! - Cell records with ground classification and structure metadata
//! - The fixed-size grid store

/// Cell records, tile types and facings
pub mod cell;
/// Grid storage with bounds-tolerant access
pub mod grid;

pub use cell::{Cell, Facing, TileType};
pub use grid::Grid;
