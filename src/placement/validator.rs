//! Footprint clearance checks run immediately before a placement

use crate::spatial::{Grid, TileType};

/// Whether a `w × h` footprint anchored at `(x, y)` is entirely open ground
///
/// Returns false if any covered cell lies outside the grid or is anything other than
/// grass.
pub fn can_place(grid: &Grid, x: i32, y: i32, w: usize, h: usize) -> bool {
    can_place_on(grid, x, y, w, h, TileType::Grass)
}

/// Whether a footprint is entirely in bounds and of the given ground type
///
/// Only the displayed ground type is consulted, so a prop overlaid on matching ground
/// does not block the footprint. The park composer uses this with
/// [`TileType::Pavement`] after converting its grass.
pub fn can_place_on(grid: &Grid, x: i32, y: i32, w: usize, h: usize, ground: TileType) -> bool {
    (0..h as i32).all(|dy| (0..w as i32).all(|dx| grid.tile_type(x + dx, y + dy) == Some(ground)))
}
