//! Multi-cell building placement

use crate::spatial::{Facing, Grid, TileType};

/// Input to a single building placement
///
/// Exists only for the duration of the call that consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementRequest<'a> {
    /// Structure identifier written to every covered cell
    pub id: &'a str,
    /// Anchor column
    pub x: i32,
    /// Anchor row
    pub y: i32,
    /// Footprint width in cells
    pub width: usize,
    /// Footprint height in cells
    pub height: usize,
    /// Direction the building faces
    pub facing: Facing,
}

impl PlacementRequest<'_> {
    /// Write this request onto the grid, see [`place`]
    pub fn apply(&self, grid: &mut Grid) {
        place(grid, self.x, self.y, self.width, self.height, self.id, self.facing);
    }
}

/// Stamp a `w × h` building footprint anchored at `(x, y)`
///
/// Every in-bounds cell becomes building surface referencing the anchor and `id`; only
/// the anchor itself is flagged as origin. Does not validate: whatever was underneath is
/// overwritten, so callers run [`crate::placement::validator::can_place`] first.
pub fn place(grid: &mut Grid, x: i32, y: i32, w: usize, h: usize, id: &str, facing: Facing) {
    for dy in 0..h as i32 {
        for dx in 0..w as i32 {
            if let Some(cell) = grid.get_mut(x + dx, y + dy) {
                cell.tile_type = TileType::Building;
                cell.is_origin = dx == 0 && dy == 0;
                cell.origin_x = x;
                cell.origin_y = y;
                cell.structure_id = Some(id.to_owned());
                cell.facing = facing;
                cell.underlying_type = None;
            }
        }
    }
}
