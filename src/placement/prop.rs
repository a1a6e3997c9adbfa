//! Single-cell prop overlays
//!
//! A prop sits on top of an existing tile: the displayed ground type is kept and the
//! classification seen at overlay time is recorded in `underlying_type`.

use crate::spatial::{Facing, Grid, TileType};

/// Overlay `prop_id` on the cell at `(x, y)`; no-op outside the grid
///
/// The underlying type is captured fresh from the cell's current ground on every call,
/// so overlaying twice records what the second call saw.
pub fn place(grid: &mut Grid, x: i32, y: i32, prop_id: &str) {
    if let Some(cell) = grid.get_mut(x, y) {
        cell.underlying_type = Some(cell.tile_type);
        cell.structure_id = Some(prop_id.to_owned());
        cell.is_origin = true;
        cell.facing = Facing::default();
    }
}

/// Remove an overlaid prop from `(x, y)`
///
/// Returns the removed prop identifier. Building cells and cells without a prop are left
/// untouched.
pub fn remove(grid: &mut Grid, x: i32, y: i32) -> Option<String> {
    let cell = grid.get_mut(x, y)?;
    if cell.tile_type == TileType::Building || !cell.has_prop() {
        return None;
    }
    cell.underlying_type = None;
    cell.structure_id.take()
}
