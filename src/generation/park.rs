//! Park composer: paved plaza with a fountain, corner benches and scattered trees

use rand::Rng;

use crate::generation::decoration::{is_free, pick};
use crate::io::configuration::{FOUNTAIN_SIZE, PARK_TREE_DENSITY};
use crate::placement::{building, can_place_on, prop};
use crate::recipe::catalog::{BENCH_VARIANTS, FOUNTAIN_ID, TREE_VARIANTS};
use crate::recipe::records::ParkSpec;
use crate::spatial::{Facing, Grid, TileType};

/// What the park composer placed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParkReport {
    /// Grass cells converted to pavement
    pub paved: usize,
    /// Whether the fountain fit
    pub fountain: bool,
    /// Corner benches overlaid
    pub benches: usize,
    /// Trees that landed on free pavement
    pub trees: usize,
    /// Tree attempts made, accepted or not
    pub tree_attempts: usize,
}

/// Anchor of the fountain centred in `park`
pub const fn fountain_anchor(park: &ParkSpec) -> [i32; 2] {
    let half = FOUNTAIN_SIZE as i32 / 2;
    [
        park.x + park.width as i32 / 2 - half,
        park.y + park.height as i32 / 2 - half,
    ]
}

/// The four corners inset one cell from the park edge
pub const fn inset_corners(park: &ParkSpec) -> [[i32; 2]; 4] {
    let left = park.x + 1;
    let top = park.y + 1;
    let right = park.x + park.width as i32 - 2;
    let bottom = park.y + park.height as i32 - 2;
    [[left, top], [right, top], [left, bottom], [right, bottom]]
}

/// Number of scattered tree attempts for a park
pub const fn tree_target(park: &ParkSpec) -> usize {
    park.width * park.height / PARK_TREE_DENSITY
}

/// Turn `park` into a paved plaza
///
/// Grass inside the rectangle is paved, then the fountain is validated against pavement
/// and placed. Corner benches go down without an occupancy check. Finally
/// `width * height / 8` random interior positions each receive a tree if still free
/// pavement; rejected attempts are not retried.
pub fn compose<R: Rng + ?Sized>(grid: &mut Grid, park: &ParkSpec, rng: &mut R) -> ParkReport {
    let mut report = ParkReport::default();

    for y in park.y..park.y + park.height as i32 {
        for x in park.x..park.x + park.width as i32 {
            if let Some(cell) = grid.get_mut(x, y) {
                if cell.tile_type == TileType::Grass {
                    cell.tile_type = TileType::Pavement;
                    report.paved += 1;
                }
            }
        }
    }

    let [fx, fy] = fountain_anchor(park);
    if can_place_on(grid, fx, fy, FOUNTAIN_SIZE, FOUNTAIN_SIZE, TileType::Pavement) {
        building::place(
            grid,
            fx,
            fy,
            FOUNTAIN_SIZE,
            FOUNTAIN_SIZE,
            FOUNTAIN_ID,
            Facing::default(),
        );
        report.fountain = true;
    }

    for [x, y] in inset_corners(park) {
        if let Some(bench) = pick(&BENCH_VARIANTS, rng) {
            prop::place(grid, x, y, bench);
            report.benches += 1;
        }
    }

    let interior_x = park.x + 1..park.x + park.width as i32 - 1;
    let interior_y = park.y + 1..park.y + park.height as i32 - 1;
    if interior_x.is_empty() || interior_y.is_empty() {
        return report;
    }
    for _ in 0..tree_target(park) {
        report.tree_attempts += 1;
        let x = rng.random_range(interior_x.clone());
        let y = rng.random_range(interior_y.clone());
        if !is_free(grid, x, y, TileType::Pavement) {
            continue;
        }
        if let Some(tree) = pick(&TREE_VARIANTS, rng) {
            prop::place(grid, x, y, tree);
            report.trees += 1;
        }
    }

    report
}
