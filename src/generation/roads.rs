//! Road network stamping from fixed 4×4 segment patterns

use crate::io::configuration::SEGMENT_SIZE;
use crate::spatial::{Cell, Grid, TileType};

const S: TileType = TileType::Sidewalk;
const R: TileType = TileType::Road;

/// Tile pattern of one road segment, indexed `[row][col]`
pub type SegmentPattern = [[TileType; SEGMENT_SIZE]; SEGMENT_SIZE];

/// Sidewalk ring around a 2×2 drivable core; symmetric, so it serves both orientations
pub const STRAIGHT: SegmentPattern = [[S, S, S, S], [S, R, R, S], [S, R, R, S], [S, S, S, S]];

/// Drivable cross with sidewalk-only corners
pub const INTERSECTION: SegmentPattern = [[S, R, R, S], [R, R, R, R], [R, R, R, R], [S, R, R, S]];

/// Road segment kinds in the pattern catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Straight run of street, horizontal or vertical
    Straight,
    /// Crossing of a street and an avenue
    Intersection,
}

impl SegmentKind {
    /// Tile pattern stamped for this kind
    pub const fn pattern(self) -> &'static SegmentPattern {
        match self {
            Self::Straight => &STRAIGHT,
            Self::Intersection => &INTERSECTION,
        }
    }
}

/// Write a 4×4 pattern with its top-left corner at `(origin_x, origin_y)`
///
/// Cells outside the grid are skipped. Road cells are single-cell units, so each written
/// cell anchors itself.
pub fn place_segment(grid: &mut Grid, origin_x: i32, origin_y: i32, pattern: &SegmentPattern) {
    for (dy, row) in pattern.iter().enumerate() {
        for (dx, &tile_type) in row.iter().enumerate() {
            let x = origin_x + dx as i32;
            let y = origin_y + dy as i32;
            grid.set(x, y, Cell::with_type(x, y, tile_type));
        }
    }
}

/// Lay the full street/avenue network and return the number of segments stamped
///
/// Streets run horizontally at each `y` in `streets`, avenues vertically at each `x` in
/// `avenues`. The two passes leave straight patterns crossing each other, so intersections
/// are stamped last over every (avenue, street) pair to repair the seams.
pub fn build_network(grid: &mut Grid, streets: &[i32], avenues: &[i32]) -> usize {
    let width = grid.width() as i32;
    let height = grid.height() as i32;
    let mut stamped = 0;

    for &y in streets {
        for x in (0..width).step_by(SEGMENT_SIZE) {
            place_segment(grid, x, y, SegmentKind::Straight.pattern());
            stamped += 1;
        }
    }

    for &x in avenues {
        for y in (0..height).step_by(SEGMENT_SIZE) {
            place_segment(grid, x, y, SegmentKind::Straight.pattern());
            stamped += 1;
        }
    }

    for &x in avenues {
        for &y in streets {
            place_segment(grid, x, y, SegmentKind::Intersection.pattern());
            stamped += 1;
        }
    }

    stamped
}
