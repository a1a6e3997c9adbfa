//! The hand-tuned district recipe
//!
//! Three streets cross three avenues on a 48×48 grid, leaving sixteen blocks of open
//! ground. The block between the middle and last street and avenue becomes the park. A few catalog entries
//! overlap earlier ones on purpose and are dropped by validation at compose time, so
//! entry order must be preserved.

use crate::recipe::records::{BuildingSpec, ParkSpec, Recipe, Side, StatueSpec, TreeLine};
use crate::spatial::Facing;

/// Street tree variants, chosen uniformly
pub const TREE_VARIANTS: [&str; 4] = ["tree-oak", "tree-maple", "tree-pine", "tree-birch"];

/// Bench variants, chosen uniformly
pub const BENCH_VARIANTS: [&str; 2] = ["bench-wood", "bench-metal"];

/// Structure identifier of the park fountain
pub const FOUNTAIN_ID: &str = "fountain";

/// Structure identifier of flower bushes
pub const FLOWER_ID: &str = "flower-bush";

/// First row of each horizontal street band
pub const STREETS: [i32; 3] = [4, 20, 36];

/// First column of each vertical avenue band
pub const AVENUES: [i32; 3] = [4, 20, 36];

const fn building(
    id: &'static str,
    x: i32,
    y: i32,
    width: usize,
    height: usize,
    facing: Facing,
) -> BuildingSpec {
    BuildingSpec {
        id,
        x,
        y,
        width,
        height,
        facing,
    }
}

/// Building catalog in placement order
pub const BUILDINGS: [BuildingSpec; 31] = [
    // Block between avenues 4 and 20, streets 4 and 20
    building("brick-rowhouse", 8, 8, 3, 3, Facing::Up),
    building("corner-deli", 12, 8, 2, 2, Facing::Up),
    building("townhouse-red", 15, 8, 2, 3, Facing::Up),
    building("townhouse-blue", 17, 8, 2, 3, Facing::Up),
    building("cafe", 16, 8, 2, 2, Facing::Up),
    building("laundromat", 8, 16, 3, 4, Facing::Down),
    building("pace-capital", 12, 16, 2, 2, Facing::Down),
    building("bookstore", 15, 17, 3, 3, Facing::Down),
    // Block between avenues 20 and 36, streets 4 and 20
    building("glass-tower", 24, 8, 4, 4, Facing::Up),
    building("post-office", 29, 8, 3, 3, Facing::Up),
    building("fire-station", 29, 10, 3, 3, Facing::Up),
    building("pharmacy", 33, 8, 3, 2, Facing::Up),
    building("apartment-block", 24, 15, 4, 5, Facing::Down),
    building("bodega", 30, 17, 2, 3, Facing::Down),
    // East edge, streets 4 and 20
    building("warehouse", 41, 9, 5, 4, Facing::Up),
    building("brick-rowhouse", 41, 15, 3, 3, Facing::Down),
    building("corner-deli", 45, 16, 2, 2, Facing::Down),
    // Block between avenues 4 and 20, streets 20 and 36
    building("fire-station", 8, 24, 4, 4, Facing::Left),
    building("townhouse-red", 8, 30, 2, 3, Facing::Left),
    building("townhouse-blue", 8, 33, 2, 3, Facing::Left),
    building("parking-garage", 14, 26, 5, 6, Facing::Right),
    building("corner-deli", 15, 30, 2, 2, Facing::Right),
    // East edge, streets 20 and 36
    building("apartment-block", 41, 25, 4, 5, Facing::Left),
    building("cafe", 45, 31, 2, 2, Facing::Down),
    // South edge
    building("glass-tower", 9, 41, 4, 4, Facing::Up),
    building("pharmacy", 15, 41, 3, 2, Facing::Up),
    building("post-office", 25, 41, 3, 3, Facing::Up),
    building("laundromat", 30, 41, 3, 3, Facing::Up),
    building("bookstore", 30, 42, 2, 2, Facing::Up),
    building("warehouse", 41, 41, 5, 4, Facing::Up),
    building("cafe", 45, 44, 2, 2, Facing::Up),
];

/// Street tree lines
pub const TREE_LINES: [TreeLine; 12] = [
    TreeLine::Street { y: 4, side: Side::North },
    TreeLine::Street { y: 4, side: Side::South },
    TreeLine::Street { y: 20, side: Side::North },
    TreeLine::Street { y: 20, side: Side::South },
    TreeLine::Street { y: 36, side: Side::North },
    TreeLine::Street { y: 36, side: Side::South },
    TreeLine::Avenue { x: 4, side: Side::West },
    TreeLine::Avenue { x: 4, side: Side::East },
    TreeLine::Avenue { x: 20, side: Side::West },
    TreeLine::Avenue { x: 20, side: Side::East },
    TreeLine::Avenue { x: 36, side: Side::West },
    TreeLine::Avenue { x: 36, side: Side::East },
];

/// Bench positions, on sidewalk cells between tree stops
pub const BENCHES: [[i32; 2]; 10] = [
    [11, 4],
    [15, 7],
    [27, 20],
    [31, 23],
    [4, 13],
    [7, 29],
    [20, 11],
    [23, 31],
    [43, 36],
    [13, 39],
];

/// The district park
pub const PARK: ParkSpec = ParkSpec {
    x: 24,
    y: 24,
    width: 12,
    height: 12,
};

/// Statue catalog in placement order
pub const STATUES: [StatueSpec; 5] = [
    StatueSpec { id: "statue-founder", x: 2, y: 10 },
    StatueSpec { id: "statue-founder", x: 2, y: 26 },
    StatueSpec { id: "statue-angel", x: 12, y: 12 },
    StatueSpec { id: "statue-angel", x: 24, y: 9 },
    StatueSpec { id: "statue-angel", x: 44, y: 20 },
];

/// Flower bush positions
pub const FLOWERS: [[i32; 2]; 16] = [
    [1, 1],
    [2, 1],
    [1, 2],
    [10, 1],
    [14, 1],
    [26, 1],
    [30, 1],
    [42, 1],
    [46, 1],
    [1, 14],
    [1, 30],
    [1, 42],
    [13, 13],
    [2, 10],
    [20, 13],
    [46, 46],
];

impl Recipe {
    /// The built-in district recipe
    pub const fn district() -> Self {
        Self {
            streets: &STREETS,
            avenues: &AVENUES,
            buildings: &BUILDINGS,
            tree_lines: &TREE_LINES,
            benches: &BENCHES,
            park: Some(PARK),
            statues: &STATUES,
            flowers: &FLOWERS,
        }
    }
}
