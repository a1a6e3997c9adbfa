//! Decoration passes: street trees, benches, statues and flower bushes
//!
//! Variant selection draws from the injected RNG; positions never do, so the set of
//! decorated cells is the same for every seed.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::io::configuration::{STATUE_HEIGHT, STATUE_WIDTH, TREE_SPACING};
use crate::placement::{building, can_place, prop};
use crate::recipe::catalog::{BENCH_VARIANTS, FLOWER_ID, TREE_VARIANTS};
use crate::recipe::records::{StatueSpec, TreeLine};
use crate::spatial::{Facing, Grid, TileType};

/// Uniformly chosen variant, `None` only for an empty catalog
pub fn pick<'a, R: Rng + ?Sized>(variants: &[&'a str], rng: &mut R) -> Option<&'a str> {
    variants.choose(rng).copied()
}

/// Whether `(x, y)` is unclaimed ground of the given type
pub fn is_free(grid: &Grid, x: i32, y: i32, ground: TileType) -> bool {
    grid.get(x, y)
        .is_some_and(|cell| cell.tile_type == ground && !cell.is_occupied())
}

/// Plant a line of street trees and return how many were placed
///
/// Walks the chosen sidewalk every other cell along the full grid length, planting on
/// free sidewalk cells only. Intersection lanes and claimed cells are stepped over.
pub fn street_trees<R: Rng + ?Sized>(grid: &mut Grid, line: TreeLine, rng: &mut R) -> usize {
    let stops: Vec<[i32; 2]> = match line {
        TreeLine::Street { y, side } => (0..grid.width() as i32)
            .step_by(TREE_SPACING)
            .map(|x| [x, y + side.offset()])
            .collect(),
        TreeLine::Avenue { x, side } => (0..grid.height() as i32)
            .step_by(TREE_SPACING)
            .map(|y| [x + side.offset(), y])
            .collect(),
    };

    let mut planted = 0;
    for [x, y] in stops {
        if !is_free(grid, x, y, TileType::Sidewalk) {
            continue;
        }
        if let Some(tree) = pick(&TREE_VARIANTS, rng) {
            prop::place(grid, x, y, tree);
            planted += 1;
        }
    }
    planted
}

/// Place benches on free sidewalk cells and return how many were placed
pub fn benches<R: Rng + ?Sized>(grid: &mut Grid, positions: &[[i32; 2]], rng: &mut R) -> usize {
    let mut placed = 0;
    for &[x, y] in positions {
        if !is_free(grid, x, y, TileType::Sidewalk) {
            continue;
        }
        if let Some(bench) = pick(&BENCH_VARIANTS, rng) {
            prop::place(grid, x, y, bench);
            placed += 1;
        }
    }
    placed
}

/// Place statues whose 1×2 footprint is clear
///
/// Returns the identifiers of statues placed and of those rejected, each in catalog order.
pub fn statues(grid: &mut Grid, catalog: &[StatueSpec]) -> (Vec<&'static str>, Vec<&'static str>) {
    let mut placed = Vec::new();
    let mut skipped = Vec::new();
    for statue in catalog {
        if can_place(grid, statue.x, statue.y, STATUE_WIDTH, STATUE_HEIGHT) {
            building::place(
                grid,
                statue.x,
                statue.y,
                STATUE_WIDTH,
                STATUE_HEIGHT,
                statue.id,
                Facing::default(),
            );
            placed.push(statue.id);
        } else {
            skipped.push(statue.id);
        }
    }
    (placed, skipped)
}

/// Overlay flower bushes on free grass and return how many were placed
pub fn flowers(grid: &mut Grid, positions: &[[i32; 2]]) -> usize {
    let mut placed = 0;
    for &[x, y] in positions {
        if is_free(grid, x, y, TileType::Grass) {
            prop::place(grid, x, y, FLOWER_ID);
            placed += 1;
        }
    }
    placed
}
