//! City composer: runs every placement pass over one shared grid in a fixed order
//!
//! Later stages read occupancy left by earlier ones (trees skip claimed sidewalk,
//! flowers need still-open grass), so the order below is part of the recipe.

use std::fmt;

use rand::Rng;

use crate::generation::decoration;
use crate::generation::park::{self, ParkReport};
use crate::generation::roads;
use crate::placement::{PlacementRequest, can_place};
use crate::recipe::Recipe;
use crate::spatial::Grid;

/// Composition stages in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Street and avenue segments plus intersections
    Roads,
    /// Building catalog
    Buildings,
    /// Street tree lines
    Trees,
    /// Literal bench positions
    Benches,
    /// Park rectangle
    Park,
    /// Statue catalog
    Statues,
    /// Flower bush positions
    Flowers,
}

impl Stage {
    /// Every stage, in execution order
    pub const ALL: [Self; 7] = [
        Self::Roads,
        Self::Buildings,
        Self::Trees,
        Self::Benches,
        Self::Park,
        Self::Statues,
        Self::Flowers,
    ];

    /// Short lowercase label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Roads => "roads",
            Self::Buildings => "buildings",
            Self::Trees => "trees",
            Self::Benches => "benches",
            Self::Park => "park",
            Self::Statues => "statues",
            Self::Flowers => "flowers",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tally of what each stage placed or dropped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompositionReport {
    /// Road segments stamped, intersections included
    pub road_segments: usize,
    /// Buildings placed, in catalog order
    pub buildings_placed: Vec<&'static str>,
    /// Buildings dropped because their footprint was not clear, in catalog order
    pub buildings_skipped: Vec<&'static str>,
    /// Street trees planted
    pub street_trees: usize,
    /// Benches placed on sidewalks
    pub benches: usize,
    /// Park outcome, if the recipe has a park
    pub park: Option<ParkReport>,
    /// Statues placed, in catalog order
    pub statues_placed: Vec<&'static str>,
    /// Statues dropped, in catalog order
    pub statues_skipped: Vec<&'static str>,
    /// Flower bushes placed
    pub flowers: usize,
}

impl CompositionReport {
    /// Total single-cell props overlaid across all stages
    pub fn props(&self) -> usize {
        let park = self.park.map_or(0, |park| park.benches + park.trees);
        self.street_trees + self.benches + self.flowers + park
    }
}

impl fmt::Display for CompositionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} road segments, {} buildings ({} skipped), {} statues ({} skipped), {} props",
            self.road_segments,
            self.buildings_placed.len(),
            self.buildings_skipped.len(),
            self.statues_placed.len(),
            self.statues_skipped.len(),
            self.props()
        )
    }
}

/// Compose `recipe` onto `grid`
pub fn compose<R: Rng + ?Sized>(grid: &mut Grid, recipe: &Recipe, rng: &mut R) -> CompositionReport {
    compose_with(grid, recipe, rng, |_| {})
}

/// Compose `recipe` onto `grid`, calling `on_stage` as each stage begins
///
/// Buildings and statues whose footprint is not clear are skipped silently and recorded
/// in the report; nothing here fails.
pub fn compose_with<R, F>(
    grid: &mut Grid,
    recipe: &Recipe,
    rng: &mut R,
    mut on_stage: F,
) -> CompositionReport
where
    R: Rng + ?Sized,
    F: FnMut(Stage),
{
    let mut report = CompositionReport::default();

    on_stage(Stage::Roads);
    report.road_segments = roads::build_network(grid, recipe.streets, recipe.avenues);

    on_stage(Stage::Buildings);
    for spec in recipe.buildings {
        if can_place(grid, spec.x, spec.y, spec.width, spec.height) {
            PlacementRequest {
                id: spec.id,
                x: spec.x,
                y: spec.y,
                width: spec.width,
                height: spec.height,
                facing: spec.facing,
            }
            .apply(grid);
            report.buildings_placed.push(spec.id);
        } else {
            report.buildings_skipped.push(spec.id);
        }
    }

    on_stage(Stage::Trees);
    for &line in recipe.tree_lines {
        report.street_trees += decoration::street_trees(grid, line, rng);
    }

    on_stage(Stage::Benches);
    report.benches = decoration::benches(grid, recipe.benches, rng);

    on_stage(Stage::Park);
    report.park = recipe.park.map(|spec| park::compose(grid, &spec, rng));

    on_stage(Stage::Statues);
    let (placed, skipped) = decoration::statues(grid, recipe.statues);
    report.statues_placed = placed;
    report.statues_skipped = skipped;

    on_stage(Stage::Flowers);
    report.flowers = decoration::flowers(grid, recipe.flowers);

    report
}
