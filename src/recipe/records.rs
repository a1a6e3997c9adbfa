//! Record types describing a district layout recipe

use crate::io::configuration::SEGMENT_SIZE;
use crate::io::error::{GenerationError, Result};
use crate::spatial::Facing;

/// Side of a road band that a line of street trees follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Upper sidewalk of a horizontal street
    North,
    /// Lower sidewalk of a horizontal street
    South,
    /// Right sidewalk of a vertical avenue
    East,
    /// Left sidewalk of a vertical avenue
    West,
}

impl Side {
    /// Offset into the road band selecting this side's sidewalk
    pub const fn offset(self) -> i32 {
        match self {
            Self::North | Self::West => 0,
            Self::South | Self::East => SEGMENT_SIZE as i32 - 1,
        }
    }

    /// Whether this side belongs to a horizontal street
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::North | Self::South)
    }
}

/// A row or column of street trees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeLine {
    /// Along a horizontal street whose band starts at row `y`
    Street {
        /// First row of the street band
        y: i32,
        /// `North` or `South`
        side: Side,
    },
    /// Along a vertical avenue whose band starts at column `x`
    Avenue {
        /// First column of the avenue band
        x: i32,
        /// `East` or `West`
        side: Side,
    },
}

/// One entry of the building catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildingSpec {
    /// Structure identifier
    pub id: &'static str,
    /// Anchor column
    pub x: i32,
    /// Anchor row
    pub y: i32,
    /// Footprint width
    pub width: usize,
    /// Footprint height
    pub height: usize,
    /// Direction the building faces
    pub facing: Facing,
}

/// A statue position; statues occupy a 1×2 footprint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatueSpec {
    /// Structure identifier
    pub id: &'static str,
    /// Anchor column
    pub x: i32,
    /// Anchor row
    pub y: i32,
}

/// Rectangle converted into a paved park
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParkSpec {
    /// Left column
    pub x: i32,
    /// Top row
    pub y: i32,
    /// Width in cells
    pub width: usize,
    /// Height in cells
    pub height: usize,
}

/// Complete layout recipe consumed by the city composer
///
/// Catalog order is significant: overlapping buildings and statues are resolved by
/// whichever entry comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipe {
    /// First row of each horizontal street band
    pub streets: &'static [i32],
    /// First column of each vertical avenue band
    pub avenues: &'static [i32],
    /// Building catalog in placement order
    pub buildings: &'static [BuildingSpec],
    /// Street tree lines
    pub tree_lines: &'static [TreeLine],
    /// Bench positions
    pub benches: &'static [[i32; 2]],
    /// Park rectangle, if the district has one
    pub park: Option<ParkSpec>,
    /// Statue catalog in placement order
    pub statues: &'static [StatueSpec],
    /// Flower bush positions
    pub flowers: &'static [[i32; 2]],
}

/// Smallest park side that fits a centred fountain clear of the inset corners
pub const MIN_PARK_SIDE: usize = 6;

impl Recipe {
    /// Recipe with no entries
    pub const EMPTY: Self = Self {
        streets: &[],
        avenues: &[],
        buildings: &[],
        tree_lines: &[],
        benches: &[],
        park: None,
        statues: &[],
        flowers: &[],
    };

    /// Check every literal entry against a `width × height` grid
    ///
    /// Overlaps between entries are not defects; only entries that reach outside the grid
    /// or are malformed are reported.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidRecipe`] describing the first defective entry
    pub fn validate(&self, width: usize, height: usize) -> Result<()> {
        let band = SEGMENT_SIZE;

        for &y in self.streets {
            ensure_rect("street", y, 0, y, width, band, width, height)?;
        }
        for &x in self.avenues {
            ensure_rect("avenue", x, x, 0, band, height, width, height)?;
        }
        for building in self.buildings {
            if building.width == 0 || building.height == 0 {
                return Err(invalid(building.id, "footprint is empty"));
            }
            ensure_rect(
                building.id,
                format!("({}, {})", building.x, building.y),
                building.x,
                building.y,
                building.width,
                building.height,
                width,
                height,
            )?;
        }
        for line in self.tree_lines {
            match *line {
                TreeLine::Street { y, side } => {
                    if !side.is_horizontal() {
                        return Err(invalid(
                            format!("tree line {y}"),
                            "street trees need north or south",
                        ));
                    }
                    ensure_rect("tree line", y, 0, y, width, band, width, height)?;
                }
                TreeLine::Avenue { x, side } => {
                    if side.is_horizontal() {
                        return Err(invalid(
                            format!("tree line {x}"),
                            "avenue trees need east or west",
                        ));
                    }
                    ensure_rect("tree line", x, x, 0, band, height, width, height)?;
                }
            }
        }
        for &[x, y] in self.benches {
            ensure_rect("bench", format!("({x}, {y})"), x, y, 1, 1, width, height)?;
        }
        if let Some(park) = self.park {
            if park.width < MIN_PARK_SIDE || park.height < MIN_PARK_SIDE {
                return Err(invalid(
                    "park",
                    format!("must be at least {MIN_PARK_SIDE}x{MIN_PARK_SIDE}"),
                ));
            }
            ensure_rect(
                "park",
                "rectangle",
                park.x,
                park.y,
                park.width,
                park.height,
                width,
                height,
            )?;
        }
        for statue in self.statues {
            ensure_rect(
                statue.id,
                format!("({}, {})", statue.x, statue.y),
                statue.x,
                statue.y,
                1,
                2,
                width,
                height,
            )?;
        }
        for &[x, y] in self.flowers {
            ensure_rect("flower", format!("({x}, {y})"), x, y, 1, 1, width, height)?;
        }

        Ok(())
    }
}

fn invalid(entry: impl ToString, reason: impl ToString) -> GenerationError {
    GenerationError::InvalidRecipe {
        entry: entry.to_string(),
        reason: reason.to_string(),
    }
}

fn ensure_rect(
    kind: &str,
    label: impl std::fmt::Display,
    x: i32,
    y: i32,
    w: usize,
    h: usize,
    width: usize,
    height: usize,
) -> Result<()> {
    let fits = x >= 0 && y >= 0 && x as usize + w <= width && y as usize + h <= height;
    if fits {
        Ok(())
    } else {
        Err(invalid(
            format!("{kind} {label}"),
            format!("{w}x{h} footprint at ({x}, {y}) exceeds {width}x{height} grid"),
        ))
    }
}
