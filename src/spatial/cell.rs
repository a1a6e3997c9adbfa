//! Tile cells, ground classifications and structure facing

use serde::Serialize;

/// Ground classification of a single tile
///
/// Serialized with the snake-case names the rendering client keys its tile sprites on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TileType {
    /// Open ground, the only classification buildings may be placed on
    #[default]
    Grass,
    /// Pedestrian street surface (sidewalks and road corners)
    Sidewalk,
    /// Drivable lanes
    Road,
    /// Paved plaza ground, produced by the park composer
    Pavement,
    /// Snow-covered ground
    Snow,
    /// Part of a building footprint
    Building,
}

impl TileType {
    /// Snake-case name as it appears in the output document
    pub const fn name(self) -> &'static str {
        match self {
            Self::Grass => "grass",
            Self::Sidewalk => "sidewalk",
            Self::Road => "road",
            Self::Pavement => "pavement",
            Self::Snow => "snow",
            Self::Building => "building",
        }
    }
}

/// Cardinal direction a structure faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    /// Towards decreasing `y`
    Up,
    /// Towards increasing `y`
    #[default]
    Down,
    /// Towards decreasing `x`
    Left,
    /// Towards increasing `x`
    Right,
}

/// One tile of the district grid
///
/// Every cell is created once by [`crate::spatial::Grid::new`] and afterwards only
/// overwritten in place. Multi-cell buildings share `origin` and `structure_id` across
/// their footprint, with `is_origin` set on the anchor cell only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    /// Column of this cell
    pub x: i32,
    /// Row of this cell
    pub y: i32,
    /// Displayed ground classification
    #[serde(rename = "type")]
    pub tile_type: TileType,
    /// Whether this cell anchors its structure
    pub is_origin: bool,
    /// Column of the anchor cell
    pub origin_x: i32,
    /// Row of the anchor cell
    pub origin_y: i32,
    /// Building or prop instance occupying this cell
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structure_id: Option<String>,
    /// Direction the occupying structure faces
    pub facing: Facing,
    /// Ground classification captured when a prop was overlaid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underlying_type: Option<TileType>,
}

impl Cell {
    /// Fresh open-ground cell anchored on itself
    pub const fn grass(x: i32, y: i32) -> Self {
        Self::with_type(x, y, TileType::Grass)
    }

    /// Fresh self-anchored cell with the given ground classification
    pub const fn with_type(x: i32, y: i32, tile_type: TileType) -> Self {
        Self {
            x,
            y,
            tile_type,
            is_origin: true,
            origin_x: x,
            origin_y: y,
            structure_id: None,
            facing: Facing::Down,
            underlying_type: None,
        }
    }

    /// Whether a building or prop occupies this cell
    pub const fn is_occupied(&self) -> bool {
        self.structure_id.is_some()
    }

    /// Whether a prop is overlaid on this cell
    pub const fn has_prop(&self) -> bool {
        self.underlying_type.is_some()
    }

    /// Ground truth beneath any overlaid prop
    pub fn ground(&self) -> TileType {
        self.underlying_type.unwrap_or(self.tile_type)
    }

    /// Anchor coordinates of the structure this cell belongs to
    pub const fn origin(&self) -> [i32; 2] {
        [self.origin_x, self.origin_y]
    }
}
