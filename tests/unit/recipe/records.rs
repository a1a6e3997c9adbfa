//! Tests for recipe records and literal catalog validation

#[cfg(test)]
mod tests {
    use tilecity::GenerationError;
    use tilecity::recipe::records::MIN_PARK_SIDE;
    use tilecity::recipe::{BuildingSpec, ParkSpec, Recipe, Side, StatueSpec, TreeLine};
    use tilecity::spatial::Facing;

    fn rejected_entry(recipe: &Recipe) -> Option<String> {
        match recipe.validate(16, 16) {
            Err(GenerationError::InvalidRecipe { entry, .. }) => Some(entry),
            _ => None,
        }
    }

    // Tests side offsets select the outer sidewalk rows of a band
    // Verified by returning the band width for south
    #[test]
    fn test_side_offsets() {
        assert_eq!(Side::North.offset(), 0);
        assert_eq!(Side::West.offset(), 0);
        assert_eq!(Side::South.offset(), 3);
        assert_eq!(Side::East.offset(), 3);
        assert!(Side::North.is_horizontal());
        assert!(!Side::East.is_horizontal());
    }

    // Tests the empty recipe is valid on any grid
    // Verified by requiring at least one street
    #[test]
    fn test_empty_recipe_is_valid() {
        assert!(Recipe::EMPTY.validate(1, 1).is_ok());
    }

    // Tests a footprint past the grid edge is reported with its id
    // Verified by comparing against width instead of width minus footprint
    #[test]
    fn test_building_outside_grid_is_rejected() {
        const BUILDINGS: [BuildingSpec; 2] = [
            BuildingSpec {
                id: "cafe",
                x: 0,
                y: 0,
                width: 2,
                height: 2,
                facing: Facing::Down,
            },
            BuildingSpec {
                id: "warehouse",
                x: 13,
                y: 0,
                width: 4,
                height: 2,
                facing: Facing::Down,
            },
        ];
        let recipe = Recipe {
            buildings: &BUILDINGS,
            ..Recipe::EMPTY
        };

        assert_eq!(rejected_entry(&recipe).as_deref(), Some("warehouse (13, 0)"));
    }

    // Tests empty footprints are malformed
    // Verified by dropping the zero-size check
    #[test]
    fn test_empty_footprint_is_rejected() {
        const BUILDINGS: [BuildingSpec; 1] = [BuildingSpec {
            id: "kiosk",
            x: 1,
            y: 1,
            width: 0,
            height: 2,
            facing: Facing::Down,
        }];
        let recipe = Recipe {
            buildings: &BUILDINGS,
            ..Recipe::EMPTY
        };

        assert_eq!(rejected_entry(&recipe).as_deref(), Some("kiosk"));
    }

    // Tests bands must fit: a street starting three rows from the bottom does not
    // Verified by checking only the first row of the band
    #[test]
    fn test_road_band_must_fit() {
        let street = Recipe {
            streets: &[13],
            ..Recipe::EMPTY
        };
        let avenue = Recipe {
            avenues: &[-1],
            ..Recipe::EMPTY
        };

        assert_eq!(rejected_entry(&street).as_deref(), Some("street 13"));
        assert_eq!(rejected_entry(&avenue).as_deref(), Some("avenue -1"));
        assert!(Recipe { streets: &[12], ..Recipe::EMPTY }.validate(16, 16).is_ok());
    }

    // Tests tree lines need a side matching their orientation
    // Verified by accepting any side
    #[test]
    fn test_tree_line_side_must_match_orientation() {
        let recipe = Recipe {
            tree_lines: &[TreeLine::Avenue { x: 4, side: Side::North }],
            ..Recipe::EMPTY
        };

        assert_eq!(rejected_entry(&recipe).as_deref(), Some("tree line 4"));
    }

    // Tests parks below the minimum side are rejected
    // Verified by lowering the minimum to four
    #[test]
    fn test_small_park_is_rejected() {
        let recipe = Recipe {
            park: Some(ParkSpec {
                x: 0,
                y: 0,
                width: MIN_PARK_SIDE - 1,
                height: 8,
            }),
            ..Recipe::EMPTY
        };

        assert_eq!(rejected_entry(&recipe).as_deref(), Some("park"));
    }

    // Tests statues account for their two-row footprint
    // Verified by validating statues as single cells
    #[test]
    fn test_statue_footprint_must_fit() {
        let recipe = Recipe {
            statues: &[StatueSpec {
                id: "statue-angel",
                x: 3,
                y: 15,
            }],
            ..Recipe::EMPTY
        };

        assert_eq!(rejected_entry(&recipe).as_deref(), Some("statue-angel (3, 15)"));
    }

    // Tests single-cell positions are bounds checked
    // Verified by skipping flower validation
    #[test]
    fn test_prop_positions_must_be_in_grid() {
        let benches = Recipe {
            benches: &[[16, 0]],
            ..Recipe::EMPTY
        };
        let flowers = Recipe {
            flowers: &[[0, -1]],
            ..Recipe::EMPTY
        };

        assert_eq!(rejected_entry(&benches).as_deref(), Some("bench (16, 0)"));
        assert_eq!(rejected_entry(&flowers).as_deref(), Some("flower (0, -1)"));
    }
}
