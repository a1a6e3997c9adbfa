//! Tests for park composition

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tilecity::generation::park::{compose, fountain_anchor, inset_corners, tree_target};
    use tilecity::placement::building;
    use tilecity::recipe::ParkSpec;
    use tilecity::recipe::catalog::{BENCH_VARIANTS, FOUNTAIN_ID, TREE_VARIANTS};
    use tilecity::spatial::{Cell, Facing, Grid, TileType};

    const SIX: ParkSpec = ParkSpec {
        x: 5,
        y: 3,
        width: 6,
        height: 6,
    };

    fn in_park(cell: &Cell, park: &ParkSpec) -> bool {
        cell.x >= park.x
            && cell.y >= park.y
            && cell.x < park.x + park.width as i32
            && cell.y < park.y + park.height as i32
    }

    // Tests park geometry helpers for a 6×6 rectangle
    // Verified by omitting the half-fountain shift
    #[test]
    fn test_geometry_of_six_by_six_park() {
        assert_eq!(fountain_anchor(&SIX), [7, 5]);
        assert_eq!(inset_corners(&SIX), [[6, 4], [9, 4], [6, 7], [9, 7]]);
        assert_eq!(tree_target(&SIX), 4);
    }

    // Tests a grass park always gets its fountain and bounded decoration
    // Verified by validating the fountain against grass after paving
    #[test]
    fn test_six_by_six_park_on_grass() {
        for seed in 0..32 {
            let mut grid = Grid::new(16, 12);
            let mut rng = StdRng::seed_from_u64(seed);

            let report = compose(&mut grid, &SIX, &mut rng);

            assert_eq!(report.paved, 36);
            assert!(report.fountain);
            assert_eq!(report.benches, 4);
            assert_eq!(report.tree_attempts, 4);
            assert!(report.trees <= 4);

            let fountain = grid.count_where(|cell| cell.structure_id.as_deref() == Some(FOUNTAIN_ID));
            assert_eq!(fountain, 4);
            assert!(grid.get(7, 5).is_some_and(|cell| cell.is_origin));

            let props = grid.count_where(|cell| in_park(cell, &SIX) && cell.has_prop());
            assert_eq!(props, 4 + report.trees);
            assert!(props + fountain <= 4 + 4 + 4);

            assert_eq!(grid.count_where(|cell| !in_park(cell, &SIX) && cell.tile_type != TileType::Grass), 0);
        }
    }

    // Tests scattered trees stay inside the inset interior on free pavement
    // Verified by sampling the full rectangle including the border
    #[test]
    fn test_park_trees_land_on_interior_pavement() {
        let park = ParkSpec {
            x: 0,
            y: 0,
            width: 12,
            height: 10,
        };
        let mut grid = Grid::new(12, 10);
        let mut rng = StdRng::seed_from_u64(11);

        let report = compose(&mut grid, &park, &mut rng);

        assert_eq!(report.tree_attempts, 15);
        let trees: Vec<_> = grid
            .cells()
            .filter(|cell| cell.structure_id.as_deref().is_some_and(|id| TREE_VARIANTS.contains(&id)))
            .collect();
        assert_eq!(trees.len(), report.trees);
        for tree in trees {
            assert!(tree.x >= 1 && tree.x <= 10 && tree.y >= 1 && tree.y <= 8);
            assert_eq!(tree.tile_type, TileType::Pavement);
            assert_eq!(tree.underlying_type, Some(TileType::Pavement));
        }
    }

    // Tests only grass is paved and a blocked centre drops the fountain
    // Verified by paving every cell regardless of ground
    #[test]
    fn test_existing_structures_survive_and_block_fountain() {
        let mut grid = Grid::new(8, 8);
        building::place(&mut grid, 3, 3, 1, 1, "statue-angel", Facing::Down);
        let park = ParkSpec {
            x: 1,
            y: 1,
            width: 6,
            height: 6,
        };
        let mut rng = StdRng::seed_from_u64(3);

        let report = compose(&mut grid, &park, &mut rng);

        assert_eq!(report.paved, 35);
        assert!(!report.fountain);
        assert!(grid.get(3, 3).is_some_and(|cell| cell.structure_id.as_deref() == Some("statue-angel")));
        assert_eq!(grid.count_where(|cell| cell.structure_id.as_deref() == Some(FOUNTAIN_ID)), 0);
    }

    // Tests corner benches are overlaid without an occupancy check
    // Verified by skipping occupied corners
    #[test]
    fn test_corner_benches_are_unconditional() {
        let mut grid = Grid::new(8, 8);
        building::place(&mut grid, 1, 1, 1, 1, "statue-founder", Facing::Down);
        let park = ParkSpec {
            x: 0,
            y: 0,
            width: 6,
            height: 6,
        };
        let mut rng = StdRng::seed_from_u64(9);

        let report = compose(&mut grid, &park, &mut rng);

        assert_eq!(report.benches, 4);
        for [x, y] in inset_corners(&park) {
            assert!(grid.get(x, y).is_some_and(|cell| cell
                .structure_id
                .as_deref()
                .is_some_and(|id| BENCH_VARIANTS.contains(&id))));
        }
        assert!(grid.get(1, 1).is_some_and(|cell| cell.tile_type == TileType::Building
            && cell.underlying_type == Some(TileType::Building)));
    }
}
