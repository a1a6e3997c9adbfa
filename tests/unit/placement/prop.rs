//! Tests for single-cell prop overlays

#[cfg(test)]
mod tests {
    use tilecity::placement::{building, prop};
    use tilecity::spatial::{Cell, Facing, Grid, TileType};

    // Tests a prop keeps the displayed ground and records it as underlying
    // Verified by setting tile_type to the prop's ground
    #[test]
    fn test_place_preserves_base_type() {
        let mut grid = Grid::new(4, 4);
        grid.set(1, 1, Cell::with_type(1, 1, TileType::Sidewalk));

        prop::place(&mut grid, 1, 1, "tree-oak");

        assert!(grid.get(1, 1).is_some_and(|cell| {
            cell.tile_type == TileType::Sidewalk
                && cell.underlying_type == Some(TileType::Sidewalk)
                && cell.structure_id.as_deref() == Some("tree-oak")
                && cell.is_origin
                && cell.facing == Facing::Down
        }));
    }

    // Tests a second overlay replaces the id and re-reads the current ground
    // Verified by keeping the first underlying type
    #[test]
    fn test_second_overlay_captures_current_state() {
        let mut grid = Grid::new(4, 4);
        prop::place(&mut grid, 2, 2, "bench-wood");
        if let Some(cell) = grid.get_mut(2, 2) {
            cell.tile_type = TileType::Pavement;
        }

        prop::place(&mut grid, 2, 2, "tree-pine");

        assert!(grid.get(2, 2).is_some_and(|cell| {
            cell.structure_id.as_deref() == Some("tree-pine")
                && cell.underlying_type == Some(TileType::Pavement)
                && cell.tile_type == TileType::Pavement
        }));
    }

    // Tests overlaying outside the grid does nothing
    // Verified by removing the bounds check
    #[test]
    fn test_place_out_of_range_is_noop() {
        let mut grid = Grid::new(3, 3);
        let before = grid.clone();

        prop::place(&mut grid, 3, 0, "tree-oak");
        prop::place(&mut grid, 0, -2, "tree-oak");

        assert_eq!(grid, before);
    }

    // Tests removal clears the overlay and returns its id
    // Verified by leaving underlying_type set after removal
    #[test]
    fn test_remove_clears_overlay() {
        let mut grid = Grid::new(3, 3);
        prop::place(&mut grid, 0, 0, "flower-bush");

        assert_eq!(prop::remove(&mut grid, 0, 0).as_deref(), Some("flower-bush"));
        assert_eq!(grid.get(0, 0), Some(&Cell::grass(0, 0)));
        assert!(prop::remove(&mut grid, 0, 0).is_none());
        assert!(prop::remove(&mut grid, 9, 9).is_none());
    }

    // Tests buildings are not removable as props
    // Verified by dropping the building guard in remove
    #[test]
    fn test_remove_ignores_buildings() {
        let mut grid = Grid::new(3, 3);
        building::place(&mut grid, 0, 0, 2, 2, "cafe", Facing::Down);

        assert!(prop::remove(&mut grid, 0, 0).is_none());
        assert!(grid.get(0, 0).is_some_and(|cell| cell.structure_id.as_deref() == Some("cafe")));
    }
}
