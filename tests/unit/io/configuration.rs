//! Tests for generation constants and scene defaults

#[cfg(test)]
mod tests {
    use tilecity::io::configuration::{
        DEFAULT_ACTOR_COUNT, DEFAULT_PREVIEW_SCALE, DEFAULT_VEHICLE_COUNT, FOUNTAIN_SIZE,
        GRID_HEIGHT, GRID_WIDTH, MAX_PREVIEW_SCALE, PARK_TREE_DENSITY, SEGMENT_SIZE,
        STATUE_HEIGHT, STATUE_WIDTH, TREE_SPACING,
    };

    // Tests the grid tiles evenly into road segments
    // Verified by changing the grid width to 50
    #[test]
    fn test_grid_is_segment_aligned() {
        assert_eq!(GRID_WIDTH, 48);
        assert_eq!(GRID_HEIGHT, 48);
        assert_eq!(SEGMENT_SIZE, 4);
        assert_eq!(GRID_WIDTH % SEGMENT_SIZE, 0);
        assert_eq!(GRID_HEIGHT % SEGMENT_SIZE, 0);
    }

    // Tests placement footprints and densities
    // Verified by changing the statue height to one
    #[test]
    fn test_placement_constants() {
        assert_eq!(TREE_SPACING, 2);
        assert_eq!(FOUNTAIN_SIZE, 2);
        assert_eq!(PARK_TREE_DENSITY, 8);
        assert_eq!((STATUE_WIDTH, STATUE_HEIGHT), (1, 2));
    }

    // Tests scene defaults and preview limits
    // Verified by swapping actor and vehicle counts
    #[test]
    fn test_scene_and_preview_defaults() {
        assert_eq!(DEFAULT_ACTOR_COUNT, 24);
        assert_eq!(DEFAULT_VEHICLE_COUNT, 12);
        assert!(DEFAULT_PREVIEW_SCALE >= 1 && DEFAULT_PREVIEW_SCALE <= MAX_PREVIEW_SCALE);
    }
}
