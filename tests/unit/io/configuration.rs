//! Tests for generation defaults and safety limits

#[cfg(test)]
mod tests {
    use mazeforge::io::configuration::{
        DEFAULT_ELEVATION, DEFAULT_HEIGHT, DEFAULT_OUTPUT, DEFAULT_PATH_WIDTH, DEFAULT_SEED,
        DEFAULT_TILE_SCALE, DEFAULT_WIDTH, EMPTY_COLOR, FLOOR_COLOR, GIF_FRAME_DELAY_MS,
        MAX_PATH_WIDTH, MAX_TILE_SCALE, PASSAGE_COLOR, VIEWER_MIN_FRAME_DELAY_MS,
        VISUALIZATION_SUFFIX, WALL_COLOR,
    };

    // Tests the default maze is the classic 5x5 with single-unit paths
    #[test]
    fn test_default_dimensions() {
        assert_eq!((DEFAULT_WIDTH, DEFAULT_HEIGHT), (5, 5));
        assert_eq!(DEFAULT_PATH_WIDTH, 1);
        assert!(DEFAULT_PATH_WIDTH <= MAX_PATH_WIDTH);
    }

    #[test]
    fn test_default_seed_is_reproducible() {
        assert_eq!(DEFAULT_SEED, 42);
    }

    #[test]
    fn test_commands_sit_on_ground_plane() {
        assert!(DEFAULT_ELEVATION.abs() < f64::EPSILON);
    }

    // Tests the default scale is usable for export
    #[test]
    fn test_tile_scale_bounds() {
        assert!(DEFAULT_TILE_SCALE >= 1);
        assert!(DEFAULT_TILE_SCALE <= MAX_TILE_SCALE);
    }

    // Tests every tile kind is distinguishable in exported images
    #[test]
    fn test_palette_is_distinct() {
        let palette = [FLOOR_COLOR, WALL_COLOR, PASSAGE_COLOR, EMPTY_COLOR];
        for (i, a) in palette.iter().enumerate() {
            for b in palette.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
        assert_eq!(EMPTY_COLOR.last(), Some(&0));
    }

    // Tests the animation default is below the viewer minimum so frames get skipped
    #[test]
    fn test_frame_delay_relationship() {
        assert!(GIF_FRAME_DELAY_MS < VIEWER_MIN_FRAME_DELAY_MS);
    }

    #[test]
    fn test_output_names() {
        assert!(DEFAULT_OUTPUT.ends_with(".png"));
        assert!(VISUALIZATION_SUFFIX.starts_with('_'));
        assert!(
            VISUALIZATION_SUFFIX
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        );
    }
}
