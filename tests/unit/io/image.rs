//! Tests for PNG rendering and export of layouts

#[cfg(test)]
mod tests {
    use mazeforge::MazeError;
    use mazeforge::io::configuration::{
        EMPTY_COLOR, FLOOR_COLOR, MAX_IMAGE_DIMENSION, MAX_TILE_SCALE, PASSAGE_COLOR, WALL_COLOR,
    };
    use mazeforge::io::image::{export_canvas_as_png, image_size, render_canvas, tile_color};
    use mazeforge::layout::canvas::TileCanvas;
    use mazeforge::layout::emitter::LayoutEmitter;
    use mazeforge::layout::placement::ModelKind;
    use mazeforge::spatial::{CellState, MazeGrid};

    fn golden_canvas() -> TileCanvas {
        let cells = [0x12, 0x1C, 0x12, 0x19]
            .into_iter()
            .map(CellState::from_bits)
            .collect();
        let Ok(grid) = MazeGrid::from_cells(2, 2, cells) else {
            unreachable!("cell count matches dimensions");
        };
        let Ok(emitter) = LayoutEmitter::new(&grid, 1) else {
            unreachable!("valid path width");
        };
        let Ok(canvas) = TileCanvas::render(&emitter) else {
            unreachable!("plan fits the canvas limits");
        };
        canvas
    }

    fn pixel(img: &image::RgbaImage, x: u32, y: u32) -> Option<[u8; 4]> {
        img.get_pixel_checked(x, y).map(|pixel| pixel.0)
    }

    #[test]
    fn test_tile_colors() {
        assert_eq!(tile_color(Some(ModelKind::Floor)), FLOOR_COLOR);
        assert_eq!(tile_color(Some(ModelKind::Wall)), WALL_COLOR);
        assert_eq!(tile_color(Some(ModelKind::Passage)), PASSAGE_COLOR);
        assert_eq!(tile_color(None), EMPTY_COLOR);
    }

    // Tests each unit becomes a scale x scale block of its colour
    #[test]
    fn test_render_canvas_scales_units() {
        let Ok(img) = render_canvas(&golden_canvas(), 2) else {
            unreachable!("scale within range");
        };

        assert_eq!(img.dimensions(), (10, 10));
        assert_eq!(pixel(&img, 0, 0), Some(WALL_COLOR));
        // Unit (0, 0) sits one unit in from the origin
        assert_eq!(pixel(&img, 2, 2), Some(FLOOR_COLOR));
        assert_eq!(pixel(&img, 3, 3), Some(FLOOR_COLOR));
        // Passage at unit (1, 0)
        assert_eq!(pixel(&img, 4, 2), Some(PASSAGE_COLOR));
    }

    // Tests uncovered units are left transparent
    #[test]
    fn test_empty_canvas_is_transparent() {
        let canvas = TileCanvas::new(3, 2, (0, 0));
        let Ok(img) = render_canvas(&canvas, 1) else {
            unreachable!("scale within range");
        };
        assert_eq!(img.dimensions(), (3, 2));
        assert!(img.pixels().all(|pixel| pixel.0 == EMPTY_COLOR));
    }

    #[test]
    fn test_invalid_scale_rejected() {
        let canvas = golden_canvas();
        assert!(render_canvas(&canvas, 0).is_err());
        assert!(render_canvas(&canvas, MAX_TILE_SCALE + 1).is_err());
    }

    // Tests the pixel limit is enforced on each side independently
    #[test]
    fn test_image_size_limit() {
        assert_eq!(image_size(11, 7, 8).ok(), Some((88, 56)));
        assert_eq!(
            image_size(4096, 1, 4).ok(),
            Some((MAX_IMAGE_DIMENSION, 4))
        );
        assert!(matches!(
            image_size(4097, 1, 4),
            Err(MazeError::InvalidParameter {
                parameter: "scale",
                ..
            })
        ));
        assert!(image_size(1, 4097, 4).is_err());
        assert!(image_size(usize::MAX, 1, 1).is_err());
    }

    // Tests an oversized image is refused before any pixel buffer exists
    #[test]
    fn test_render_canvas_rejects_oversized_image() {
        let canvas = TileCanvas::new(4097, 1, (0, 0));
        assert!(render_canvas(&canvas, 4).is_err());
        assert!(render_canvas(&canvas, 1).is_ok());
    }

    // Tests export creates missing directories and writes a readable PNG
    #[test]
    fn test_export_canvas_as_png() {
        let Ok(temp_dir) = tempfile::tempdir() else {
            unreachable!("temp dir available");
        };
        let output = temp_dir.path().join("nested").join("maze.png");

        assert!(export_canvas_as_png(&golden_canvas(), 3, &output).is_ok());

        let Ok(written) = image::open(&output).map(|img| img.to_rgba8()) else {
            unreachable!("exported PNG is readable");
        };
        assert_eq!(written.dimensions(), (15, 15));
        assert_eq!(pixel(&written, 4, 4), Some(FLOOR_COLOR));
    }
}
