//! PNG export of a rasterised placement plan

use image::{Rgba, RgbaImage};
use std::path::Path;

use crate::io::configuration::{
    EMPTY_COLOR, FLOOR_COLOR, MAX_IMAGE_DIMENSION, MAX_TILE_SCALE, PASSAGE_COLOR, WALL_COLOR,
};
use crate::io::error::{MazeError, Result, invalid_parameter};
use crate::layout::canvas::TileCanvas;
use crate::layout::placement::ModelKind;

/// Palette colour for a tile
pub const fn tile_color(tile: Option<ModelKind>) -> [u8; 4] {
    match tile {
        Some(ModelKind::Floor) => FLOOR_COLOR,
        Some(ModelKind::Wall) => WALL_COLOR,
        Some(ModelKind::Passage) => PASSAGE_COLOR,
        None => EMPTY_COLOR,
    }
}

/// Pixel size of a `columns x rows` canvas painted at `scale`
///
/// # Errors
///
/// Returns an error if `scale` is zero, exceeds `MAX_TILE_SCALE`, or the
/// image would exceed `MAX_IMAGE_DIMENSION` pixels on either side
pub fn image_size(columns: usize, rows: usize, scale: u32) -> Result<(u32, u32)> {
    if scale == 0 || scale > MAX_TILE_SCALE {
        return Err(invalid_parameter(
            "scale",
            &scale,
            &format!("must be between 1 and {MAX_TILE_SCALE}"),
        ));
    }

    let pixels = |units: usize| {
        u32::try_from(units)
            .ok()
            .and_then(|units| units.checked_mul(scale))
            .filter(|&pixels| pixels <= MAX_IMAGE_DIMENSION)
    };

    match (pixels(columns), pixels(rows)) {
        (Some(width), Some(height)) => Ok((width, height)),
        _ => Err(invalid_parameter(
            "scale",
            &scale,
            &format!("a {columns}x{rows} plan exceeds {MAX_IMAGE_DIMENSION} pixels per side"),
        )),
    }
}

/// Paint a canvas into an image, `scale` pixels per placement unit
///
/// # Errors
///
/// Returns an error if the scale is out of range or the image would be too large
pub fn render_canvas(canvas: &TileCanvas, scale: u32) -> Result<RgbaImage> {
    let (width, height) = image_size(canvas.columns(), canvas.rows(), scale)?;

    Ok(RgbaImage::from_fn(width, height, |px, py| {
        let tile = canvas.get_local((py / scale) as usize, (px / scale) as usize);
        Rgba(tile_color(tile))
    }))
}

/// Export a canvas as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - `scale` is out of range or the image would be too large
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_canvas_as_png(canvas: &TileCanvas, scale: u32, output_path: &Path) -> Result<()> {
    let img = render_canvas(canvas, scale)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path).map_err(|e| MazeError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    log::info!(
        "Wrote {}x{} image to {}",
        img.width(),
        img.height(),
        output_path.display()
    );
    Ok(())
}
