//! Character rendering of a rasterised placement plan

use crate::layout::canvas::TileCanvas;
use crate::layout::placement::ModelKind;

/// Glyph for a tile
pub const fn tile_glyph(tile: Option<ModelKind>) -> char {
    match tile {
        Some(ModelKind::Wall) => '#',
        Some(ModelKind::Floor) => '.',
        Some(ModelKind::Passage) | None => ' ',
    }
}

/// Render a canvas as text, one line per unit row
pub fn render_ascii(canvas: &TileCanvas) -> String {
    let mut out = String::with_capacity((canvas.columns() + 1) * canvas.rows());
    for row in canvas.row_iter() {
        out.extend(row.into_iter().map(tile_glyph));
        out.push('\n');
    }
    out
}
