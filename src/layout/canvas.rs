//! Dense raster of placement commands seen from above

use ndarray::Array2;

use crate::io::configuration::MAX_CANVAS_DIMENSION;
use crate::io::error::{Result, invalid_parameter};
use crate::layout::emitter::LayoutEmitter;
use crate::layout::placement::{ModelKind, PlacementCommand, PlacementSink};

/// Top-down tile raster covering a placement extent
///
/// Stores the last kind placed at each unit, indexed `[v, u]` relative to the
/// extent origin. Units no command touched stay `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileCanvas {
    tiles: Array2<Option<ModelKind>>,
    origin: (i64, i64),
}

impl TileCanvas {
    /// Create an empty canvas spanning `columns x rows` units from `origin`
    pub fn new(columns: usize, rows: usize, origin: (i64, i64)) -> Self {
        Self {
            tiles: Array2::from_elem((rows, columns), None),
            origin,
        }
    }

    /// Create an empty canvas sized to everything `emitter` can place
    ///
    /// # Errors
    ///
    /// Returns an error if the extent exceeds `MAX_CANVAS_DIMENSION` on either side
    pub fn for_emitter(emitter: &LayoutEmitter<'_>) -> Result<Self> {
        let grid = emitter.grid();
        let (columns, rows) = canvas_size(grid.width(), grid.height(), emitter.path_width())?;
        let (min_u, min_v, _, _) = emitter.extent();
        Ok(Self::new(columns, rows, (min_u, min_v)))
    }

    /// Rasterise a full emitter pass
    ///
    /// # Errors
    ///
    /// Returns an error if the extent is too large or a command falls outside it
    pub fn render(emitter: &LayoutEmitter<'_>) -> Result<Self> {
        let mut canvas = Self::for_emitter(emitter)?;
        canvas.place_all(emitter.commands())?;
        Ok(canvas)
    }

    /// Number of unit columns
    pub fn columns(&self) -> usize {
        self.tiles.ncols()
    }

    /// Number of unit rows
    pub fn rows(&self) -> usize {
        self.tiles.nrows()
    }

    /// World unit of the top-left tile
    pub const fn origin(&self) -> (i64, i64) {
        self.origin
    }

    /// Kind at world unit `(u, v)`
    pub fn get(&self, u: i64, v: i64) -> Option<ModelKind> {
        let (row, col) = self.local(u, v)?;
        self.tiles.get([row, col]).copied().flatten()
    }

    /// Kind at raster position `(row, col)`
    pub fn get_local(&self, row: usize, col: usize) -> Option<ModelKind> {
        self.tiles.get([row, col]).copied().flatten()
    }

    /// Number of units holding `kind`
    pub fn count(&self, kind: ModelKind) -> usize {
        self.tiles.iter().filter(|&&tile| tile == Some(kind)).count()
    }

    /// Raster rows from top to bottom
    pub fn row_iter(&self) -> impl Iterator<Item = Vec<Option<ModelKind>>> + '_ {
        self.tiles.rows().into_iter().map(|row| row.to_vec())
    }

    fn local(&self, u: i64, v: i64) -> Option<(usize, usize)> {
        let col = usize::try_from(u - self.origin.0).ok()?;
        let row = usize::try_from(v - self.origin.1).ok()?;
        (row < self.rows() && col < self.columns()).then_some((row, col))
    }
}

/// Columns and rows of the canvas for a `width x height` grid at `path_width`
///
/// Each side spans one boundary unit plus `path_width + 1` units per cell.
///
/// # Errors
///
/// Returns an error if either side exceeds `MAX_CANVAS_DIMENSION`
pub fn canvas_size(width: usize, height: usize, path_width: usize) -> Result<(usize, usize)> {
    let side = |cells: usize| {
        path_width
            .checked_add(1)
            .and_then(|stride| cells.checked_mul(stride))
            .and_then(|units| units.checked_add(1))
            .filter(|&units| units <= MAX_CANVAS_DIMENSION)
    };

    match (side(width), side(height)) {
        (Some(columns), Some(rows)) => Ok((columns, rows)),
        _ => Err(invalid_parameter(
            "canvas",
            &format!("{width}x{height} cells at path width {path_width}"),
            &format!("plan exceeds {MAX_CANVAS_DIMENSION} units per side"),
        )),
    }
}

impl PlacementSink for TileCanvas {
    fn place(&mut self, command: &PlacementCommand) -> Result<()> {
        let (u, v) = command.position.units();
        let (row, col) = self.local(u, v).ok_or_else(|| {
            invalid_parameter(
                "position",
                &format!("({u}, {v})"),
                &"outside the canvas extent",
            )
        })?;
        if let Some(tile) = self.tiles.get_mut([row, col]) {
            *tile = Some(command.kind);
        }
        Ok(())
    }
}
