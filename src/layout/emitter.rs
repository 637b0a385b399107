//! Expansion of logical connectivity into placement commands
//!
//! Every cell occupies a `p x p` block of floor units at `(x * (p + 1), y * (p + 1))`.
//! The unit-wide gap between blocks carries the South and East strips of each
//! cell, and the outermost row and column carry the North and West boundary
//! strips. Each strip runs over `p` in `-1..p`; the `-1` unit is always a wall
//! cap, even where the connection is open.

use crate::algorithm::backtracker::validate_path_width;
use crate::io::configuration::DEFAULT_ELEVATION;
use crate::io::error::Result;
use crate::layout::placement::{KindTally, ModelKind, PlacementCommand, Position};
use crate::spatial::{CellState, Coord, Direction, MazeGrid};

/// Lazy producer of placement commands for a finished grid
///
/// The emitter only reads the grid. Each call to [`LayoutEmitter::commands`]
/// starts a fresh pass, so the sequence can be replayed identically.
#[derive(Clone, Copy, Debug)]
pub struct LayoutEmitter<'g> {
    grid: &'g MazeGrid,
    path_width: usize,
    elevation: f64,
}

impl<'g> LayoutEmitter<'g> {
    /// Create an emitter over `grid`
    ///
    /// # Errors
    ///
    /// Returns an error if `path_width` is out of range
    pub fn new(grid: &'g MazeGrid, path_width: usize) -> Result<Self> {
        validate_path_width(path_width)?;
        Ok(Self {
            grid,
            path_width,
            elevation: DEFAULT_ELEVATION,
        })
    }

    /// Place every command at `elevation` instead of the default plane
    #[must_use]
    pub const fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }

    /// The grid being expanded
    pub const fn grid(&self) -> &'g MazeGrid {
        self.grid
    }

    /// Placement units per cell edge
    pub const fn path_width(&self) -> usize {
        self.path_width
    }

    /// Inclusive unit bounds `(min_u, min_v, max_u, max_v)` of every emitted position
    pub const fn extent(&self) -> (i64, i64, i64, i64) {
        let stride = self.stride();
        (
            -1,
            -1,
            self.grid.width() as i64 * stride - 1,
            self.grid.height() as i64 * stride - 1,
        )
    }

    /// All commands, cells in row-major order
    pub fn commands(&self) -> impl Iterator<Item = PlacementCommand> + use<'g> {
        let emitter = *self;
        (0..self.grid.height()).flat_map(move |y| emitter.row(y))
    }

    /// Commands for the cells of row `y` only
    ///
    /// A row reads only its own cells, so rows may be consumed independently
    /// and in any order. Rows outside the grid yield nothing.
    pub fn row(&self, y: usize) -> impl Iterator<Item = PlacementCommand> + use<'g> {
        let emitter = *self;
        let columns = if y < self.grid.height() {
            self.grid.width()
        } else {
            0
        };
        (0..columns).flat_map(move |x| emitter.cell_commands(Coord::new(x, y)))
    }

    /// Number of commands a full pass yields, without running it
    pub fn command_count(&self) -> usize {
        let width = self.grid.width();
        let height = self.grid.height();
        let strip = self.path_width + 1;

        let floors = self.grid.visited_count() * self.path_width * self.path_width;
        let inner_strips = width * height * 2 * strip;
        let boundary_strips = (width + height) * strip;

        floors + inner_strips + boundary_strips + 1
    }

    /// Per-kind counts of a full pass
    pub fn tally(&self) -> KindTally {
        KindTally::from_commands(self.commands())
    }

    const fn stride(&self) -> i64 {
        self.path_width as i64 + 1
    }

    fn cell_commands(&self, coord: Coord) -> impl Iterator<Item = PlacementCommand> + use<'g> {
        let cell = self.grid.cell(coord).unwrap_or_default();
        let path_width = self.path_width as i64;
        let base_u = coord.x as i64 * self.stride();
        let base_v = coord.y as i64 * self.stride();
        let elevation = self.elevation;
        let place =
            move |kind, u, v| PlacementCommand::new(kind, Position::from_units(u, v, elevation));

        let floor_rows = if cell.is_visited() { path_width } else { 0 };
        let floors = (0..floor_rows).flat_map(move |py| {
            (0..path_width).map(move |px| place(ModelKind::Floor, base_u + px, base_v + py))
        });

        let strips = (-1..path_width).flat_map(move |p| {
            let south = place(
                strip_kind(cell, Direction::South, p),
                base_u + p,
                base_v + path_width,
            );
            let east = place(
                strip_kind(cell, Direction::East, p),
                base_u + path_width,
                base_v + p,
            );
            let north = (coord.y == 0)
                .then(|| place(boundary_kind(cell, Direction::North), base_u + p, -1));
            let west = (coord.x == 0)
                .then(|| place(boundary_kind(cell, Direction::West), -1, base_v + p));

            [Some(south), Some(east), north, west].into_iter().flatten()
        });

        let is_last = coord.x + 1 == self.grid.width() && coord.y + 1 == self.grid.height();
        let corner = is_last.then(|| {
            place(
                ModelKind::Wall,
                base_u + path_width,
                base_v + path_width,
            )
        });

        floors.chain(strips).chain(corner)
    }
}

// The unit at p == -1 caps the strip even when the connection is open
fn strip_kind(cell: CellState, direction: Direction, p: i64) -> ModelKind {
    if cell.has_path(direction) && p >= 0 {
        ModelKind::Passage
    } else {
        ModelKind::Wall
    }
}

fn boundary_kind(cell: CellState, direction: Direction) -> ModelKind {
    if cell.has_path(direction) {
        ModelKind::Passage
    } else {
        ModelKind::Wall
    }
}

/// Expand a grid into its placement sequence
///
/// # Errors
///
/// Returns an error if `path_width` is out of range
pub fn emit(
    grid: &MazeGrid,
    path_width: usize,
) -> Result<impl Iterator<Item = PlacementCommand> + '_> {
    Ok(LayoutEmitter::new(grid, path_width)?.commands())
}
