//! Maze grid storage with symmetric path carving
//!
//! Cells live in a dense 2D array indexed `[y, x]`. Besides raw reconstruction
//! through [`MazeGrid::from_cells`], the only mutation that opens a path is
//! [`MazeGrid::carve`], which writes both sides of the connection at once.

use ndarray::Array2;
use std::fmt;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, invalid_parameter, invariant_violation};
use crate::spatial::cell::{CellState, Direction};

/// Logical cell coordinate, `x` across columns and `y` down rows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Column index
    pub x: usize,
    /// Row index
    pub y: usize,
}

impl Coord {
    /// Create a coordinate
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Connectivity grid produced by the maze builder
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeGrid {
    cells: Array2<CellState>,
    width: usize,
    height: usize,
}

impl MazeGrid {
    /// Create a grid with every cell clear and unvisited
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds `MAX_GRID_DIMENSION`
    pub fn new(width: usize, height: usize) -> Result<Self> {
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;

        Ok(Self {
            cells: Array2::from_elem((height, width), CellState::new()),
            width,
            height,
        })
    }

    /// Rebuild a grid from row-major cell flags
    ///
    /// The flags are taken as given; use `analysis::topology::check_symmetry`
    /// before trusting a grid from an outside source.
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is out of range or `cells` does not
    /// hold exactly `width * height` entries
    pub fn from_cells(width: usize, height: usize, cells: Vec<CellState>) -> Result<Self> {
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;

        let count = cells.len();
        let cells = Array2::from_shape_vec((height, width), cells).map_err(|error| {
            invalid_parameter(
                "cells",
                &count,
                &format!(
                    "expected {} cells for a {width}x{height} grid: {error}",
                    width * height
                ),
            )
        })?;

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Check whether a coordinate lies inside the grid
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Flags of the cell at `coord`, or `None` outside the grid
    pub fn cell(&self, coord: Coord) -> Option<CellState> {
        self.cells.get([coord.y, coord.x]).copied()
    }

    /// The in-bounds neighbour of `coord` in `direction`
    pub fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        let (dx, dy) = direction.delta();
        let x = coord.x.checked_add_signed(dx)?;
        let y = coord.y.checked_add_signed(dy)?;
        let next = Coord::new(x, y);
        self.contains(next).then_some(next)
    }

    /// Test whether `coord` has joined the spanning tree
    pub fn is_visited(&self, coord: Coord) -> bool {
        self.cell(coord).is_some_and(|cell| cell.is_visited())
    }

    /// Test whether `coord` has an open path towards `direction`
    pub fn has_path(&self, coord: Coord, direction: Direction) -> bool {
        self.cell(coord).is_some_and(|cell| cell.has_path(direction))
    }

    /// Mark a single cell visited without opening any path
    ///
    /// # Errors
    ///
    /// Returns an error if `coord` lies outside the grid
    pub fn mark_visited(&mut self, coord: Coord) -> Result<()> {
        let cell = self.cells.get_mut([coord.y, coord.x]).ok_or_else(|| {
            invalid_parameter("coord", &coord, &"cell lies outside the grid")
        })?;
        cell.mark_visited();
        Ok(())
    }

    /// Open a path from `from` towards `direction`
    ///
    /// Sets the forward flag on `from`, then the reciprocal flag and the
    /// visited marker on the neighbour. Returns the neighbour coordinate.
    ///
    /// # Errors
    ///
    /// Returns an error if `from` is outside the grid or has no neighbour in `direction`
    pub fn carve(&mut self, from: Coord, direction: Direction) -> Result<Coord> {
        let to = self.neighbor(from, direction).ok_or_else(|| {
            invariant_violation(
                "carve",
                &format!("{from} has no neighbour to the {direction}"),
            )
        })?;

        if let Some(cell) = self.cells.get_mut([from.y, from.x]) {
            cell.open_path(direction);
        }
        if let Some(cell) = self.cells.get_mut([to.y, to.x]) {
            cell.open_path(direction.opposite());
            cell.mark_visited();
        }

        Ok(to)
    }

    /// Count cells with the visited marker set
    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_visited()).count()
    }

    /// Count open connections, each undirected edge once
    ///
    /// Only South and East flags are counted so every edge is seen from exactly one side.
    pub fn connection_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                usize::from(cell.has_path(Direction::South))
                    + usize::from(cell.has_path(Direction::East))
            })
            .sum()
    }

    /// All coordinates in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Coord::new(x, y)))
    }

    /// All cells with their coordinates in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((y, x), &cell)| (Coord::new(x, y), cell))
    }
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(parameter, &value, &"must be at least 1"));
    }
    if value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}
