//! Structural checks of a connectivity grid
//!
//! These checks only read path flags. They never consult the builder, so a
//! passing report is independent evidence that the grid is a perfect maze.

use bitvec::prelude::*;

use crate::io::error::{Result, invariant_violation};
use crate::spatial::{Coord, Direction, MazeGrid};

/// Summary of the connectivity graph encoded in a grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TopologyReport {
    /// Total number of cells
    pub cells: usize,
    /// Cells carrying the visited marker
    pub visited: usize,
    /// Undirected open connections
    pub edges: usize,
    /// Cells reachable from the origin through open connections
    pub reachable: usize,
    /// Cells with exactly one open connection
    pub dead_ends: usize,
    /// Whether every path flag has its reciprocal
    pub symmetric: bool,
}

impl TopologyReport {
    /// Analyse a grid
    pub fn analyze(grid: &MazeGrid) -> Self {
        let dead_ends = grid
            .cells()
            .filter(|(_, cell)| cell.degree() == 1)
            .count();

        Self {
            cells: grid.cell_count(),
            visited: grid.visited_count(),
            edges: grid.connection_count(),
            reachable: reachable_count(grid, Coord::new(0, 0)),
            dead_ends,
            symmetric: check_symmetry(grid).is_ok(),
        }
    }

    /// Whether the graph is a spanning tree over every cell
    ///
    /// Connected with `cells - 1` edges implies acyclic.
    pub const fn is_perfect(&self) -> bool {
        self.symmetric
            && self.visited == self.cells
            && self.reachable == self.cells
            && self.edges + 1 == self.cells
    }
}

/// Verify that every open path has its reciprocal on the neighbour
///
/// A flag pointing off the grid edge also counts as a violation.
///
/// # Errors
///
/// Returns an invariant violation naming the first offending cell
pub fn check_symmetry(grid: &MazeGrid) -> Result<()> {
    for (coord, cell) in grid.cells() {
        for direction in cell.open_directions() {
            let Some(next) = grid.neighbor(coord, direction) else {
                return Err(invariant_violation(
                    "symmetry check",
                    &format!("{coord} opens {direction} off the grid"),
                ));
            };
            if !grid.has_path(next, direction.opposite()) {
                return Err(invariant_violation(
                    "symmetry check",
                    &format!(
                        "{coord} opens {direction} but {next} does not open {}",
                        direction.opposite()
                    ),
                ));
            }
        }
    }
    Ok(())
}

/// Count cells reachable from `origin` by flood fill over open paths
pub fn reachable_count(grid: &MazeGrid, origin: Coord) -> usize {
    if !grid.contains(origin) {
        return 0;
    }

    let width = grid.width();
    let index = |coord: Coord| coord.y * width + coord.x;

    let mut seen = bitvec![0; grid.cell_count()];
    let mut frontier = vec![origin];
    seen.set(index(origin), true);
    let mut count = 0;

    while let Some(coord) = frontier.pop() {
        count += 1;
        for direction in Direction::ALL {
            if !grid.has_path(coord, direction) {
                continue;
            }
            let Some(next) = grid.neighbor(coord, direction) else {
                continue;
            };
            if seen.get(index(next)).as_deref() == Some(&false) {
                seen.set(index(next), true);
                frontier.push(next);
            }
        }
    }

    count
}

/// Whether the grid encodes a perfect maze
pub fn is_perfect_maze(grid: &MazeGrid) -> bool {
    TopologyReport::analyze(grid).is_perfect()
}
