//! Perfect maze generation by randomized depth-first backtracking
//!
//! The builder carves a spanning tree over a rectangular grid, recording open
//! paths as per-cell direction flags. The layout emitter then expands that
//! connectivity into floor, wall and passage placement commands for an
//! external renderer.

#![forbid(unsafe_code)]

/// Maze construction and randomness sources
pub mod algorithm;
/// Structural verification of generated mazes
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Placement planning from maze connectivity
pub mod layout;
/// Cell flags and the connectivity grid
pub mod spatial;

pub use algorithm::backtracker::{MazeBuilder, MazeConfig, StartCell, generate, generate_with};
pub use algorithm::random::{RandomSource, RngSource, SeededSource, SequenceSource};
pub use io::error::{MazeError, Result};
pub use layout::{LayoutEmitter, ModelKind, PlacementCommand, emit};
pub use spatial::{CellState, Coord, Direction, MazeGrid};
