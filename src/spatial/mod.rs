//! Spatial data structures for the maze
//!
//! This module contains:
//! - Per-cell connectivity flags and directions
//! - The connectivity grid with symmetric carving

/// Cell flag set and cardinal directions
pub mod cell;
/// Connectivity grid and coordinates
pub mod grid;

pub use cell::{CellState, Direction};
pub use grid::{Coord, MazeGrid};
