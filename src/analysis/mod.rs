//! Structural analysis of generated mazes

/// Symmetry, connectivity and spanning-tree verification
pub mod topology;
