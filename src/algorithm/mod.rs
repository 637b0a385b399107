/// Randomized depth-first maze construction
pub mod backtracker;
/// Randomness sources for reproducible generation
pub mod random;
