/// Command-line interface and run orchestration
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG export of placement plans
pub mod image;
/// Progress display
pub mod progress;
/// Text rendering of placement plans
pub mod text;
/// Carving animation capture and GIF export
pub mod visualization;
