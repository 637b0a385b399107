//! Tile placement planning for a finished maze
//!
//! This module contains:
//! - Placement commands and the sink trait renderers implement
//! - The lazy emitter expanding connectivity into commands
//! - A dense top-down raster of the emitted plan

/// Top-down raster of placement commands
pub mod canvas;
/// Connectivity-to-placement expansion
pub mod emitter;
/// Placement command types and sinks
pub mod placement;

pub use emitter::{LayoutEmitter, emit};
pub use placement::{KindTally, ModelKind, PlacementCommand, PlacementSink, Position};
