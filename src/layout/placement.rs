//! Placement commands and the renderer seam that consumes them

use std::fmt;

use crate::io::error::Result;

/// Kind of model a renderer should place
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModelKind {
    /// Walkable tile inside a cell block
    Floor,
    /// Solid wall segment
    Wall,
    /// Open segment joining two cells
    Passage,
}

impl ModelKind {
    /// All kinds in declaration order
    pub const ALL: [Self; 3] = [Self::Floor, Self::Wall, Self::Passage];

    /// Whether an agent may stand on this kind of tile
    pub const fn is_walkable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Floor => "floor",
            Self::Wall => "wall",
            Self::Passage => "passage",
        };
        f.write_str(name)
    }
}

/// World-space position of a placed model
///
/// `x` follows grid columns, `z` follows grid rows and `y` is the constant elevation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    /// Column axis
    pub x: f64,
    /// Elevation
    pub y: f64,
    /// Row axis
    pub z: f64,
}

impl Position {
    /// Create a position
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Position of placement unit `(u, v)` at `elevation`
    pub fn from_units(u: i64, v: i64, elevation: f64) -> Self {
        Self::new(u as f64, elevation, v as f64)
    }

    /// Placement unit under this position on the ground plane
    pub fn units(&self) -> (i64, i64) {
        (self.x.round() as i64, self.z.round() as i64)
    }
}

/// Instruction to place one model at one position
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementCommand {
    /// What to place
    pub kind: ModelKind,
    /// Where to place it
    pub position: Position,
}

impl PlacementCommand {
    /// Create a command
    pub const fn new(kind: ModelKind, position: Position) -> Self {
        Self { kind, position }
    }
}

/// Consumer of placement commands, implemented by renderers
pub trait PlacementSink {
    /// Accept one command
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot record the command
    fn place(&mut self, command: &PlacementCommand) -> Result<()>;

    /// Drain an entire command sequence into the sink
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error raised by [`PlacementSink::place`]
    fn place_all<I>(&mut self, commands: I) -> Result<()>
    where
        I: IntoIterator<Item = PlacementCommand>,
        Self: Sized,
    {
        for command in commands {
            self.place(&command)?;
        }
        Ok(())
    }
}

impl PlacementSink for Vec<PlacementCommand> {
    fn place(&mut self, command: &PlacementCommand) -> Result<()> {
        self.push(*command);
        Ok(())
    }
}

/// Per-kind command counts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KindTally {
    /// Floor commands seen
    pub floors: usize,
    /// Wall commands seen
    pub walls: usize,
    /// Passage commands seen
    pub passages: usize,
}

impl KindTally {
    /// Count every command in a sequence
    pub fn from_commands(commands: impl IntoIterator<Item = PlacementCommand>) -> Self {
        let mut tally = Self::default();
        for command in commands {
            tally.record(command.kind);
        }
        tally
    }

    /// Count one command of `kind`
    pub const fn record(&mut self, kind: ModelKind) {
        match kind {
            ModelKind::Floor => self.floors += 1,
            ModelKind::Wall => self.walls += 1,
            ModelKind::Passage => self.passages += 1,
        }
    }

    /// Count recorded for `kind`
    pub const fn get(&self, kind: ModelKind) -> usize {
        match kind {
            ModelKind::Floor => self.floors,
            ModelKind::Wall => self.walls,
            ModelKind::Passage => self.passages,
        }
    }

    /// Sum over all kinds
    pub const fn total(&self) -> usize {
        self.floors + self.walls + self.passages
    }
}

impl PlacementSink for KindTally {
    fn place(&mut self, command: &PlacementCommand) -> Result<()> {
        self.record(command.kind);
        Ok(())
    }
}

impl fmt::Display for KindTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} floors, {} walls, {} passages",
            self.floors, self.walls, self.passages
        )
    }
}
