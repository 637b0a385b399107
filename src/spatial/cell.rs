use bitvec::prelude::*;
use std::fmt;

/// Cardinal direction between orthogonally adjacent cells
///
/// North decreases `y`, South increases it; West decreases `x`, East increases it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row `y - 1`
    North,
    /// Towards column `x + 1`
    East,
    /// Towards row `y + 1`
    South,
    /// Towards column `x - 1`
    West,
}

impl Direction {
    /// All directions in candidate scan order
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The direction pointing back at the origin cell
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Column and row deltas of one step in this direction
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }

    const fn flag_index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        f.write_str(name)
    }
}

// Bit positions match the classic encoding: N=0x01, E=0x02, S=0x04, W=0x08, VISITED=0x10
const VISITED_INDEX: usize = 4;

/// Per-cell connectivity flags
///
/// Five independent bits: one open-path flag per direction plus the visited
/// marker. Only set and test operations exist; flags are never cleared once a
/// cell joins the spanning tree.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellState {
    bits: BitArr!(for 5, in u8, Lsb0),
}

impl Default for CellState {
    fn default() -> Self {
        Self::new()
    }
}

impl CellState {
    /// Create a cell with every flag clear
    pub const fn new() -> Self {
        Self {
            bits: BitArray::ZERO,
        }
    }

    /// Rebuild a cell from its raw bit encoding, ignoring unknown bits
    pub fn from_bits(raw: u8) -> Self {
        Self {
            bits: BitArray::new([raw & 0x1F]),
        }
    }

    /// Raw bit encoding of the flags
    pub fn bits(&self) -> u8 {
        let [raw] = self.bits.into_inner();
        raw
    }

    /// Test whether the cell has joined the spanning tree
    pub fn is_visited(&self) -> bool {
        self.flag(VISITED_INDEX)
    }

    /// Mark the cell as part of the spanning tree
    pub fn mark_visited(&mut self) {
        self.bits.set(VISITED_INDEX, true);
    }

    /// Test whether a path opens towards `direction`
    pub fn has_path(&self, direction: Direction) -> bool {
        self.flag(direction.flag_index())
    }

    /// Open a path towards `direction`
    pub fn open_path(&mut self, direction: Direction) {
        self.bits.set(direction.flag_index(), true);
    }

    /// Directions with an open path, in `Direction::ALL` order
    pub fn open_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |&direction| self.has_path(direction))
    }

    /// Number of open paths leaving this cell
    pub fn degree(&self) -> usize {
        self.open_directions().count()
    }

    fn flag(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }
}

impl fmt::Debug for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellState({:#04x})", self.bits())
    }
}
