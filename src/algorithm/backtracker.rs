//! Randomized depth-first backtracking over a rectangular grid
//!
//! The builder grows a spanning tree one step at a time. Each step either
//! carves into a random unvisited neighbour of the cell on top of the stack
//! or pops that cell when it has no unvisited neighbours left. Generation ends
//! as soon as the visited tally reaches the cell count, whatever remains on
//! the stack is dropped.

use crate::algorithm::random::RandomSource;
use crate::analysis::topology::check_symmetry;
use crate::io::configuration::{DEFAULT_HEIGHT, DEFAULT_PATH_WIDTH, DEFAULT_WIDTH, MAX_PATH_WIDTH};
use crate::io::error::{Result, invalid_parameter, invariant_violation, random_source_failure};
use crate::spatial::{Coord, Direction, MazeGrid};

/// Policy for choosing the cell the walk starts from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StartCell {
    /// Uniform over every cell
    #[default]
    Random,
    /// Uniform over `[0, width - 2] x [0, height - 2]`, never the last column or row
    ///
    /// Matches the historical start draw; a dimension of 1 still starts at 0.
    Legacy,
    /// A caller-chosen cell
    Fixed(Coord),
}

/// Parameters of a single maze generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazeConfig {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Placement units per cell edge, used by layout emission
    pub path_width: usize,
    /// Start cell policy
    pub start: StartCell,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            path_width: DEFAULT_PATH_WIDTH,
            start: StartCell::Random,
        }
    }
}

impl MazeConfig {
    /// Create a configuration with the default start policy
    pub const fn new(width: usize, height: usize, path_width: usize) -> Self {
        Self {
            width,
            height,
            path_width,
            start: StartCell::Random,
        }
    }

    /// Replace the start cell policy
    #[must_use]
    pub const fn with_start(mut self, start: StartCell) -> Self {
        self.start = start;
        self
    }

    /// Check every parameter before any grid is allocated
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension or the path width is out of range, or a
    /// fixed start cell lies outside the grid
    pub fn validate(&self) -> Result<()> {
        validate_path_width(self.path_width)?;
        // Dimension limits are enforced by the grid itself
        if self.width == 0 {
            return Err(invalid_parameter("width", &self.width, &"must be at least 1"));
        }
        if self.height == 0 {
            return Err(invalid_parameter("height", &self.height, &"must be at least 1"));
        }
        if let StartCell::Fixed(coord) = self.start {
            if coord.x >= self.width || coord.y >= self.height {
                return Err(invalid_parameter(
                    "start",
                    &coord,
                    &format!("outside a {}x{} grid", self.width, self.height),
                ));
            }
        }
        Ok(())
    }
}

/// Check a path width against the supported range
///
/// # Errors
///
/// Returns an error if `path_width` is zero or exceeds `MAX_PATH_WIDTH`
pub fn validate_path_width(path_width: usize) -> Result<()> {
    if path_width == 0 {
        return Err(invalid_parameter(
            "path_width",
            &path_width,
            &"must be at least 1",
        ));
    }
    if path_width > MAX_PATH_WIDTH {
        return Err(invalid_parameter(
            "path_width",
            &path_width,
            &format!("must not exceed {MAX_PATH_WIDTH}"),
        ));
    }
    Ok(())
}

/// A single transition of the backtracking walk
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildEvent {
    /// A path was opened from `from` into the previously unvisited `to`
    Carve {
        /// Cell on top of the stack before the step
        from: Coord,
        /// Newly visited neighbour, now on top of the stack
        to: Coord,
        /// Direction from `from` to `to`
        direction: Direction,
    },
    /// `from` had no unvisited neighbours and was popped
    Backtrack {
        /// Cell removed from the stack
        from: Coord,
    },
}

/// Step-wise maze builder owning the grid and the backtracking stack
pub struct MazeBuilder<R> {
    grid: MazeGrid,
    stack: Vec<Coord>,
    visited: usize,
    steps: usize,
    rng: R,
}

impl<R: RandomSource> MazeBuilder<R> {
    /// Allocate the grid, pick the start cell and push it
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the start draw fails
    pub fn new(config: &MazeConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let mut grid = MazeGrid::new(config.width, config.height)?;

        let start = match config.start {
            StartCell::Random => Coord::new(
                rng.choose_index(config.width)?,
                rng.choose_index(config.height)?,
            ),
            StartCell::Legacy => Coord::new(
                rng.choose_index(config.width.saturating_sub(1).max(1))?,
                rng.choose_index(config.height.saturating_sub(1).max(1))?,
            ),
            StartCell::Fixed(coord) => coord,
        };

        grid.mark_visited(start)?;
        log::debug!(
            "Starting {}x{} maze at {start}",
            config.width,
            config.height
        );

        let mut stack = Vec::with_capacity(grid.cell_count());
        stack.push(start);

        Ok(Self {
            grid,
            stack,
            visited: 1,
            steps: 0,
            rng,
        })
    }

    /// Read-only view of the grid as built so far
    pub const fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    /// Number of cells incorporated into the tree
    pub const fn visited(&self) -> usize {
        self.visited
    }

    /// Number of steps taken so far
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Current depth of the backtracking stack
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Whether every cell has been visited
    pub const fn is_complete(&self) -> bool {
        self.visited >= self.grid.cell_count()
    }

    /// Advance the walk by one carve or backtrack
    ///
    /// Returns `None` once every cell is visited.
    ///
    /// # Errors
    ///
    /// Returns an error if the randomness source fails or the stack empties
    /// before full coverage
    pub fn step(&mut self) -> Result<Option<BuildEvent>> {
        if self.is_complete() {
            return Ok(None);
        }

        let current = *self.stack.last().ok_or_else(|| {
            invariant_violation(
                "backtrack",
                &format!(
                    "stack exhausted with {} of {} cells visited",
                    self.visited,
                    self.grid.cell_count()
                ),
            )
        })?;

        let candidates = self.candidates(current);
        self.steps += 1;

        if candidates.is_empty() {
            self.stack.pop();
            log::trace!("Backtracking from {current}");
            return Ok(Some(BuildEvent::Backtrack { from: current }));
        }

        let choice = self.rng.choose_index(candidates.len())?;
        let direction = candidates.get(choice).copied().ok_or_else(|| {
            random_source_failure(&format!(
                "index {choice} drawn for {} candidates",
                candidates.len()
            ))
        })?;

        let to = self.grid.carve(current, direction)?;
        self.stack.push(to);
        self.visited += 1;
        log::trace!("Carved {direction} from {current} to {to}");

        Ok(Some(BuildEvent::Carve {
            from: current,
            to,
            direction,
        }))
    }

    /// Run the walk to completion and verify the result
    ///
    /// # Errors
    ///
    /// Returns an error if any step fails or the finished grid breaks an invariant
    pub fn finish(mut self) -> Result<MazeGrid> {
        while self.step()?.is_some() {}
        self.into_grid()
    }

    /// Verify a completed walk and release its grid, discarding the stack
    ///
    /// # Errors
    ///
    /// Returns an error if the walk is incomplete or the grid breaks an invariant
    pub fn into_grid(self) -> Result<MazeGrid> {
        let counted = self.grid.visited_count();
        if !self.is_complete() || counted != self.visited {
            return Err(invariant_violation(
                "coverage",
                &format!(
                    "tally {} and grid count {counted} for {} cells",
                    self.visited,
                    self.grid.cell_count()
                ),
            ));
        }
        check_symmetry(&self.grid)?;

        log::debug!(
            "Finished {}x{} maze in {} steps ({} left on stack)",
            self.grid.width(),
            self.grid.height(),
            self.steps,
            self.stack.len()
        );
        Ok(self.grid)
    }

    fn candidates(&self, current: Coord) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&direction| {
                self.grid
                    .neighbor(current, direction)
                    .is_some_and(|next| !self.grid.is_visited(next))
            })
            .collect()
    }
}

/// Generate a complete perfect maze
///
/// `path_width` is validated here so a bad layout request fails before any work.
///
/// # Errors
///
/// Returns an error if a parameter is invalid, the randomness source fails,
/// or an internal invariant is violated
pub fn generate<R: RandomSource>(
    width: usize,
    height: usize,
    path_width: usize,
    rng: R,
) -> Result<MazeGrid> {
    generate_with(&MazeConfig::new(width, height, path_width), rng)
}

/// Generate a complete perfect maze from a full configuration
///
/// # Errors
///
/// Returns an error if a parameter is invalid, the randomness source fails,
/// or an internal invariant is violated
pub fn generate_with<R: RandomSource>(config: &MazeConfig, rng: R) -> Result<MazeGrid> {
    MazeBuilder::new(config, rng)?.finish()
}
