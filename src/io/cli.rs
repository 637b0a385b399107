//! Command-line interface for generating and rendering a single maze

use crate::algorithm::backtracker::{MazeBuilder, MazeConfig, StartCell};
use crate::algorithm::random::SeededSource;
use crate::analysis::topology::TopologyReport;
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_OUTPUT, DEFAULT_PATH_WIDTH, DEFAULT_SEED, DEFAULT_TILE_SCALE,
    DEFAULT_WIDTH, GIF_FRAME_DELAY_MS, VISUALIZATION_SUFFIX,
};
use crate::io::error::{Result, invariant_violation};
use crate::io::image::{export_canvas_as_png, image_size};
use crate::io::progress::ProgressManager;
use crate::io::text::render_ascii;
use crate::io::visualization::CarvingCapture;
use crate::layout::canvas::{TileCanvas, canvas_size};
use crate::layout::emitter::LayoutEmitter;
use crate::layout::placement::PlacementSink;
use crate::spatial::MazeGrid;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Start cell policy selectable from the command line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StartPolicy {
    /// Any cell, uniformly
    #[default]
    Random,
    /// Never the last column or row
    Legacy,
}

impl From<StartPolicy> for StartCell {
    fn from(policy: StartPolicy) -> Self {
        match policy {
            StartPolicy::Random => Self::Random,
            StartPolicy::Legacy => Self::Legacy,
        }
    }
}

#[derive(Parser)]
#[command(name = "mazeforge")]
#[command(
    author,
    version,
    about = "Generate a perfect maze and render its tile placement plan"
)]
/// Command-line arguments for the maze generator
// Output toggles are independent switches
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Maze width in cells
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Maze height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Placement units per cell edge
    #[arg(short, long, default_value_t = DEFAULT_PATH_WIDTH)]
    pub path_width: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Start cell policy
    #[arg(long, value_enum, default_value_t = StartPolicy::Random)]
    pub start: StartPolicy,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Pixels per placement unit in rendered images
    #[arg(long, default_value_t = DEFAULT_TILE_SCALE)]
    pub scale: u32,

    /// Also write an animated GIF of the carving process
    #[arg(short, long)]
    pub visualize: bool,

    /// Print the plan as text to stdout
    #[arg(short, long)]
    pub ascii: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log generation details
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Generation parameters described by the arguments
    pub fn maze_config(&self) -> MazeConfig {
        MazeConfig::new(self.width, self.height, self.path_width).with_start(self.start.into())
    }

    /// Check generation and output parameters before any work starts
    ///
    /// # Errors
    ///
    /// Returns an error if the maze parameters are invalid, or the plan or
    /// its image would exceed the output size limits at the requested scale
    pub fn validate(&self) -> Result<()> {
        let config = self.maze_config();
        config.validate()?;
        let (columns, rows) = canvas_size(config.width, config.height, config.path_width)?;
        image_size(columns, rows, self.scale)?;
        Ok(())
    }

    /// Default log filter for the arguments
    pub const fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Warn
        }
    }
}

/// Orchestrates generation, layout and export for one maze
pub struct MazeRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MazeRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate the maze and write every requested output
    ///
    /// # Errors
    ///
    /// Returns an error if parameters are invalid, generation fails, or an
    /// output cannot be written
    pub fn process(&mut self) -> Result<()> {
        let start_time = Instant::now();
        self.cli.validate()?;
        let config = self.cli.maze_config();

        let (grid, capture) = self.build(&config)?;

        let report = TopologyReport::analyze(&grid);
        if !report.is_perfect() {
            return Err(invariant_violation(
                "generation",
                &format!("finished grid is not a perfect maze: {report:?}"),
            ));
        }
        log::info!(
            "Generated {}x{} maze with {} edges and {} dead ends",
            grid.width(),
            grid.height(),
            report.edges,
            report.dead_ends
        );

        let canvas = self.layout(&grid, config.path_width)?;
        export_canvas_as_png(&canvas, self.cli.scale, &self.cli.output)?;

        if let Some(capture) = capture {
            let gif_path = Self::get_visualization_path(&self.cli.output);
            capture.export_gif(&gif_path, GIF_FRAME_DELAY_MS, self.progress_manager.as_mut())?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        if self.cli.ascii {
            Self::print_ascii(&canvas);
        }

        log::info!("Finished in {:.2?}", start_time.elapsed());
        Ok(())
    }

    fn build(&mut self, config: &MazeConfig) -> Result<(MazeGrid, Option<CarvingCapture>)> {
        let mut builder = MazeBuilder::new(config, SeededSource::seeded(self.cli.seed))?;
        let mut capture = self
            .cli
            .visualize
            .then(|| CarvingCapture::new(builder.grid(), config.path_width, self.cli.scale));

        let total = builder.grid().cell_count();
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_phase("carve", total);
        }

        while let Some(event) = builder.step()? {
            if let Some(ref mut capture) = capture {
                capture.record(event);
            }
            if let Some(ref pm) = self.progress_manager {
                pm.update(builder.visited());
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.set_message(format!("{} steps", builder.steps()));
        }
        let grid = builder.into_grid()?;
        Ok((grid, capture))
    }

    fn layout(&mut self, grid: &MazeGrid, path_width: usize) -> Result<TileCanvas> {
        let emitter = LayoutEmitter::new(grid, path_width)?;
        let mut canvas = TileCanvas::for_emitter(&emitter)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_phase("emit", grid.height());
        }

        for y in 0..grid.height() {
            canvas.place_all(emitter.row(y))?;
            if let Some(ref pm) = self.progress_manager {
                pm.update(y + 1);
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.set_message(format!("{} commands", emitter.command_count()));
            pm.complete_phase();
        }
        Ok(canvas)
    }

    // Allow print for the requested text rendering
    #[allow(clippy::print_stdout)]
    fn print_ascii(canvas: &TileCanvas) {
        print!("{}", render_ascii(canvas));
    }

    /// Path of the carving animation written next to `output`
    pub fn get_visualization_path(output: &Path) -> PathBuf {
        let stem = output.file_stem().unwrap_or_default();
        let name = format!("{}{VISUALIZATION_SUFFIX}.gif", stem.to_string_lossy());

        if let Some(parent) = output.parent() {
            parent.join(name)
        } else {
            PathBuf::from(name)
        }
    }
}
