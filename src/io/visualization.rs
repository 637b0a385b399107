//! Frame capture and GIF generation for the carving process

use image::{Delay, Frame};
use std::path::Path;

use crate::algorithm::backtracker::BuildEvent;
use crate::io::configuration::{
    FINAL_FRAME_HOLD, MAX_VISUALIZATION_FRAMES, VIEWER_MIN_FRAME_DELAY_MS,
};
use crate::io::error::{MazeError, Result, invalid_parameter};
use crate::io::image::render_canvas;
use crate::io::progress::ProgressManager;
use crate::layout::canvas::TileCanvas;
use crate::layout::emitter::LayoutEmitter;
use crate::spatial::MazeGrid;

/// Records carve events so the walk can be replayed as an animation
///
/// Holds a snapshot of the grid taken before the first step (start cell
/// visited, no paths open) and every carve applied to it afterwards.
/// Backtracks change nothing visible and are only counted.
pub struct CarvingCapture {
    initial: MazeGrid,
    carves: Vec<BuildEvent>,
    backtracks: usize,
    path_width: usize,
    scale: u32,
}

impl CarvingCapture {
    /// Start capturing from the builder's initial grid
    pub fn new(initial: &MazeGrid, path_width: usize, scale: u32) -> Self {
        Self {
            initial: initial.clone(),
            carves: Vec::with_capacity(initial.cell_count().saturating_sub(1)),
            backtracks: 0,
            path_width,
            scale,
        }
    }

    /// Record one builder step
    pub fn record(&mut self, event: BuildEvent) {
        match event {
            BuildEvent::Carve { .. } => self.carves.push(event),
            BuildEvent::Backtrack { .. } => self.backtracks += 1,
        }
    }

    /// Recorded carve events in order
    pub fn carves(&self) -> &[BuildEvent] {
        &self.carves
    }

    /// Number of recorded backtracks
    pub const fn backtracks(&self) -> usize {
        self.backtracks
    }

    /// Carves replayed between two rendered frames
    ///
    /// Skips frames when the requested delay is below what viewers support,
    /// then further still to stay under `MAX_VISUALIZATION_FRAMES`.
    pub fn skip_factor(&self, frame_delay_ms: u32) -> usize {
        let viewer_skip = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms.max(1)) as usize
        } else {
            1
        };
        let cap_skip = self.carves.len().div_ceil(MAX_VISUALIZATION_FRAMES).max(1);
        viewer_skip.max(cap_skip)
    }

    /// Render the animation frames
    ///
    /// The first frame shows the start cell alone, the last frame the finished
    /// maze held for `FINAL_FRAME_HOLD` times the frame delay.
    ///
    /// # Errors
    ///
    /// Returns an error if a recorded carve cannot be replayed or rendering fails
    pub fn render_frames(
        &self,
        frame_delay_ms: u32,
        mut progress: Option<&mut ProgressManager>,
    ) -> Result<Vec<Frame>> {
        let skip_factor = self.skip_factor(frame_delay_ms);
        let delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let frame_total = self.carves.len() / skip_factor + 2;

        if let Some(pm) = progress.as_deref_mut() {
            pm.start_phase("animate", frame_total);
        }

        let mut grid = self.initial.clone();
        let mut frames = Vec::with_capacity(frame_total);
        frames.push(self.render_frame(&grid, delay_ms)?);

        for (index, event) in self.carves.iter().enumerate() {
            if let BuildEvent::Carve {
                from, direction, ..
            } = *event
            {
                grid.carve(from, direction)?;
            }

            if (index + 1) % skip_factor == 0 {
                frames.push(self.render_frame(&grid, delay_ms)?);
                if let Some(pm) = progress.as_deref() {
                    pm.update(frames.len());
                }
            }
        }

        frames.push(self.render_frame(&grid, delay_ms * FINAL_FRAME_HOLD)?);
        if let Some(pm) = progress.as_deref_mut() {
            pm.complete_phase();
        }

        Ok(frames)
    }

    /// Export the captured walk as an animated GIF
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `frame_delay_ms` is zero
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(
        &self,
        output_path: &Path,
        frame_delay_ms: u32,
        progress: Option<&mut ProgressManager>,
    ) -> Result<()> {
        if frame_delay_ms == 0 {
            return Err(invalid_parameter(
                "frame_delay_ms",
                &frame_delay_ms,
                &"must be at least 1",
            ));
        }

        let frames = self.render_frames(frame_delay_ms, progress)?;

        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
                    path: parent.to_path_buf(),
                    operation: "create directory",
                    source: e,
                })?;
            }
        }

        let file = std::fs::File::create(output_path).map_err(|e| MazeError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .set_repeat(image::codecs::gif::Repeat::Infinite)
            .map_err(|e| MazeError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        let frame_count = frames.len();
        encoder
            .encode_frames(frames)
            .map_err(|e| MazeError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        log::info!(
            "Wrote {frame_count} frames to {}",
            output_path.display()
        );
        Ok(())
    }

    fn render_frame(&self, grid: &MazeGrid, delay_ms: u32) -> Result<Frame> {
        let emitter = LayoutEmitter::new(grid, self.path_width)?;
        let canvas = TileCanvas::render(&emitter)?;
        let img = render_canvas(&canvas, self.scale)?;
        Ok(Frame::from_parts(
            img,
            0,
            0,
            Delay::from_numer_denom_ms(delay_ms, 1),
        ))
    }
}
