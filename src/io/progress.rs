//! Phase-by-phase progress display for maze generation and export

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Shows one progress bar per pipeline phase
///
/// Each phase (carving, emission, animation) gets its own bar that stays on
/// screen with a tick mark once the phase completes.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    current: Option<ProgressBar>,
    completed: Vec<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PHASE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!("{{prefix:>10}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

impl ProgressManager {
    /// Create a progress manager with no active phase
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            current: None,
            completed: Vec::new(),
        }
    }

    /// Begin a new phase of `total` units, completing any phase still open
    pub fn start_phase(&mut self, label: &str, total: usize) {
        self.complete_phase();

        let bar = ProgressBar::new(total as u64);
        bar.set_style(PHASE_STYLE.clone());
        bar.set_prefix(label.to_string());
        self.current = Some(self.multi_progress.add(bar));
    }

    /// Report absolute progress within the current phase
    pub fn update(&self, position: usize) {
        if let Some(ref bar) = self.current {
            bar.set_position(position as u64);
        }
    }

    /// Attach a short status message to the current phase
    pub fn set_message(&self, message: impl Into<String>) {
        if let Some(ref bar) = self.current {
            bar.set_message(message.into());
        }
    }

    /// Mark the current phase complete
    pub fn complete_phase(&mut self) {
        if let Some(bar) = self.current.take() {
            if let Some(length) = bar.length() {
                bar.set_position(length);
            }
            bar.finish_with_message("✓");
            self.completed.push(bar);
        }
    }

    /// Close every phase and clear the display
    pub fn finish(&mut self) {
        self.complete_phase();
        let _ = self.multi_progress.clear();
    }

    /// Number of phases completed so far
    pub fn completed_phases(&self) -> usize {
        self.completed.len()
    }
}
