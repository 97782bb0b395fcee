//! Column progress display while a mosaic is composited

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} columns ({{elapsed_precise}})"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar tracking finished source columns
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a hidden progress manager; call [`ProgressManager::initialize`] to show it
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Show a bar for `columns` source columns labelled with `label`
    pub fn initialize(&mut self, columns: u32, label: &str) {
        let bar = ProgressBar::new(u64::from(columns));
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_message(label.to_string());
        self.bar = bar;
    }

    /// Record that `completed` columns are done
    pub fn update(&self, completed: u32) {
        self.bar.set_position(u64::from(completed));
    }

    /// Number of columns reported so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
