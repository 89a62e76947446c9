//! Progress display for batch map generation

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Maps: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for batch generation
///
/// A single bar tracks how many maps of the batch have been generated
/// and exported; single-map runs skip the display entirely.
pub struct ProgressManager {
    batch_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no active display
    pub const fn new() -> Self {
        Self { batch_bar: None }
    }

    /// Initialize the batch bar for a run of `count` maps
    ///
    /// Batches of one map stay silent.
    pub fn initialize(&mut self, count: usize) {
        if count > 1 {
            let bar = ProgressBar::new(count as u64);
            bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(bar);
        }
    }

    /// Mark one map of the batch as completed
    pub fn complete_map(&self) {
        if let Some(ref bar) = self.batch_bar {
            bar.inc(1);
        }
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.batch_bar {
            bar.finish_with_message("All maps generated");
        }
    }
}
