//! Progress display for the load and merge phases

use crate::algorithm::assembler::MergeRecord;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static PHASE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix:>8}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress bars for one reassembly run
///
/// One bar tracks decoding of the source files, a second one tracks merge
/// rounds once assembly starts.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    load_bar: Option<ProgressBar>,
    merge_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bars yet
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            load_bar: None,
            merge_bar: None,
        }
    }

    fn phase_bar(&self, prefix: &'static str, length: usize) -> ProgressBar {
        let bar = ProgressBar::new(length as u64);
        bar.set_style(PHASE_STYLE.clone());
        bar.set_prefix(prefix);
        self.multi_progress.add(bar)
    }

    /// Begin the load phase for `file_count` files
    pub fn start_loading(&mut self, file_count: usize) {
        self.load_bar = Some(self.phase_bar("load", file_count));
    }

    /// Report a decoded file
    pub fn file_loaded(&self, path: &Path) {
        if let Some(ref bar) = self.load_bar {
            bar.set_message(
                path.file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string(),
            );
            bar.inc(1);
        }
    }

    /// Begin the merge phase for `rounds` rounds
    pub fn start_merging(&mut self, rounds: usize) {
        if let Some(ref bar) = self.load_bar {
            bar.finish_with_message("done");
        }
        self.merge_bar = Some(self.phase_bar("merge", rounds));
    }

    /// Report a completed merge round
    pub fn round_completed(&self, record: &MergeRecord) {
        if let Some(ref bar) = self.merge_bar {
            let (left, right) = record.sides();
            bar.set_message(format!("{left} + {right} (cost {})", record.cost));
            bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        for bar in [&self.load_bar, &self.merge_bar].into_iter().flatten() {
            bar.finish_and_clear();
        }
        let _ = self.multi_progress.clear();
    }
}
