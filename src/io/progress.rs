//! Stage progress display for a composition run

use crate::generation::Stage;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar that ticks once per composer stage
pub struct StageProgress {
    bar: ProgressBar,
    started: usize,
}

impl Default for StageProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl StageProgress {
    /// Progress bar drawn to stderr
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    /// Progress bar that tracks position without drawing
    pub fn hidden() -> Self {
        Self::with_target(ProgressDrawTarget::hidden())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(Stage::ALL.len() as u64), target);
        bar.set_style(STAGE_STYLE.clone());
        bar.set_prefix("district");
        Self { bar, started: 0 }
    }

    /// Record that `stage` has begun, completing the one before it
    pub fn begin(&mut self, stage: Stage) {
        if self.started > 0 {
            self.bar.inc(1);
        }
        self.started += 1;
        self.bar.set_message(stage.label());
    }

    /// Mark the final stage complete and clear the bar
    pub fn finish(&self) {
        self.bar.set_position(Stage::ALL.len() as u64);
        self.bar.finish_and_clear();
    }

    /// Stages completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Stages begun so far
    pub const fn started(&self) -> usize {
        self.started
    }
}
