//! Terminal progress reporting over evolution rounds

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

use crate::algorithm::evolver::RoundObserver;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::spatial::grid::TileGrid;

static ROUND_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} rounds"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar advanced once per completed round
pub struct RoundProgress {
    bar: ProgressBar,
}

impl RoundProgress {
    /// Create a bar for a run of `rounds` rounds, labelled with `label`
    pub fn new(rounds: usize, label: &str) -> Self {
        let bar = ProgressBar::new(rounds as u64);
        bar.set_style(ROUND_STYLE.clone());
        bar.set_prefix(label.to_string());
        Self { bar }
    }

    /// Create a bar that never draws, for quiet runs and tests
    pub fn hidden(rounds: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(rounds as u64);
        Self { bar }
    }

    /// Rounds reported so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Complete and clear the bar
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl RoundObserver for RoundProgress {
    fn on_round(&mut self, round: usize, _grid: &TileGrid) {
        self.bar.set_position(round as u64);
    }
}
