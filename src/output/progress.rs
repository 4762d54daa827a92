//! Progress bar utilities.

use indicatif::{ProgressBar, ProgressStyle};

use crate::output::events::Progress;

/// Create the per-folder status bar.
pub fn create_status_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} {prefix:>8} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {wide_msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    bar
}

/// Show a status update on the bar.
pub fn apply_progress(bar: &ProgressBar, progress: &Progress) {
    bar.set_length(progress.total as u64);
    bar.set_position(progress.index as u64);
    bar.set_prefix(progress.phase.to_string());
    bar.set_message(progress.file.clone());
}
