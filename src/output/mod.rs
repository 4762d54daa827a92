//! Output module for console output and progress.
//!
//! Provides:
//! - Processing events and the `Notifier` trait
//! - A background console sink that never blocks the caller
//! - Colored console output
//! - Progress bars
//! - Statistics reporting

pub mod console;
pub mod events;
pub mod progress;
pub mod sink;
pub mod stats;

pub use console::{
    print_banner, print_config_summary, print_error, print_event, print_info, print_success,
    print_warning,
};
#[cfg(test)]
pub use events::RecordingNotifier;
pub use events::{Event, Level, Notifier, Phase, Progress};
pub use progress::{apply_progress, create_status_bar};
pub use sink::ConsoleSink;
pub use stats::{print_folder_stats, print_run_stats, print_summary};
