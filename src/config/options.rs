//! Run configuration.

use std::path::PathBuf;

use crate::config::modes::DeleteMode;

/// Options for a hashnamer run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Folders to process, in order, as given on the command line.
    pub folders: Vec<String>,

    /// How duplicates are removed.
    pub delete_mode: DeleteMode,

    /// Destination for quarantined duplicates.
    pub quarantine_dir: Option<PathBuf>,

    /// Compare bytes before deleting a file whose fingerprint matched.
    pub verify_duplicates: bool,

    /// Hide per-file messages and the status line.
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            folders: Vec::new(),
            delete_mode: DeleteMode::default(),
            quarantine_dir: None,
            verify_duplicates: true,
            quiet: false,
        }
    }
}
