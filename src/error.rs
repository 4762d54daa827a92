//! Error types for hashnamer.

use std::path::PathBuf;

use thiserror::Error;

use crate::fingerprint::Fingerprint;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not a valid folder: {path} ({reason})")]
    InvalidPath { path: String, reason: String },

    #[error("No valid folder to work on")]
    NoFolder,

    #[error("Failed to read input: {0}")]
    Prompt(#[source] std::io::Error),

    // Dedupe errors
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to delete duplicate {}: {source}", path.display())]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "{} and {} share fingerprint {fingerprint} but their contents differ; nothing was deleted",
        duplicate.display(),
        original.display()
    )]
    FingerprintCollision {
        duplicate: PathBuf,
        original: PathBuf,
        fingerprint: Fingerprint,
    },

    // Rename errors
    #[error("Failed to rename {} to {}: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot rename {} to {}: target is occupied by something that is not being renamed", from.display(), to.display())]
    TargetOccupied { from: PathBuf, to: PathBuf },

    #[error("{0} file(s) could not be renamed")]
    RenameFailures(u64),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const ABORT: i32 = 1;
    pub const CONFIG_ERROR: i32 = 2;
    pub const PROCESSING_ERROR: i32 = 3;
    pub const RENAME_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
