//! Folder processing.
//!
//! Provides:
//! - The per-folder fingerprint/path working set
//! - The dedupe pass (first file seen survives, later copies are removed)
//! - The rename pass with collision and cycle resolution

pub mod dedupe;
pub mod folder;
pub mod record;
pub mod rename;

pub use dedupe::{dedupe, DedupeSummary};
pub use folder::{process_folder, process_folders, FolderSummary, RunSummary};
pub use record::FileRecord;
pub use rename::{rename_all, RenameSummary};
