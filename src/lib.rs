//! hashnamer - deduplicate folders by content and rename files to their hash.
//!
//! Every regular file directly inside a folder is fingerprinted with MD5. The
//! first file seen for each fingerprint is kept and later copies are removed;
//! the survivors are then renamed to `<FINGERPRINT><extension>` in place.
//!
//! # Features
//!
//! - Streaming MD5 fingerprints rendered as 32 uppercase hex digits
//! - Optional byte-for-byte confirmation before a duplicate is removed
//! - Recycle bin, permanent, or quarantine-folder removal of duplicates
//! - Rename collision and cycle resolution without overwriting anything
//! - Non-blocking console output with a coalesced status line
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use hashnamer::{fs::PermanentDeleter, output::ConsoleSink, process_folder};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sink = ConsoleSink::spawn(false);
//!     let summary = process_folder(Path::new("photos"), &PermanentDeleter, true, &sink)?;
//!     sink.finish();
//!
//!     println!("{} renamed, {} duplicates", summary.renamed, summary.duplicates);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod fs;
pub mod output;
pub mod process;

// Re-exports for convenience
pub use config::{Config, DeleteMode};
pub use error::{Error, Result};
pub use fingerprint::{fingerprint_file, Fingerprint};
pub use process::{process_folder, process_folders, FolderSummary, RunSummary};
