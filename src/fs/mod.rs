//! Filesystem module.
//!
//! Provides:
//! - Non-recursive folder listing
//! - Hash-based filename generation
//! - Duplicate removal strategies (recycle bin, permanent, quarantine)

pub mod delete;
pub mod naming;
pub mod paths;

pub use delete::{deleter_for, Deleter, PermanentDeleter, QuarantineDeleter, TrashDeleter};
pub use naming::{hashname, make_unique_filename, same_name_ignoring_case};
pub use paths::{ensure_dir, list_files, same_dir};
