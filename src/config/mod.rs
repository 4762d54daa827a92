//! Configuration module for hashnamer.
//!
//! This module handles:
//! - Run options assembled from the command line
//! - Duplicate removal modes
//! - Folder argument validation

pub mod modes;
pub mod options;
pub mod validation;

pub use modes::DeleteMode;
pub use options::Config;
pub use validation::{
    clean_folder_input, collect_folders, validate_config, validate_folder, validate_quarantine_dir,
};
