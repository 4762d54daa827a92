//! Configuration and folder argument validation.

use std::path::PathBuf;

use crate::config::modes::DeleteMode;
use crate::config::options::Config;
use crate::error::{Error, Result};
use crate::fs::same_dir;

/// Validate the run options that do not depend on the folders.
pub fn validate_config(config: &Config) -> Result<()> {
    match (&config.delete_mode, &config.quarantine_dir) {
        (DeleteMode::Quarantine, None) => Err(Error::Config(
            "--quarantine-dir is required when --delete-mode is quarantine".to_string(),
        )),
        (DeleteMode::Quarantine, Some(dir)) if dir.exists() && !dir.is_dir() => {
            Err(Error::Config(format!(
                "Quarantine path is not a directory: {}",
                dir.display()
            )))
        }
        (mode, Some(_)) if *mode != DeleteMode::Quarantine => Err(Error::Config(format!(
            "--quarantine-dir only applies to quarantine mode (mode is {})",
            mode
        ))),
        _ => Ok(()),
    }
}

/// Refuse a quarantine folder that is also one of the folders being processed.
pub fn validate_quarantine_dir(config: &Config, folders: &[PathBuf]) -> Result<()> {
    let dir = match (&config.delete_mode, &config.quarantine_dir) {
        (DeleteMode::Quarantine, Some(dir)) => dir,
        _ => return Ok(()),
    };

    match folders.iter().find(|folder| same_dir(folder, dir)) {
        Some(folder) => Err(Error::Config(format!(
            "Quarantine folder {} is also being processed; duplicates would stay in it",
            folder.display()
        ))),
        None => Ok(()),
    }
}

/// Strip whitespace and surrounding quote characters from typed or pasted input.
pub fn clean_folder_input(input: &str) -> String {
    input
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim()
        .to_string()
}

/// Check that a folder argument names an existing directory.
pub fn validate_folder(candidate: &str) -> Result<PathBuf> {
    let invalid = |reason: &str| Error::InvalidPath {
        path: candidate.to_string(),
        reason: reason.to_string(),
    };

    if candidate.trim().is_empty() {
        return Err(invalid("path is empty"));
    }

    if candidate.contains('\0') {
        return Err(invalid("path contains a null byte"));
    }

    let path = PathBuf::from(candidate);
    let metadata = match std::fs::metadata(&path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(invalid("does not exist"))
        }
        Err(e) => return Err(invalid(&e.to_string())),
    };

    if !metadata.is_dir() {
        return Err(invalid("is not a folder"));
    }

    Ok(path)
}

/// Split folder arguments into valid folders and the reasons others were rejected.
pub fn collect_folders<S: AsRef<str>>(candidates: &[S]) -> (Vec<PathBuf>, Vec<Error>) {
    let mut folders = Vec::new();
    let mut rejected = Vec::new();

    for candidate in candidates {
        match validate_folder(candidate.as_ref()) {
            Ok(folder) => folders.push(folder),
            Err(e) => rejected.push(e),
        }
    }

    (folders, rejected)
}
