//! Strategies for removing duplicate files.
//!
//! Every strategy reports failure as an error; none of them may succeed
//! without the file being gone from its folder.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{Config, DeleteMode};
use crate::error::{Error, Result};
use crate::fs::naming::make_unique_filename;
use crate::fs::paths::{ensure_dir, same_dir};

/// Removes a duplicate file from its folder.
pub trait Deleter: fmt::Debug {
    /// Remove the file at `path`.
    fn delete(&self, path: &Path) -> io::Result<()>;
}

/// Sends files to the platform recycle bin.
#[derive(Debug, Default)]
pub struct TrashDeleter;

impl Deleter for TrashDeleter {
    fn delete(&self, path: &Path) -> io::Result<()> {
        trash::delete(path).map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
    }
}

/// Removes files permanently.
#[derive(Debug, Default)]
pub struct PermanentDeleter;

impl Deleter for PermanentDeleter {
    fn delete(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }
}

/// Moves files into a quarantine folder, keeping their names unique there.
#[derive(Debug)]
pub struct QuarantineDeleter {
    dir: PathBuf,
}

impl QuarantineDeleter {
    /// Create a quarantine deleter, creating the folder if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        ensure_dir(&dir)?;
        Ok(Self { dir })
    }

    /// The folder duplicates are moved into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Deleter for QuarantineDeleter {
    fn delete(&self, path: &Path) -> io::Result<()> {
        let file_name = path
            .file_name()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Invalid file name"))?;

        // Moving within the same folder would only rename the duplicate
        if let Some(parent) = path.parent() {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            if same_dir(parent, &self.dir) {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "file is already in the quarantine folder",
                ));
            }
        }

        let dest = make_unique_filename(&self.dir.join(file_name));

        match std::fs::rename(path, &dest) {
            Ok(()) => Ok(()),
            Err(rename_err) => {
                // Quarantine may live on another device
                tracing::debug!(
                    "Rename into quarantine failed ({}), copying {} instead",
                    rename_err,
                    path.display()
                );
                if std::fs::copy(path, &dest).is_err() {
                    let _ = std::fs::remove_file(&dest);
                    return Err(rename_err);
                }
                std::fs::remove_file(path)
            }
        }
    }
}

/// Build the deleter selected by the configuration.
pub fn deleter_for(config: &Config) -> Result<Box<dyn Deleter>> {
    match config.delete_mode {
        DeleteMode::Trash => Ok(Box::new(TrashDeleter)),
        DeleteMode::Permanent => Ok(Box::new(PermanentDeleter)),
        DeleteMode::Quarantine => {
            let dir = config.quarantine_dir.as_ref().ok_or_else(|| {
                Error::Config("--quarantine-dir is required for quarantine mode".into())
            })?;
            Ok(Box::new(QuarantineDeleter::new(dir)?))
        }
    }
}
