//! Per-folder pipeline: list, dedupe, rename.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fs::{list_files, Deleter};
use crate::output::{Event, Notifier};
use crate::process::dedupe::dedupe;
use crate::process::rename::rename_all;

/// Outcome of processing one folder.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FolderSummary {
    pub folder: PathBuf,
    pub files: u64,
    pub duplicates: u64,
    pub renamed: u64,
    pub already_named: u64,
    pub parked: u64,
    pub failed: u64,
}

/// Totals across every folder in a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub folders: Vec<FolderSummary>,
}

impl RunSummary {
    /// Record a processed folder.
    pub fn add_folder(&mut self, summary: FolderSummary) {
        self.folders.push(summary);
    }

    pub fn files(&self) -> u64 {
        self.folders.iter().map(|f| f.files).sum()
    }

    pub fn duplicates(&self) -> u64 {
        self.folders.iter().map(|f| f.duplicates).sum()
    }

    pub fn renamed(&self) -> u64 {
        self.folders.iter().map(|f| f.renamed).sum()
    }

    pub fn already_named(&self) -> u64 {
        self.folders.iter().map(|f| f.already_named).sum()
    }

    pub fn failed(&self) -> u64 {
        self.folders.iter().map(|f| f.failed).sum()
    }
}

/// Deduplicate one folder and rename its survivors to their fingerprints.
///
/// Read and delete errors abort with an error; rename failures are counted in
/// the summary.
pub fn process_folder(
    folder: &Path,
    deleter: &dyn Deleter,
    verify: bool,
    notifier: &dyn Notifier,
) -> Result<FolderSummary> {
    let files = list_files(folder)?;
    tracing::debug!("Processing {} ({} files)", folder.display(), files.len());
    notifier.notify(Event::FolderStarted {
        folder: folder.to_path_buf(),
        files: files.len(),
    });

    let (record, dedupe_summary) = dedupe(&files, deleter, verify, notifier)?;
    notifier.notify(Event::DedupeFinished {
        folder: folder.to_path_buf(),
        duplicates: dedupe_summary.duplicates,
    });

    let rename_summary = rename_all(record, notifier);
    notifier.notify(Event::FolderFinished {
        folder: folder.to_path_buf(),
    });

    Ok(FolderSummary {
        folder: folder.to_path_buf(),
        files: dedupe_summary.files,
        duplicates: dedupe_summary.duplicates,
        renamed: rename_summary.renamed,
        already_named: rename_summary.already_named,
        parked: rename_summary.parked,
        failed: rename_summary.failed,
    })
}

/// Process folders one at a time, in order, stopping at the first fatal error.
pub fn process_folders(
    folders: &[PathBuf],
    deleter: &dyn Deleter,
    verify: bool,
    notifier: &dyn Notifier,
) -> Result<RunSummary> {
    let mut run = RunSummary::default();
    for folder in folders {
        run.add_folder(process_folder(folder, deleter, verify, notifier)?);
    }
    Ok(run)
}
