//! Duplicate detection and removal within one folder.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::fingerprint::{fingerprint_file, same_contents, Fingerprint};
use crate::fs::naming::exists;
use crate::fs::Deleter;
use crate::output::{Event, Notifier, Phase, Progress};
use crate::process::record::FileRecord;

/// Counts from a dedupe pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DedupeSummary {
    pub files: u64,
    pub duplicates: u64,
}

/// Fingerprint every path in order, keeping the first file seen for each
/// fingerprint and deleting every later one.
///
/// With `verify` set, a later file is only deleted after a byte comparison
/// with the survivor confirms it is identical.
pub fn dedupe(
    paths: &[PathBuf],
    deleter: &dyn Deleter,
    verify: bool,
    notifier: &dyn Notifier,
) -> Result<(FileRecord, DedupeSummary)> {
    dedupe_with(paths, fingerprint_file, deleter, verify, notifier)
}

fn dedupe_with<H>(
    paths: &[PathBuf],
    fingerprint: H,
    deleter: &dyn Deleter,
    verify: bool,
    notifier: &dyn Notifier,
) -> Result<(FileRecord, DedupeSummary)>
where
    H: Fn(&Path) -> Result<Fingerprint>,
{
    let mut record = FileRecord::new();
    let mut summary = DedupeSummary::default();
    let total = paths.len();

    for (index, path) in paths.iter().enumerate() {
        notifier.progress(Progress {
            phase: Phase::Hashing,
            index: index + 1,
            total,
            file: display_name(path),
        });

        let fingerprint = fingerprint(path)?;
        summary.files += 1;
        tracing::debug!("{} -> {}", path.display(), fingerprint);

        let original = match record.insert(fingerprint, path.clone()) {
            None => continue,
            Some(original) => original.to_path_buf(),
        };

        if verify && !same_contents(path, &original)? {
            return Err(Error::FingerprintCollision {
                duplicate: path.clone(),
                original,
                fingerprint,
            });
        }

        notifier.notify(Event::DuplicateFound {
            duplicate: path.clone(),
            original,
            fingerprint,
        });
        remove_duplicate(path, deleter)?;
        summary.duplicates += 1;
        notifier.notify(Event::DuplicateDeleted { path: path.clone() });
    }

    Ok((record, summary))
}

fn remove_duplicate(path: &Path, deleter: &dyn Deleter) -> Result<()> {
    let delete_error = |source| Error::Delete {
        path: path.to_path_buf(),
        source,
    };

    deleter.delete(path).map_err(delete_error)?;

    if exists(path) {
        return Err(delete_error(io::Error::new(
            io::ErrorKind::Other,
            "file is still present after deletion",
        )));
    }

    Ok(())
}

pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
