//! Renaming survivors to their fingerprint-derived names.
//!
//! A file whose target name is held by another pending file waits until that
//! occupant has been renamed. Chains are resolved with an explicit stack;
//! cycles are broken by moving one member to a temporary name.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::fs::naming::{exists, hashname, parking_name, same_name_ignoring_case};
use crate::output::{Event, Notifier, Phase, Progress};
use crate::process::dedupe::display_name;
use crate::process::record::FileRecord;

/// Counts from a rename pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenameSummary {
    pub renamed: u64,
    pub already_named: u64,
    pub parked: u64,
    pub failed: u64,
}

/// Rename every survivor in `record` to `<dir>/<fingerprint><ext>`.
///
/// A failed rename is reported and the pass moves on; earlier renames stay.
pub fn rename_all(mut record: FileRecord, notifier: &dyn Notifier) -> RenameSummary {
    let mut summary = RenameSummary::default();
    let survivors = record.survivors();
    let total = survivors.len();

    for (index, (path, _)) in survivors.into_iter().enumerate() {
        notifier.progress(Progress {
            phase: Phase::Renaming,
            index: index + 1,
            total,
            file: display_name(&path),
        });

        // Already handled while clearing the way for another file
        if record.fingerprint_of(&path).is_none() {
            continue;
        }

        let mut stack = vec![path];
        let mut parked = HashMap::new();
        if let Err(e) = resolve(&mut record, &mut stack, &mut parked, &mut summary, notifier) {
            tracing::warn!("Rename failed: {}", e);
            fail_stack(&mut record, stack, &parked, &e, &mut summary, notifier);
        }
    }

    summary
}

/// Rename the file on top of `stack`, renaming occupants of its target first.
///
/// On error the stack still holds the unresolved chain, top first to fail.
/// Files moved aside are tracked in `parked` (temporary path to original).
fn resolve(
    record: &mut FileRecord,
    stack: &mut Vec<PathBuf>,
    parked: &mut HashMap<PathBuf, PathBuf>,
    summary: &mut RenameSummary,
    notifier: &dyn Notifier,
) -> Result<()> {
    while let Some(current) = stack.last().cloned() {
        let fingerprint = match record.fingerprint_of(&current) {
            Some(fingerprint) => fingerprint,
            None => {
                stack.pop();
                continue;
            }
        };
        let target = hashname(&current, fingerprint);

        if same_name_ignoring_case(&current, &target) {
            record.remove_path(&current);
            summary.already_named += 1;
            notifier.notify(Event::AlreadyNamed { path: current });
            stack.pop();
            continue;
        }

        if exists(&target) {
            let occupant = record
                .find_path(&target)
                .filter(|occupant| *occupant != current)
                .ok_or_else(|| Error::TargetOccupied {
                    from: current.clone(),
                    to: target.clone(),
                })?;

            match stack.iter().position(|waiting| *waiting == occupant) {
                // The occupant is itself waiting on `current`: move it aside
                Some(slot) => {
                    let aside = parking_name(&occupant);
                    move_file(&occupant, &aside)?;
                    record.move_path(&occupant, aside.clone());
                    stack[slot] = aside.clone();
                    parked.insert(aside.clone(), occupant.clone());
                    summary.parked += 1;
                    notifier.notify(Event::Parked {
                        from: occupant,
                        to: aside,
                    });
                }
                None => {
                    stack.push(occupant);
                    continue;
                }
            }
        }

        move_file(&current, &target)?;
        record.remove_path(&current);
        summary.renamed += 1;
        tracing::debug!("Renamed {} -> {}", current.display(), target.display());
        notifier.notify(Event::Renamed {
            from: current,
            to: target,
        });
        stack.pop();
    }

    Ok(())
}

fn move_file(from: &Path, to: &Path) -> Result<()> {
    std::fs::rename(from, to).map_err(|source| Error::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}

/// Give up on every file in an unresolved chain.
///
/// Parked files are moved back to their original names where possible.
fn fail_stack(
    record: &mut FileRecord,
    stack: Vec<PathBuf>,
    parked: &HashMap<PathBuf, PathBuf>,
    error: &Error,
    summary: &mut RenameSummary,
    notifier: &dyn Notifier,
) {
    let original_of = |path: &PathBuf| parked.get(path).cloned().unwrap_or_else(|| path.clone());
    let blocker = stack.last().map(original_of);

    for path in stack.into_iter().rev() {
        record.remove_path(&path);
        summary.failed += 1;

        let original = original_of(&path);
        let mut message = match &blocker {
            Some(blocker) if *blocker != original => {
                format!("waiting on {} which failed: {}", blocker.display(), error)
            }
            _ => error.to_string(),
        };

        let path = if original == path {
            path
        } else if exists(&original) {
            message = format!("{}; left at {}", message, path.display());
            path
        } else {
            match move_file(&path, &original) {
                Ok(()) => original,
                Err(e) => {
                    message = format!("{}; left at {} ({})", message, path.display(), e);
                    path
                }
            }
        };
        notifier.notify(Event::RenameFailed {
            path,
            error: message,
        });
    }
}
