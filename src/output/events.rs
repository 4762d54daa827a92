//! Notifications emitted while processing folders.

use std::fmt;
use std::path::PathBuf;

use crate::fingerprint::Fingerprint;

/// A line-oriented notification. Delivered in the order it was emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    FolderStarted {
        folder: PathBuf,
        files: usize,
    },
    DuplicateFound {
        duplicate: PathBuf,
        original: PathBuf,
        fingerprint: Fingerprint,
    },
    DuplicateDeleted {
        path: PathBuf,
    },
    DedupeFinished {
        folder: PathBuf,
        duplicates: u64,
    },
    AlreadyNamed {
        path: PathBuf,
    },
    Renamed {
        from: PathBuf,
        to: PathBuf,
    },
    /// A file was moved to a temporary name to break a rename cycle.
    Parked {
        from: PathBuf,
        to: PathBuf,
    },
    RenameFailed {
        path: PathBuf,
        error: String,
    },
    FolderFinished {
        folder: PathBuf,
    },
}

/// How an event should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Event {
    /// Presentation level for the event.
    pub fn level(&self) -> Level {
        match self {
            Event::FolderStarted { .. } | Event::DedupeFinished { .. } => Level::Info,
            Event::DuplicateFound { .. } | Event::DuplicateDeleted { .. } => Level::Warning,
            Event::AlreadyNamed { .. } | Event::Parked { .. } => Level::Info,
            Event::Renamed { .. } | Event::FolderFinished { .. } => Level::Success,
            Event::RenameFailed { .. } => Level::Error,
        }
    }

    /// Per-file events, hidden in quiet mode.
    pub fn is_detail(&self) -> bool {
        matches!(
            self,
            Event::DuplicateFound { .. }
                | Event::DuplicateDeleted { .. }
                | Event::AlreadyNamed { .. }
                | Event::Renamed { .. }
                | Event::Parked { .. }
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::FolderStarted { folder, files } => {
                write!(f, "Working on folder {} ({} files)...", folder.display(), files)
            }
            Event::DuplicateFound {
                duplicate,
                original,
                fingerprint,
            } => write!(
                f,
                "Dupe detected! {} hashed as a duplicate of {} with an MD5 of {}",
                duplicate.display(),
                original.display(),
                fingerprint
            ),
            Event::DuplicateDeleted { path } => write!(f, "Deleted duplicate {}", path.display()),
            Event::DedupeFinished { folder, duplicates } => write!(
                f,
                "Dupes removed in {} ({} found), renaming files...",
                folder.display(),
                duplicates
            ),
            Event::AlreadyNamed { path } => {
                write!(f, "{} left alone; already has a hashname", path.display())
            }
            Event::Renamed { from, to } => {
                write!(f, "Renamed {} to {}", from.display(), to.display())
            }
            Event::Parked { from, to } => write!(
                f,
                "Moved {} aside to {} to break a rename cycle",
                from.display(),
                to.display()
            ),
            Event::RenameFailed { path, error } => {
                write!(f, "Could not rename {}: {}", path.display(), error)
            }
            Event::FolderFinished { folder } => write!(f, "Done with {}", folder.display()),
        }
    }
}

/// Which pass a progress update belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Hashing,
    Renaming,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Hashing => write!(f, "Hashing"),
            Phase::Renaming => write!(f, "Renaming"),
        }
    }
}

/// A status-line update. Only the latest one matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub phase: Phase,
    /// 1-based index of the file being worked on.
    pub index: usize,
    pub total: usize,
    pub file: String,
}

impl Progress {
    pub fn percent(&self) -> u64 {
        if self.total == 0 {
            return 100;
        }
        (self.index as u64 * 100) / self.total as u64
    }
}

/// Receives notifications from the folder processor.
///
/// Implementations must not block the caller on display I/O.
pub trait Notifier {
    /// Deliver a line event. Order across calls must be preserved.
    fn notify(&self, event: Event);

    /// Deliver a status update. May be coalesced or dropped.
    fn progress(&self, progress: Progress);
}

/// Collects events in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    events: std::sync::Mutex<Vec<Event>>,
    progress: std::sync::Mutex<Vec<Progress>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn progress_updates(&self) -> Vec<Progress> {
        self.progress.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }

    fn progress(&self, progress: Progress) {
        self.progress.lock().unwrap().push(progress);
    }
}
