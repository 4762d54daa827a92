//! Per-folder working set of fingerprints and the files that hold them.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::fingerprint::Fingerprint;

/// Survivor mapping for one folder.
///
/// `by_fingerprint` and `by_path` are always exact inverses of each other.
#[derive(Debug, Default, Clone)]
pub struct FileRecord {
    by_fingerprint: HashMap<Fingerprint, PathBuf>,
    by_path: HashMap<PathBuf, Fingerprint>,
    // Insertion order of fingerprints, for deterministic iteration
    order: Vec<Fingerprint>,
}

impl FileRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// The surviving path for a fingerprint, if one was recorded.
    pub fn survivor(&self, fingerprint: &Fingerprint) -> Option<&Path> {
        self.by_fingerprint.get(fingerprint).map(PathBuf::as_path)
    }

    /// The fingerprint recorded for a path.
    pub fn fingerprint_of(&self, path: &Path) -> Option<Fingerprint> {
        self.by_path.get(path).copied()
    }

    /// Record `path` as the survivor for `fingerprint`.
    ///
    /// Returns the existing survivor instead if the fingerprint is already
    /// known, leaving the record unchanged.
    pub fn insert(&mut self, fingerprint: Fingerprint, path: PathBuf) -> Option<&Path> {
        if self.by_fingerprint.contains_key(&fingerprint) {
            return self.survivor(&fingerprint);
        }

        self.by_path.insert(path.clone(), fingerprint);
        self.by_fingerprint.insert(fingerprint, path);
        self.order.push(fingerprint);
        None
    }

    /// Forget a path and its fingerprint.
    pub fn remove_path(&mut self, path: &Path) -> Option<Fingerprint> {
        let fingerprint = self.by_path.remove(path)?;
        self.by_fingerprint.remove(&fingerprint);
        Some(fingerprint)
    }

    /// Update the record after a file moved from `from` to `to`.
    pub fn move_path(&mut self, from: &Path, to: PathBuf) -> bool {
        match self.by_path.remove(from) {
            Some(fingerprint) => {
                self.by_path.insert(to.clone(), fingerprint);
                self.by_fingerprint.insert(fingerprint, to);
                true
            }
            None => false,
        }
    }

    /// Find the recorded path that `path` names, trying an exact match first
    /// and then a case-insensitive one.
    pub fn find_path(&self, path: &Path) -> Option<PathBuf> {
        if self.by_path.contains_key(path) {
            return Some(path.to_path_buf());
        }

        let wanted = path.to_string_lossy().to_lowercase();
        self.by_path
            .keys()
            .find(|candidate| candidate.to_string_lossy().to_lowercase() == wanted)
            .cloned()
    }

    /// Remaining survivors in the order they were first recorded.
    pub fn survivors(&self) -> Vec<(PathBuf, Fingerprint)> {
        self.order
            .iter()
            .filter_map(|fp| self.by_fingerprint.get(fp).map(|path| (path.clone(), *fp)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.by_fingerprint.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_fingerprint.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::fingerprint_bytes;

    #[test]
    fn test_insert_keeps_first_survivor() {
        let mut record = FileRecord::new();
        let fp = fingerprint_bytes(b"X");

        assert!(record.insert(fp, PathBuf::from("/d/a.txt")).is_none());
        assert_eq!(
            record.insert(fp, PathBuf::from("/d/b.txt")),
            Some(Path::new("/d/a.txt"))
        );
        assert_eq!(record.len(), 1);
        assert_eq!(record.fingerprint_of(Path::new("/d/a.txt")), Some(fp));
        assert_eq!(record.fingerprint_of(Path::new("/d/b.txt")), None);
    }

    #[test]
    fn test_maps_stay_inverse_after_move_and_remove() {
        let mut record = FileRecord::new();
        let x = fingerprint_bytes(b"X");
        let y = fingerprint_bytes(b"Y");
        record.insert(x, PathBuf::from("/d/a.txt"));
        record.insert(y, PathBuf::from("/d/c.txt"));

        assert!(record.move_path(Path::new("/d/a.txt"), PathBuf::from("/d/tmp")));
        assert_eq!(record.survivor(&x), Some(Path::new("/d/tmp")));
        assert_eq!(record.fingerprint_of(Path::new("/d/tmp")), Some(x));
        assert_eq!(record.fingerprint_of(Path::new("/d/a.txt")), None);

        assert_eq!(record.remove_path(Path::new("/d/c.txt")), Some(y));
        assert_eq!(record.survivor(&y), None);
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_survivors_in_insertion_order() {
        let mut record = FileRecord::new();
        let fps: Vec<_> = [b"3", b"1", b"2"].iter().map(|b| fingerprint_bytes(*b)).collect();
        for (i, fp) in fps.iter().enumerate() {
            record.insert(*fp, PathBuf::from(format!("/d/{}", i)));
        }
        record.remove_path(Path::new("/d/1"));

        let survivors = record.survivors();
        assert_eq!(
            survivors,
            vec![
                (PathBuf::from("/d/0"), fps[0]),
                (PathBuf::from("/d/2"), fps[2])
            ]
        );
    }

    #[test]
    fn test_find_path_ignores_case() {
        let mut record = FileRecord::new();
        record.insert(fingerprint_bytes(b"X"), PathBuf::from("/d/Photo.JPG"));

        assert_eq!(
            record.find_path(Path::new("/d/Photo.JPG")),
            Some(PathBuf::from("/d/Photo.JPG"))
        );
        assert_eq!(
            record.find_path(Path::new("/d/photo.jpg")),
            Some(PathBuf::from("/d/Photo.JPG"))
        );
        assert_eq!(record.find_path(Path::new("/d/other.jpg")), None);
    }
}
