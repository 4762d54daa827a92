//! Hash-based filename generation.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::fingerprint::Fingerprint;

/// Build the target path for a file: same directory, fingerprint as the stem,
/// original extension (including the dot) kept verbatim.
///
/// `/data/sub/picture.PNG` with fingerprint `AB..12` becomes `/data/sub/AB..12.PNG`.
pub fn hashname(path: &Path, fingerprint: Fingerprint) -> PathBuf {
    let mut name = OsString::from(fingerprint.to_string());
    if let Some(ext) = file_extension(path) {
        name.push(".");
        name.push(ext);
    }

    match path.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}

/// Text after the last dot of the file name, without the dot.
///
/// Unlike `Path::extension`, a leading-dot name is all extension (`.gitignore`
/// gives `gitignore`). A trailing dot gives none.
fn file_extension(path: &Path) -> Option<&OsStr> {
    let name = path.file_name()?;
    let ext = match name.to_str() {
        Some(name) => OsStr::new(&name[name.rfind('.')? + 1..]),
        // Non UTF-8 names fall back to the standard split
        None => path.extension()?,
    };

    if ext.is_empty() {
        None
    } else {
        Some(ext)
    }
}

/// Compare two paths ignoring case, the way case-insensitive filesystems do.
pub fn same_name_ignoring_case(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    a.to_string_lossy().to_lowercase() == b.to_string_lossy().to_lowercase()
}

/// Generate a path that does not exist yet by appending a number to the stem.
pub fn make_unique_filename(path: &Path) -> PathBuf {
    if !exists(path) {
        return path.to_path_buf();
    }

    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let parent = path.parent().unwrap_or(Path::new("."));

    let mut counter: u64 = 1;
    loop {
        let new_name = if ext.is_empty() {
            format!("{}_{}", stem, counter)
        } else {
            format!("{}_{}.{}", stem, counter, ext)
        };

        let new_path = parent.join(&new_name);
        if !exists(&new_path) {
            return new_path;
        }

        counter += 1;
    }
}

/// Free temporary name in the same folder, keeping the extension, used to
/// move a file out of the way during a rename cycle.
pub fn parking_name(path: &Path) -> PathBuf {
    let parent = path.parent().unwrap_or(Path::new(""));

    let mut counter: u64 = 1;
    loop {
        let mut name = OsString::from(format!("hashnamer-tmp-{}", counter));
        if let Some(ext) = file_extension(path) {
            name.push(".");
            name.push(ext);
        }

        let candidate = parent.join(name);
        if !exists(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// Whether anything (file, directory, or dangling symlink) sits at `path`.
pub fn exists(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fp() -> Fingerprint {
        "AB000000000000000000000000000012".parse().unwrap()
    }

    #[test]
    fn test_hashname_keeps_directory_and_extension() {
        assert_eq!(
            hashname(Path::new("/data/sub/picture.PNG"), fp()),
            PathBuf::from("/data/sub/AB000000000000000000000000000012.PNG")
        );
    }

    #[test]
    fn test_hashname_without_extension() {
        assert_eq!(
            hashname(Path::new("/data/README"), fp()),
            PathBuf::from("/data/AB000000000000000000000000000012")
        );
    }

    #[test]
    fn test_hashname_uses_last_extension_only() {
        assert_eq!(
            hashname(Path::new("/data/archive.tar.gz"), fp()),
            PathBuf::from("/data/AB000000000000000000000000000012.gz")
        );
    }

    #[test]
    fn test_hashname_keeps_dotfile_name_as_extension() {
        assert_eq!(
            hashname(Path::new("/data/.gitignore"), fp()),
            PathBuf::from("/data/AB000000000000000000000000000012.gitignore")
        );
        assert_eq!(
            hashname(Path::new("/data/.config.bak"), fp()),
            PathBuf::from("/data/AB000000000000000000000000000012.bak")
        );
    }

    #[test]
    fn test_hashname_trailing_dot_has_no_extension() {
        assert_eq!(
            hashname(Path::new("/data/notes."), fp()),
            PathBuf::from("/data/AB000000000000000000000000000012")
        );
    }

    #[test]
    fn test_hashname_of_hashname_is_unchanged() {
        let named = hashname(Path::new("/data/.gitignore"), fp());
        assert_eq!(hashname(&named, fp()), named);
    }

    #[test]
    fn test_hashname_relative_path() {
        assert_eq!(
            hashname(Path::new("photo.jpg"), fp()),
            PathBuf::from("AB000000000000000000000000000012.jpg")
        );
    }

    #[test]
    fn test_same_name_ignoring_case() {
        assert!(same_name_ignoring_case(
            Path::new("/d/ab12.txt"),
            Path::new("/d/AB12.TXT")
        ));
        assert!(!same_name_ignoring_case(
            Path::new("/d/ab12.txt"),
            Path::new("/d/ab13.txt")
        ));
    }

    #[test]
    fn test_make_unique_filename() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("file.txt");
        assert_eq!(make_unique_filename(&path), path);

        fs::write(&path, b"x").unwrap();
        assert_eq!(make_unique_filename(&path), dir.path().join("file_1.txt"));

        fs::write(dir.path().join("file_1.txt"), b"x").unwrap();
        assert_eq!(make_unique_filename(&path), dir.path().join("file_2.txt"));
    }

    #[test]
    fn test_parking_name_keeps_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.JPG");
        fs::write(&path, b"x").unwrap();
        fs::write(dir.path().join("hashnamer-tmp-1.JPG"), b"y").unwrap();

        let parked = parking_name(&path);
        assert_eq!(parked, dir.path().join("hashnamer-tmp-2.JPG"));
        assert_eq!(parking_name(&dir.path().join("noext")), dir.path().join("hashnamer-tmp-1"));
        assert_eq!(
            parking_name(&dir.path().join(".env")),
            dir.path().join("hashnamer-tmp-1.env")
        );
    }
}
