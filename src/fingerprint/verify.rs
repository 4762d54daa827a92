//! Byte-level comparison of two files.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};

const CHUNK_SIZE: usize = 8192;

/// Check whether two files hold exactly the same bytes.
pub fn same_contents(a: &Path, b: &Path) -> Result<bool> {
    let mut left = open(a)?;
    let mut right = open(b)?;

    let left_len = left.get_ref().metadata().map_err(|e| read_error(a, e))?.len();
    let right_len = right.get_ref().metadata().map_err(|e| read_error(b, e))?.len();
    if left_len != right_len {
        return Ok(false);
    }

    let mut left_buf = [0u8; CHUNK_SIZE];
    let mut right_buf = [0u8; CHUNK_SIZE];

    loop {
        let n = fill(&mut left, &mut left_buf).map_err(|e| read_error(a, e))?;
        let m = fill(&mut right, &mut right_buf).map_err(|e| read_error(b, e))?;

        if n != m || left_buf[..n] != right_buf[..m] {
            return Ok(false);
        }
        if n == 0 {
            return Ok(true);
        }
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| read_error(path, e))
}

fn read_error(path: &Path, source: std::io::Error) -> Error {
    Error::Read {
        path: path.to_path_buf(),
        source,
    }
}

/// Read until the buffer is full or the reader is exhausted.
fn fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..])? {
            0 => break,
            n => filled += n,
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_identical_files() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        let content = vec![7u8; CHUNK_SIZE * 2 + 5];
        fs::write(&a, &content).unwrap();
        fs::write(&b, &content).unwrap();

        assert!(same_contents(&a, &b).unwrap());
    }

    #[test]
    fn test_same_length_different_bytes() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        let mut content = vec![1u8; CHUNK_SIZE + 1];
        fs::write(&a, &content).unwrap();
        content[CHUNK_SIZE] = 2;
        fs::write(&b, &content).unwrap();

        assert!(!same_contents(&a, &b).unwrap());
    }

    #[test]
    fn test_different_lengths() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        fs::write(&a, b"abc").unwrap();
        fs::write(&b, b"abcd").unwrap();

        assert!(!same_contents(&a, &b).unwrap());
    }

    #[test]
    fn test_empty_files() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        fs::write(&a, b"").unwrap();
        fs::write(&b, b"").unwrap();

        assert!(same_contents(&a, &b).unwrap());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a");
        fs::write(&a, b"abc").unwrap();

        assert!(matches!(
            same_contents(&a, &dir.path().join("missing")),
            Err(Error::Read { .. })
        ));
    }
}
