//! MD5 fingerprints for file contents.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use md5::{Digest, Md5};

use crate::error::{Error, Result};

/// Read buffer size used while streaming a file through the hasher.
const READ_BUFFER_SIZE: usize = 8192;

/// Length of the hex rendering of a fingerprint.
pub const HEX_LEN: usize = 32;

/// A 128-bit content fingerprint stored as two 64-bit halves.
///
/// Each half is read from the digest in little-endian byte order and rendered
/// as 16 uppercase hex digits, so `Display` yields 32 characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint {
    high: u64,
    low: u64,
}

impl Fingerprint {
    /// Build a fingerprint from its two halves.
    pub const fn from_halves(high: u64, low: u64) -> Self {
        Self { high, low }
    }
}

impl From<[u8; 16]> for Fingerprint {
    fn from(digest: [u8; 16]) -> Self {
        let mut high = [0u8; 8];
        let mut low = [0u8; 8];
        high.copy_from_slice(&digest[..8]);
        low.copy_from_slice(&digest[8..]);

        Self::from_halves(u64::from_le_bytes(high), u64::from_le_bytes(low))
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016X}{:016X}", self.high, self.low)
    }
}

impl FromStr for Fingerprint {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.len() != HEX_LEN || !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("Not a {}-digit hex fingerprint: {}", HEX_LEN, s));
        }

        let (high, low) = s.split_at(HEX_LEN / 2);
        let high = u64::from_str_radix(high, 16).map_err(|e| e.to_string())?;
        let low = u64::from_str_radix(low, 16).map_err(|e| e.to_string())?;

        Ok(Self { high, low })
    }
}

/// Compute the fingerprint of a file, streaming its contents.
pub fn fingerprint_file(path: &Path) -> Result<Fingerprint> {
    let read_error = |source| Error::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(read_error)?;
    let mut hasher = Md5::new();
    let mut buffer = [0u8; READ_BUFFER_SIZE];

    loop {
        let bytes_read = file.read(&mut buffer).map_err(read_error)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(from_digest(&hasher.finalize()))
}

/// Compute the fingerprint of an in-memory buffer.
pub fn fingerprint_bytes(bytes: &[u8]) -> Fingerprint {
    from_digest(&Md5::digest(bytes))
}

fn from_digest(digest: &[u8]) -> Fingerprint {
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(digest);
    Fingerprint::from(bytes)
}
