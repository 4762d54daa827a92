//! Content fingerprinting.
//!
//! Provides:
//! - MD5 based file fingerprints held as two 64-bit halves
//! - Byte-for-byte comparison used to confirm duplicates

pub mod hash;
pub mod verify;

pub use hash::{fingerprint_bytes, fingerprint_file, Fingerprint};
pub use verify::same_contents;
