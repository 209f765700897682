//! SHA-256 fingerprints
//!
//! Provides a single fingerprint type used both for in-memory candidate
//! bytes and for files on disk, so the two are directly comparable. The
//! display format is `sha256:<hex>`.

use serde::{Serialize, Serializer};
use sha2::digest::Output;
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::{Error, Result};

/// Prefix for the display form of every fingerprint
const PREFIX: &str = "sha256:";

/// Read buffer for streaming file digests
const CHUNK_SIZE: usize = 64 * 1024;

/// A fixed-length SHA-256 digest of a byte sequence.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex digest without the `sha256:` prefix.
    ///
    /// This is the form written into a manifest's `Sha256` field.
    pub fn to_hex(&self) -> String {
        format!("{:x}", Output::<Sha256>::from(self.0))
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", PREFIX, self.to_hex())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({self})")
    }
}

impl Serialize for Fingerprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Compute the fingerprint of an in-memory byte sequence.
pub fn digest_bytes(data: &[u8]) -> Fingerprint {
    Fingerprint(Sha256::digest(data).into())
}

/// Compute the fingerprint of a file's contents.
///
/// The file is streamed in bounded chunks, so memory use does not grow
/// with file size.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the path does not exist and
/// [`Error::Io`] for any other read failure.
pub fn digest_file(path: impl AsRef<Path>) -> Result<Fingerprint> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; CHUNK_SIZE];

    loop {
        match file.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => hasher.update(&buf[..n]),
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::io(path, e)),
        }
    }

    Ok(Fingerprint(hasher.finalize().into()))
}
