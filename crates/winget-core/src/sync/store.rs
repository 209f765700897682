//! Reading and writing the target file

use std::path::Path;
use winget_fs::{Fingerprint, digest_file, io};

use crate::Result;

/// Fingerprint the file at `path`, or `None` if there is no file.
///
/// Any failure other than absence (permissions, the path being a
/// directory, a read error) is returned as an error. It is never folded
/// into `None`.
pub fn probe(path: &Path) -> Result<Option<Fingerprint>> {
    match digest_file(path) {
        Ok(fingerprint) => Ok(Some(fingerprint)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Where manifests are read from and written to.
pub trait ManifestStore {
    /// Fingerprint of the current content at `path`, if any.
    fn probe(&self, path: &Path) -> Result<Option<Fingerprint>>;

    /// Replace the content at `path` with `bytes`, all or nothing.
    fn persist(&self, path: &Path, bytes: &[u8]) -> Result<()>;
}

/// The local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStore;

impl ManifestStore for FsStore {
    fn probe(&self, path: &Path) -> Result<Option<Fingerprint>> {
        probe(path)
    }

    fn persist(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        io::write_atomic(path, bytes)?;
        Ok(())
    }
}

impl<S: ManifestStore + ?Sized> ManifestStore for &S {
    fn probe(&self, path: &Path) -> Result<Option<Fingerprint>> {
        (**self).probe(path)
    }

    fn persist(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        (**self).persist(path, bytes)
    }
}
