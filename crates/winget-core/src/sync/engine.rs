//! ManifestSync implementation

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use winget_fs::{Fingerprint, digest_bytes};
use winget_manifest::{ManifestRecord, encode, to_json_dump};

use super::decision::{SyncStatus, decide};
use super::store::{FsStore, ManifestStore};
use crate::Result;

/// Options for sync operations
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Decide the outcome but never write.
    pub dry_run: bool,
}

/// Report from a sync operation
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    /// What happened (or, in a dry run, what would have happened)
    pub status: SyncStatus,
    /// The target manifest path
    pub path: PathBuf,
    /// Fingerprint of the candidate's canonical bytes
    pub fingerprint: Fingerprint,
    /// Whether writing was skipped because of a dry run
    pub dry_run: bool,
    /// Indented JSON rendering of the candidate, for logs and tooling
    pub manifest_dump: String,
}

impl SyncReport {
    /// One-line human readable summary
    pub fn summary(&self) -> String {
        let path = self.path.display();
        match (self.status, self.dry_run) {
            (SyncStatus::Unchanged, _) => format!("Manifest {path} is up to date"),
            (SyncStatus::Created, false) => format!("Created manifest {path}"),
            (SyncStatus::Updated, false) => format!("Updated manifest {path}"),
            (SyncStatus::Created, true) => format!("[dry-run] Would create manifest {path}"),
            (SyncStatus::Updated, true) => format!("[dry-run] Would update manifest {path}"),
        }
    }
}

/// Writes a manifest only when its canonical content changed.
///
/// Every call encodes the record, fingerprints the bytes, probes the
/// target, and persists only for a create or an update. Running it twice
/// with the same record yields `Created` then `Unchanged`.
#[derive(Debug, Default)]
pub struct ManifestSync<S = FsStore> {
    store: S,
    options: SyncOptions,
}

impl ManifestSync<FsStore> {
    /// Sync against the local filesystem.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: ManifestStore> ManifestSync<S> {
    /// Sync against a custom store.
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            options: SyncOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SyncOptions) -> Self {
        self.options = options;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Synchronize `record` to `path`.
    ///
    /// # Errors
    ///
    /// Fails if the record cannot be encoded, if the existing file exists
    /// but cannot be read, or if the write fails. Nothing is retried. On
    /// failure the target file is left as it was.
    pub fn sync(&self, record: &ManifestRecord, path: impl AsRef<Path>) -> Result<SyncReport> {
        let path = path.as_ref();

        let bytes = encode(record)?;
        let candidate = digest_bytes(&bytes);
        let manifest_dump = to_json_dump(record)?;

        debug!(
            id = record.id(),
            path = %path.display(),
            "Checking if manifest already exists"
        );
        let existing = self.store.probe(path)?;

        let outcome = decide(bytes, &candidate, existing.as_ref());
        let status = outcome.status();

        match status {
            SyncStatus::Created => info!(
                path = %path.display(),
                fingerprint = %candidate,
                "Manifest does not yet exist, creating it"
            ),
            SyncStatus::Updated => info!(
                path = %path.display(),
                fingerprint = %candidate,
                "Manifest has changed, updating contents"
            ),
            SyncStatus::Unchanged => info!(
                path = %path.display(),
                fingerprint = %candidate,
                "Manifest on disk has not changed, making no further updates"
            ),
        }

        if let Some(bytes) = outcome.bytes() {
            if self.options.dry_run {
                debug!(path = %path.display(), "Dry run, skipping write");
            } else {
                self.store.persist(path, bytes)?;
            }
        }

        debug!(manifest = %manifest_dump, "Manifest dump");

        Ok(SyncReport {
            status,
            path: path.to_path_buf(),
            fingerprint: candidate,
            dry_run: self.options.dry_run,
            manifest_dump,
        })
    }
}
