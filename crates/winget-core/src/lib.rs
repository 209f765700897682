//! Core synchronization for winget manifests
//!
//! [`ManifestSync`] writes a manifest only when its canonical encoding
//! differs from what is already on disk, and reports whether the file was
//! created, updated or left unchanged.
//!
//! Concurrent syncs targeting the same path race between the probe and
//! the write. Nothing here locks; callers must run at most one sync per
//! target path at a time. Readers never see a partial file either way.

pub mod error;
pub mod recipe;
pub mod sync;

pub use error::{Error, Result};
pub use recipe::Recipe;
pub use sync::{
    FsStore, ManifestStore, ManifestSync, SyncOptions, SyncOutcome, SyncReport, SyncStatus,
    decide, probe,
};
