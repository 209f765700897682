//! Manifest synchronization
//!
//! The sync runs in a fixed order: encode the candidate, fingerprint it,
//! probe the target, decide, and persist only on a change.

mod decision;
mod engine;
mod store;

pub use decision::{SyncOutcome, SyncStatus, decide};
pub use engine::{ManifestSync, SyncOptions, SyncReport};
pub use store::{FsStore, ManifestStore, probe};
