//! Filesystem layer for winget manifest sync
//!
//! Provides content fingerprints, crash-safe atomic writes, and
//! format-agnostic loading of recipe files.

pub mod checksum;
pub mod config;
pub mod error;
pub mod io;

pub use checksum::{Fingerprint, digest_bytes, digest_file};
pub use config::ConfigStore;
pub use error::{Error, Result};
