//! Error types for winget-core

/// Result type for winget-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in winget-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem error from winget-fs
    #[error(transparent)]
    Fs(#[from] winget_fs::Error),

    /// Record construction or encoding error from winget-manifest
    #[error(transparent)]
    Manifest(#[from] winget_manifest::Error),
}
