//! Error types for winget-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from winget-core
    #[error(transparent)]
    Core(#[from] winget_core::Error),

    /// Error from winget-fs
    #[error(transparent)]
    Fs(#[from] winget_fs::Error),

    /// Error from winget-manifest
    #[error(transparent)]
    Manifest(#[from] winget_manifest::Error),

    /// JSON output error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
