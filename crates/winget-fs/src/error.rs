//! Error types for winget-fs

use std::path::PathBuf;

/// Result type for winget-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in winget-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No such file: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl Error {
    /// Wrap an I/O error with the path it happened at.
    ///
    /// `NotFound` kinds are lifted into [`Error::NotFound`] so callers can
    /// branch on absence without inspecting the source error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::NotFound { path };
        }
        Self::Io { path, source }
    }

    /// Whether this error means the path does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn not_found_kind_becomes_not_found_variant() {
        let err = Error::io("/missing", std::io::Error::from(ErrorKind::NotFound));
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "No such file: /missing");
    }

    #[test]
    fn other_kinds_stay_io() {
        let err = Error::io("/locked", std::io::Error::from(ErrorKind::PermissionDenied));
        assert!(!err.is_not_found());
        assert!(matches!(err, Error::Io { .. }));
    }
}
