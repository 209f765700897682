//! Error types for winget-manifest

/// Result type for winget-manifest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or encoding a manifest
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required input was absent or blank
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// An enumerated input was not one of the accepted values
    #[error("Invalid value {value:?} for {field} (expected one of: {expected})")]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },

    /// The serializer rejected a value
    #[error("Failed to encode manifest as {format}: {message}")]
    Encoding { format: String, message: String },
}

impl Error {
    pub(crate) fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}
