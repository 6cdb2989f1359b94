use thiserror::Error;

/// Result type alias for NameMesh operations
pub type Result<T> = std::result::Result<T, NameMeshError>;

/// Errors that can occur when reconciling records against a directory service
#[derive(Error, Debug)]
pub enum NameMeshError {
    /// A field failed local validation; nothing was sent to the directory
    #[error("validation failed: {field}: {reason}")]
    Validation {
        /// The offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// The directory rejected the submission (stale version, duplicate
    /// constraint); the reason string is passed through verbatim
    #[error("directory rejected submission: {reason}")]
    Conflict {
        /// Service-provided rejection reason
        reason: String,
    },

    /// The directory is unreachable; the operation may or may not have applied
    #[error("transport error: {0}")]
    Transport(String),

    /// Request timed out
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// The directory returned a response we could not decode
    #[error("malformed response: {0}")]
    Decode(String),

    /// Resource not found
    #[error("resource not found: {resource}")]
    NotFound {
        /// Description of the resource that wasn't found
        resource: String,
    },

    /// Directory returned an error status outside the outcome envelope
    #[error("API error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message from the service
        message: String,
    },

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl NameMeshError {
    /// Shorthand for a local validation failure
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Returns true if the error was caught locally, before any remote call
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Returns true if the directory explicitly rejected the submission
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    /// Returns true if we cannot tell whether the submission applied
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Timeout(_) | Self::Decode(_)
        )
    }

    /// Returns the offending field for validation errors
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}
