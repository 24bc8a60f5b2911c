//! Error types for document serialization
//!
//! Serialization is a synchronous, deterministic transform with no I/O;
//! failures are configuration or programming errors and propagate to the
//! caller rather than being swallowed.

use thiserror::Error;

/// Result type alias for serialization operations
pub type SerializeResult<T> = Result<T, SerializeError>;

/// Error types for document assembly
#[derive(Debug, Error)]
pub enum SerializeError {
    /// No resource metadata is registered for an object that must be
    /// serialized as primary data. Unregistered relationship targets are
    /// skipped silently instead.
    #[error("No resource metadata registered for object type '{object_type}'")]
    UnknownObjectType { object_type: String },

    /// A relationship target has no identifier. Resource references are
    /// meaningless without one.
    #[error("Resource of type '{object_type}' has no id")]
    MissingId { object_type: String },

    /// The include traversal went deeper than the configured cap.
    #[error("Include traversal exceeded maximum depth {max}")]
    IncludeDepthExceeded { max: usize },

    /// Invalid metadata declaration (empty names, duplicate relationships).
    #[error("Metadata error: {message}")]
    Metadata { message: String },
}

impl SerializeError {
    /// Create a metadata error from any displayable message
    pub fn metadata(message: impl Into<String>) -> Self {
        Self::Metadata {
            message: message.into(),
        }
    }
}
