//! Error types for the modal controller
//!
//! Controller operations themselves are total. Errors only surface at the
//! edges: loading configuration, serializing the view, and attaching to a
//! browser host.

/// Errors that can occur at the modal crate's fallible edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalError {
    /// A configuration value failed validation
    InvalidConfig {
        /// The offending field
        field: &'static str,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// JSON serialization or deserialization failed
    SerializationError(String),

    /// A required host object (window, document, body) is missing
    HostUnavailable(&'static str),
}

impl std::fmt::Display for ModalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid config field '{}': {}", field, reason)
            }
            Self::SerializationError(msg) => write!(f, "serialization error: {}", msg),
            Self::HostUnavailable(what) => write!(f, "host unavailable: no {}", what),
        }
    }
}

impl std::error::Error for ModalError {}

impl From<serde_json::Error> for ModalError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Result type alias for modal operations
pub type ModalResult<T> = Result<T, ModalError>;
