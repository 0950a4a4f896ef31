//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream fetch errors and
/// adding snapshot I/O, serialization and input validation failures.
///
/// Missing or null fields inside an otherwise valid record are never an
/// error here; the normalizer substitutes defaults for them.
#[derive(Debug)]
pub enum DashboardError {
    /// An error from the underlying API client (transport, status, decode).
    Api(ycoss_api::Error),
    /// Reading or writing snapshot files failed.
    Io(std::io::Error),
    /// JSON serialization or deserialization failed.
    Serialization(serde_json::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
    /// A background load did not complete (task aborted or panicked).
    Load(String),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::Load(msg) => write!(f, "Load error: {}", msg),
        }
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ycoss_api::Error> for DashboardError {
    fn from(e: ycoss_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}
