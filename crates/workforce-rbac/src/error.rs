//! Error types for permission parsing
//!
//! Parsing is the only fallible step in the permission model. Coverage
//! decisions over well-formed permissions never fail.

use thiserror::Error;

/// Permission error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermissionError {
    /// Permission string does not have 2 or 3 colon-separated segments.
    #[error("Malformed permission '{permission}': expected action:resource[:scope], found {segments} segment(s)")]
    Malformed {
        /// The rejected input.
        permission: String,
        /// Number of segments the input split into.
        segments: usize,
    },
}

/// Result type for permission operations.
pub type PermissionResult<T> = Result<T, PermissionError>;

impl PermissionError {
    pub(crate) fn malformed(permission: &str, segments: usize) -> Self {
        PermissionError::Malformed {
            permission: permission.to_string(),
            segments,
        }
    }

    /// Get HTTP status code for this error.
    ///
    /// A malformed grant is a client or configuration error.
    pub fn status_code(&self) -> u16 {
        match self {
            PermissionError::Malformed { .. } => 400,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            PermissionError::Malformed { .. } => "MALFORMED_PERMISSION",
        }
    }
}
