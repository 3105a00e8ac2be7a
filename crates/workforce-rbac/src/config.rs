//! Configuration for loading role grants.
//!
//! Configuration is loaded from environment variables with defaults suitable
//! for local development: lenient vocabulary and no grants file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::error::PermissionError;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Grants file could not be read.
    #[error("Failed to read role grants from {path}: {source}")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Grants document is not valid JSON of the expected shape.
    #[error("Invalid role grants document: {0}")]
    Json(#[from] serde_json::Error),

    /// A grant is not a well-formed permission string.
    #[error("Invalid grant for role '{role}': {source}")]
    Permission {
        /// Role holding the grant.
        role: String,
        /// Parse failure.
        #[source]
        source: PermissionError,
    },

    /// A grant uses vocabulary outside the closed sets (strict mode only).
    #[error("Unknown vocabulary in grant '{permission}' for role '{role}'")]
    UnknownVocabulary {
        /// Role holding the grant.
        role: String,
        /// The offending permission string.
        permission: String,
    },

    /// Invalid configuration value.
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue {
        /// Configuration key.
        key: String,
        /// Error message.
        message: String,
    },

    /// No grants file is configured.
    #[error("No role grants path configured (set RBAC_ROLE_GRANTS_PATH)")]
    MissingGrantsPath,
}

/// RBAC configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Reject grants whose action, resource or scope is not a known value.
    ///
    /// When off, such grants load with a warning and never cover anything
    /// except their exact text.
    pub strict_vocabulary: bool,

    /// JSON file mapping role names to permission strings.
    pub role_grants_path: Option<PathBuf>,
}

impl RbacConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RBAC_STRICT_VOCABULARY`: `true`/`1` to reject unknown vocabulary (default: false)
    /// - `RBAC_ROLE_GRANTS_PATH`: path to the role grants JSON file
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `RBAC_STRICT_VOCABULARY` is
    /// not a recognized boolean.
    pub fn from_env() -> Result<Self, ConfigError> {
        let default = Self::default();

        let strict_vocabulary = match std::env::var("RBAC_STRICT_VOCABULARY") {
            Ok(value) => parse_bool("RBAC_STRICT_VOCABULARY", &value)?,
            Err(_) => default.strict_vocabulary,
        };

        Ok(Self {
            strict_vocabulary,
            role_grants_path: std::env::var_os("RBAC_ROLE_GRANTS_PATH")
                .map(PathBuf::from)
                .or(default.role_grants_path),
        })
    }

    /// Strict configuration with no grants file.
    pub fn strict() -> Self {
        Self {
            strict_vocabulary: true,
            role_grants_path: None,
        }
    }

    /// Set the grants file path.
    pub fn with_role_grants_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.role_grants_path = Some(path.into());
        self
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected a boolean, got '{other}'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RbacConfig::default();
        assert!(!config.strict_vocabulary);
        assert!(config.role_grants_path.is_none());
    }

    #[test]
    fn test_strict_with_path() {
        let config = RbacConfig::strict().with_role_grants_path("/etc/workforce/roles.json");
        assert!(config.strict_vocabulary);
        assert_eq!(
            config.role_grants_path,
            Some(PathBuf::from("/etc/workforce/roles.json"))
        );
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("K", "true").unwrap());
        assert!(parse_bool("K", " ON ").unwrap());
        assert!(parse_bool("K", "1").unwrap());
        assert!(!parse_bool("K", "false").unwrap());
        assert!(!parse_bool("K", "").unwrap());

        let err = parse_bool("RBAC_STRICT_VOCABULARY", "maybe").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration value for RBAC_STRICT_VOCABULARY: expected a boolean, got 'maybe'"
        );
    }
}
