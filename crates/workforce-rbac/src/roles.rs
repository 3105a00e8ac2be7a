//! Role grants
//!
//! Loads the permission strings each role holds and validates them up front,
//! so a malformed grant is rejected at configuration time rather than at
//! check time.
//!
//! The document is a JSON object mapping role names to grant lists:
//!
//! ```json
//! {
//!   "coordinator": ["manage:events:region", "view:staff:region"],
//!   "auditor": ["view:all", "export:reports"]
//! }
//! ```

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::codec::parse_permission;
use crate::config::{ConfigError, RbacConfig};
use crate::error::PermissionResult;
use crate::permissions::PermissionSet;

/// Validated permission sets keyed by role name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleGrants {
    roles: BTreeMap<String, PermissionSet>,
}

impl RoleGrants {
    /// Parse and validate a role grants document.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Json`] if the document is not an object of string lists
    /// - [`ConfigError::Permission`] for the first malformed grant
    /// - [`ConfigError::UnknownVocabulary`] for unknown vocabulary in strict mode
    ///
    /// # Example
    ///
    /// ```
    /// use workforce_rbac::{RbacConfig, RoleGrants};
    ///
    /// let grants = RoleGrants::from_json(
    ///     r#"{"coordinator": ["manage:events:region"]}"#,
    ///     &RbacConfig::default(),
    /// ).unwrap();
    ///
    /// assert!(grants.role_covers("coordinator", "update:events:owned").unwrap());
    /// assert!(!grants.role_covers("coordinator", "update:events:organization").unwrap());
    /// ```
    pub fn from_json(json: &str, config: &RbacConfig) -> Result<Self, ConfigError> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;
        let mut roles = BTreeMap::new();

        for (role, grants) in raw {
            let mut set = PermissionSet::new();
            for grant in &grants {
                let permission =
                    parse_permission(grant).map_err(|source| ConfigError::Permission {
                        role: role.clone(),
                        source,
                    })?;

                if !permission.is_recognized() {
                    if config.strict_vocabulary {
                        return Err(ConfigError::UnknownVocabulary {
                            role,
                            permission: grant.clone(),
                        });
                    }
                    warn!(role = %role, permission = %grant, "Grant uses unknown vocabulary and will only match exactly");
                }

                set.add(permission);
            }
            roles.insert(role, set);
        }

        debug!(roles = roles.len(), "Loaded role grants");
        Ok(Self { roles })
    }

    /// Load the grants file named by the configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingGrantsPath`] if no path is configured,
    /// [`ConfigError::Io`] if it cannot be read, and anything
    /// [`RoleGrants::from_json`] returns.
    pub fn load(config: &RbacConfig) -> Result<Self, ConfigError> {
        let path = config
            .role_grants_path
            .as_ref()
            .ok_or(ConfigError::MissingGrantsPath)?;

        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        debug!(path = %path.display(), "Reading role grants");
        Self::from_json(&json, config)
    }

    /// Get the grants of a role.
    pub fn role(&self, name: &str) -> Option<&PermissionSet> {
        self.roles.get(name)
    }

    /// Role names, sorted.
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.roles.keys().map(String::as_str)
    }

    /// Check if a role's grants cover the requested permission.
    ///
    /// An unknown role holds nothing.
    ///
    /// # Errors
    ///
    /// Returns the parse error if `target` is malformed.
    pub fn role_covers(&self, role: &str, target: &str) -> PermissionResult<bool> {
        let target = parse_permission(target)?;
        Ok(self
            .role(role)
            .is_some_and(|set| set.has_permission(&target)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRANTS: &str = r#"{
        "admin": ["manage:all", "manage:users", "manage:events"],
        "coordinator": ["manage:events:region", "view:staff:region", "assign:staff:region"],
        "auditor": ["view:all", "export:reports"]
    }"#;

    #[test]
    fn test_from_json() {
        let grants = RoleGrants::from_json(GRANTS, &RbacConfig::default()).unwrap();
        assert_eq!(
            grants.roles().collect::<Vec<_>>(),
            vec!["admin", "auditor", "coordinator"]
        );
        assert_eq!(grants.role("coordinator").map(PermissionSet::len), Some(3));
    }

    #[test]
    fn test_role_covers() {
        let grants = RoleGrants::from_json(GRANTS, &RbacConfig::default()).unwrap();

        assert!(grants.role_covers("admin", "delete:users").unwrap());
        assert!(!grants.role_covers("admin", "view:reports").unwrap());
        assert!(grants.role_covers("coordinator", "assign:staff:owned").unwrap());
        assert!(!grants.role_covers("coordinator", "view:staff").unwrap());
        assert!(grants.role_covers("auditor", "view:bookings:organization").unwrap());
        assert!(!grants.role_covers("auditor", "export:bookings").unwrap());
        assert!(!grants.role_covers("nobody", "view:users").unwrap());
        assert!(grants.role_covers("auditor", "bad").is_err());
    }

    #[test]
    fn test_malformed_grant_rejected() {
        let err = RoleGrants::from_json(r#"{"ops": ["view:users", "oops"]}"#, &RbacConfig::default())
            .unwrap_err();
        assert!(matches!(err, ConfigError::Permission { ref role, .. } if role == "ops"));
    }

    #[test]
    fn test_unknown_vocabulary_lenient() {
        let grants =
            RoleGrants::from_json(r#"{"ops": ["view:widgets"]}"#, &RbacConfig::default()).unwrap();
        assert!(grants.role_covers("ops", "view:widgets").unwrap());
        assert!(!grants.role_covers("ops", "view:widgets:owned").unwrap());
    }

    #[test]
    fn test_unknown_vocabulary_strict() {
        let err = RoleGrants::from_json(r#"{"ops": ["view:widgets"]}"#, &RbacConfig::strict())
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnknownVocabulary { ref permission, .. } if permission == "view:widgets"
        ));
    }

    #[test]
    fn test_invalid_document() {
        let err = RoleGrants::from_json(r#"["view:users"]"#, &RbacConfig::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_load_requires_path() {
        let err = RoleGrants::load(&RbacConfig::default()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingGrantsPath));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("workforce-rbac-roles-{}.json", std::process::id()));
        std::fs::write(&path, GRANTS).unwrap();

        let config = RbacConfig::default().with_role_grants_path(&path);
        let grants = RoleGrants::load(&config).unwrap();
        assert!(grants.role("admin").is_some());

        std::fs::remove_file(&path).unwrap();
        assert!(matches!(RoleGrants::load(&config), Err(ConfigError::Io { .. })));
    }
}
