//! # Workforce RBAC (Role-Based Access Control)
//!
//! This crate provides the permission model for the workforce platform:
//! the vocabulary permissions are written in, the string codec, and the
//! coverage evaluator that decides whether a held grant authorizes a request.
//!
//! ## Overview
//!
//! The workforce-rbac crate handles:
//! - **Actions**: Verbs a permission grants (`view`, `manage`, `approve`, ...)
//! - **Resources**: Domain nouns, grouped by service, plus the `all` wildcard
//! - **Scopes**: The data boundary a grant applies within
//! - **Coverage**: Whether one permission implies another
//! - **Permission Sets**: Held grants for a role or user
//! - **Role Grants**: Validated grant lists loaded from configuration
//!
//! ## Architecture
//!
//! ```text
//! Permission = Action + Resource [+ Scope]
//!
//! Examples:
//!   "view:users"                   - View users anywhere
//!   "manage:events:organization"   - Manage events in the caller's organization
//!   "export:all"                   - Export any resource
//! ```
//!
//! ## Scope Hierarchy
//!
//! ```text
//! all ⊇ organization ⊇ owned ⊇ assigned
//! all ⊇ region       ⊇ owned ⊇ assigned
//! ```
//!
//! An unscoped grant covers a request at any scope. A scoped grant never
//! covers an unscoped request.
//!
//! ## Usage
//!
//! ```rust
//! use workforce_rbac::{covers, covers_any, PermissionSet};
//!
//! // Manage implies view/create/update/delete on the same resource
//! assert!(covers("manage:users", "view:users").unwrap());
//! assert!(!covers("manage:users", "assign:users").unwrap());
//!
//! // Scopes narrow
//! assert!(covers("manage:events:organization", "view:events:assigned").unwrap());
//! assert!(!covers("manage:events:organization", "view:events:region").unwrap());
//!
//! // Held permission sets
//! let held = ["manage:organizations:organization", "view:reports"];
//! assert!(covers_any(held, "update:organizations:owned").unwrap());
//!
//! let set = PermissionSet::from_strings(held).unwrap();
//! assert!(!set.has("export:reports").unwrap());
//! ```
//!
//! ## Unknown Vocabulary
//!
//! Parsing checks shape, not vocabulary. A permission naming an unknown
//! action, resource or scope still parses, but covers nothing except its own
//! exact text. [`RoleGrants`] can reject such grants at load time when
//! [`RbacConfig::strict_vocabulary`] is set.

pub mod actions;
pub mod codec;
pub mod config;
pub mod coverage;
pub mod error;
pub mod permissions;
pub mod resources;
pub mod roles;
pub mod scopes;

// Re-export main types for convenience
pub use actions::Action;
pub use codec::{parse_permission, serialize_permission};
pub use config::{ConfigError, RbacConfig};
pub use coverage::{covers, covers_any, evaluate, CoverageRule, Decision};
pub use error::{PermissionError, PermissionResult};
pub use permissions::{PermissionFeature, PermissionSet, ResolvedPermission, Segment};
pub use resources::{ResourceSelector, ResourceType, Service};
pub use roles::RoleGrants;
pub use scopes::PermissionScope;
