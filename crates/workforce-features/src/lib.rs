//! # Workforce Features
//!
//! This crate provides the static catalog of capabilities the workforce
//! platform exposes, and every permission string they carry.
//!
//! ## Overview
//!
//! - **Features**: Named capability groups (Users, Events, Kits, ...)
//! - **Operations**: One permission-bearing action within a feature
//! - **Registry**: The immutable, process-wide catalog
//!
//! ## Architecture
//!
//! ```text
//! Feature (service, route)
//!   ├─ FeatureOperation ─→ "view:events"
//!   ├─ FeatureOperation ─→ "import:events"
//!   └─ subFeatures
//!        └─ Feature "shifts"
//!             └─ FeatureOperation ─→ "assign:shifts"
//! ```
//!
//! The registry only describes what can be granted. Whether a held grant
//! covers a request is decided by `workforce-rbac`.
//!
//! ## Usage
//!
//! ```rust
//! use workforce_features::{list_features, standard_operations, FeatureRegistry};
//! use workforce_rbac::Service;
//!
//! // Enumerate the catalog
//! let registry = FeatureRegistry::global();
//! assert!(registry.find("timesheets").is_some());
//! assert!(registry.all_permissions().contains(&"approve:timesheets"));
//! assert!(!registry.for_service(Service::Logistics).is_empty());
//!
//! // Build CRUD operations for a resource
//! let ops = standard_operations("venues");
//! assert_eq!(ops[0].permission, "view:venues");
//!
//! // Serve the catalog to the admin UI
//! let json = registry.to_json().unwrap();
//! assert!(json.contains("\"subFeatures\""));
//! # let _ = list_features();
//! ```

mod catalog;
pub mod feature;
pub mod registry;

// Re-export main types for convenience
pub use feature::{standard_operations, Feature, FeatureOperation};
pub use registry::{list_features, FeatureRegistry};
