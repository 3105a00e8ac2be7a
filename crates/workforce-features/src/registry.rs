//! Process-wide feature registry.
//!
//! The registry is built from the catalog on first access and is read-only
//! afterwards, so it is shared by `'static` reference without locking.
//! Enabling or disabling a feature for an organization is state kept
//! elsewhere; it never mutates the registry.

use std::collections::HashSet;
use std::sync::OnceLock;

use tracing::{debug, warn};
use workforce_rbac::Service;

use crate::catalog;
use crate::feature::Feature;

static REGISTRY: OnceLock<FeatureRegistry> = OnceLock::new();

/// An immutable catalog of features.
#[derive(Debug, Clone)]
pub struct FeatureRegistry {
    features: Vec<Feature>,
}

impl FeatureRegistry {
    /// Build a registry over the given features.
    ///
    /// Operations whose permission string is malformed or uses unknown
    /// vocabulary are kept but logged; such a permission can never be
    /// covered by anything except an identical grant.
    pub fn new(features: Vec<Feature>) -> Self {
        let registry = Self { features };

        for feature in registry.flatten() {
            for op in &feature.operations {
                match op.parsed_permission() {
                    Ok(permission) if permission.is_recognized() => {}
                    Ok(_) => warn!(
                        feature = %feature.id,
                        operation = %op.id,
                        permission = %op.permission,
                        "Feature operation uses unknown permission vocabulary"
                    ),
                    Err(e) => warn!(
                        feature = %feature.id,
                        operation = %op.id,
                        error = %e,
                        "Feature operation has a malformed permission"
                    ),
                }
            }
        }

        debug!(
            features = registry.features.len(),
            permissions = registry.all_permissions().len(),
            "Feature registry initialized"
        );
        registry
    }

    /// The built-in catalog, built once per process.
    pub fn global() -> &'static FeatureRegistry {
        REGISTRY.get_or_init(|| FeatureRegistry::new(catalog::build()))
    }

    /// Top-level features, with their nested sub-features.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Every feature, depth-first, parents before their sub-features.
    pub fn flatten(&self) -> Vec<&Feature> {
        self.features.iter().flat_map(Feature::descendants).collect()
    }

    /// Find a feature by id at any nesting depth.
    pub fn find(&self, id: &str) -> Option<&Feature> {
        self.flatten().into_iter().find(|f| f.id == id)
    }

    /// Top-level features of one service.
    pub fn for_service(&self, service: Service) -> Vec<&Feature> {
        self.features
            .iter()
            .filter(|f| f.service == service)
            .collect()
    }

    /// Every distinct permission string in the catalog, in catalog order.
    pub fn all_permissions(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.flatten()
            .into_iter()
            .flat_map(|f| f.permissions())
            .filter(|p| seen.insert(*p))
            .collect()
    }

    /// The catalog as the JSON array served to the admin UI.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.features)
    }
}

/// The full built-in catalog, including nested sub-features.
///
/// # Examples
///
/// ```
/// use workforce_features::list_features;
///
/// let features = list_features();
/// assert!(features.iter().any(|f| f.id == "events"));
/// ```
pub fn list_features() -> &'static [Feature] {
    FeatureRegistry::global().features()
}
