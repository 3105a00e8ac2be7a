//! Feature and operation catalog entries
//!
//! A [`Feature`] is a named capability group shown in the permissions
//! management screens. Each of its [`FeatureOperation`]s carries one
//! canonical permission string.

use serde::{Deserialize, Serialize};
use workforce_rbac::{
    parse_permission, Action, PermissionFeature, PermissionResult, ResourceType, Service,
};

/// One permission-bearing operation of a feature.
///
/// # Examples
///
/// ```
/// use workforce_features::FeatureOperation;
/// use workforce_rbac::{Action, ResourceType};
///
/// let op = FeatureOperation::for_resource(
///     ResourceType::Timesheets,
///     Action::Approve,
///     "Approve Timesheets",
///     "Approve submitted timesheets",
/// );
/// assert_eq!(op.id, "timesheets.approve");
/// assert_eq!(op.permission, "approve:timesheets");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureOperation {
    /// Stable identifier, `{resource}.{action}` for catalog entries.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display description.
    pub description: String,
    /// Canonical permission string.
    pub permission: String,
}

impl FeatureOperation {
    /// Create an operation from its parts.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        permission: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            permission: permission.into(),
        }
    }

    /// Create an operation for an unscoped action on a resource type.
    pub fn for_resource(
        resource: ResourceType,
        action: Action,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(
            format!("{resource}.{action}"),
            name,
            description,
            PermissionFeature::new(action, resource).to_string(),
        )
    }

    /// Parse the operation's permission string.
    pub fn parsed_permission(&self) -> PermissionResult<PermissionFeature> {
        parse_permission(&self.permission)
    }
}

/// A named capability group.
///
/// `sub_features` nest related capabilities for display only; coverage
/// decisions never look at the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display description.
    pub description: String,
    /// Operations this feature exposes.
    pub operations: Vec<FeatureOperation>,
    /// Nested capability groups.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_features: Vec<Feature>,
    /// Service area that owns the feature.
    pub service: Service,
    /// UI route of the feature's screen, if it has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
}

impl Feature {
    /// Create a feature with no operations.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        service: Service,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            operations: Vec::new(),
            sub_features: Vec::new(),
            service,
            route: None,
        }
    }

    /// Append operations.
    pub fn with_operations(
        mut self,
        operations: impl IntoIterator<Item = FeatureOperation>,
    ) -> Self {
        self.operations.extend(operations);
        self
    }

    /// Append one operation.
    pub fn with_operation(mut self, operation: FeatureOperation) -> Self {
        self.operations.push(operation);
        self
    }

    /// Append a nested feature.
    pub fn with_sub_feature(mut self, feature: Feature) -> Self {
        self.sub_features.push(feature);
        self
    }

    /// Set the UI route.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Permission strings of this feature's own operations.
    pub fn permissions(&self) -> impl Iterator<Item = &str> {
        self.operations.iter().map(|op| op.permission.as_str())
    }

    /// This feature followed by every nested feature, depth-first.
    pub fn descendants(&self) -> Vec<&Feature> {
        let mut out = vec![self];
        for sub in &self.sub_features {
            out.extend(sub.descendants());
        }
        out
    }
}

/// The four CRUD operations for a resource name.
///
/// Each operation's permission is `"{action}:{resource_name}"`; the name is
/// used verbatim and not checked against the resource vocabulary.
///
/// # Examples
///
/// ```
/// use workforce_features::standard_operations;
///
/// let ops = standard_operations("audit_logs");
/// let permissions: Vec<_> = ops.iter().map(|op| op.permission.as_str()).collect();
/// assert_eq!(
///     permissions,
///     ["view:audit_logs", "create:audit_logs", "update:audit_logs", "delete:audit_logs"]
/// );
/// assert_eq!(ops[0].name, "View Audit Logs");
/// ```
pub fn standard_operations(resource_name: &str) -> Vec<FeatureOperation> {
    let label = humanize(resource_name);
    let lower = label.to_lowercase();

    Action::crud()
        .into_iter()
        .map(|action| {
            let (verb, description) = match action {
                Action::View => ("View", format!("View and list {lower}")),
                Action::Create => ("Create", format!("Create new {lower}")),
                Action::Update => ("Update", format!("Edit existing {lower}")),
                _ => ("Delete", format!("Delete {lower}")),
            };
            FeatureOperation::new(
                format!("{resource_name}.{action}"),
                format!("{verb} {label}"),
                description,
                format!("{action}:{resource_name}"),
            )
        })
        .collect()
}

/// `audit_logs` -> `Audit Logs`
fn humanize(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_operations() {
        let ops = standard_operations("users");
        assert_eq!(ops.len(), 4);
        assert_eq!(ops[0].id, "users.view");
        assert_eq!(ops[0].permission, "view:users");
        assert_eq!(ops[1].name, "Create Users");
        assert_eq!(ops[2].description, "Edit existing users");
        assert_eq!(ops[3].permission, "delete:users");
    }

    #[test]
    fn test_standard_operations_unknown_resource() {
        let ops = standard_operations("widgets");
        assert_eq!(ops[0].permission, "view:widgets");
        assert!(!ops[0].parsed_permission().unwrap().is_recognized());
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("users"), "Users");
        assert_eq!(humanize("audit_logs"), "Audit Logs");
        assert_eq!(humanize("_odd__name_"), "Odd Name");
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn test_feature_builder() {
        let feature = Feature::new("events", "Events", "Event scheduling", Service::Scheduling)
            .with_operations(standard_operations("events"))
            .with_sub_feature(
                Feature::new("shifts", "Shifts", "Shifts within events", Service::Scheduling)
                    .with_operations(standard_operations("shifts")),
            )
            .with_route("/events");

        assert_eq!(feature.permissions().count(), 4);
        assert_eq!(
            feature.descendants().iter().map(|f| f.id.as_str()).collect::<Vec<_>>(),
            vec!["events", "shifts"]
        );
        assert_eq!(feature.route.as_deref(), Some("/events"));
    }

    #[test]
    fn test_feature_json_shape() {
        let feature = Feature::new("kits", "Kits", "Equipment kits", Service::Logistics)
            .with_operation(FeatureOperation::for_resource(
                ResourceType::Kits,
                Action::Assign,
                "Assign Kits",
                "Assign kits to events",
            ));

        let json = serde_json::to_value(&feature).unwrap();
        assert_eq!(json["service"], "logistics");
        assert_eq!(json["operations"][0]["permission"], "assign:kits");
        assert!(json.get("subFeatures").is_none());
        assert!(json.get("route").is_none());

        let back: Feature = serde_json::from_value(json).unwrap();
        assert_eq!(back, feature);
    }
}
