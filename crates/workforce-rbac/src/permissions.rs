//! # Permissions
//!
//! Core permission types and sets for the RBAC system.
//! A permission combines an action, a resource selector and an optional scope.

use serde::{Deserialize, Serialize};

use crate::actions::Action;
use crate::codec::parse_permission;
use crate::coverage::evaluate;
use crate::error::{PermissionError, PermissionResult};
use crate::resources::ResourceSelector;
use crate::scopes::PermissionScope;

/// A closed enumeration that can appear as one segment of a permission string.
pub trait Vocabulary: Copy + Eq {
    /// Parse the exact wire text, or `None` if it is not a member.
    fn from_wire(s: &str) -> Option<Self>;

    /// The wire text of this member.
    fn wire(&self) -> &'static str;
}

impl Vocabulary for Action {
    fn from_wire(s: &str) -> Option<Self> {
        Action::parse(s)
    }

    fn wire(&self) -> &'static str {
        self.as_str()
    }
}

impl Vocabulary for ResourceSelector {
    fn from_wire(s: &str) -> Option<Self> {
        ResourceSelector::parse(s)
    }

    fn wire(&self) -> &'static str {
        self.as_str()
    }
}

impl Vocabulary for PermissionScope {
    fn from_wire(s: &str) -> Option<Self> {
        PermissionScope::parse(s)
    }

    fn wire(&self) -> &'static str {
        self.as_str()
    }
}

/// One parsed field of a permission string.
///
/// Text outside the closed vocabulary is kept verbatim as `Unknown` rather
/// than rejected, so that it serializes back unchanged. Unknown segments
/// never participate in coverage beyond an exact match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment<T> {
    /// A member of the closed vocabulary.
    Known(T),
    /// Any other text, verbatim.
    Unknown(String),
}

impl<T: Vocabulary> Segment<T> {
    /// Classify raw segment text.
    pub fn parse(raw: &str) -> Self {
        match T::from_wire(raw) {
            Some(value) => Segment::Known(value),
            None => Segment::Unknown(raw.to_string()),
        }
    }

    /// The wire text of this segment.
    pub fn as_str(&self) -> &str {
        match self {
            Segment::Known(value) => value.wire(),
            Segment::Unknown(raw) => raw,
        }
    }

    /// The vocabulary member, if recognized.
    pub fn known(&self) -> Option<T> {
        match self {
            Segment::Known(value) => Some(*value),
            Segment::Unknown(_) => None,
        }
    }

    /// Check if the segment is a vocabulary member.
    pub fn is_known(&self) -> bool {
        matches!(self, Segment::Known(_))
    }
}

/// A structured permission: `action:resource[:scope]`.
///
/// A permission without a scope is *unscoped*: it applies regardless of the
/// scope of whatever it is checked against.
///
/// # Example
///
/// ```
/// use workforce_rbac::permissions::PermissionFeature;
/// use workforce_rbac::resources::ResourceType;
/// use workforce_rbac::scopes::PermissionScope;
/// use workforce_rbac::actions::Action;
///
/// let perm = PermissionFeature::new(Action::View, ResourceType::Events);
/// assert_eq!(perm.to_string(), "view:events");
///
/// let perm = perm.with_scope(PermissionScope::Region);
/// assert_eq!(perm.to_string(), "view:events:region");
///
/// let wildcard = PermissionFeature::wildcard(Action::Export);
/// assert_eq!(wildcard.to_string(), "export:all");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PermissionFeature {
    /// The action granted or requested.
    pub action: Segment<Action>,
    /// The resource, or the `all` wildcard.
    pub resource: Segment<ResourceSelector>,
    /// Optional scope. `None` means unscoped.
    pub scope: Option<Segment<PermissionScope>>,
}

/// A permission whose segments are all recognized vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedPermission {
    /// The action.
    pub action: Action,
    /// The resource selector.
    pub resource: ResourceSelector,
    /// The scope, if any.
    pub scope: Option<PermissionScope>,
}

impl PermissionFeature {
    /// Create an unscoped permission on a resource.
    pub fn new(action: Action, resource: impl Into<ResourceSelector>) -> Self {
        Self {
            action: Segment::Known(action),
            resource: Segment::Known(resource.into()),
            scope: None,
        }
    }

    /// Create an unscoped permission on the `all` wildcard resource.
    pub fn wildcard(action: Action) -> Self {
        Self::new(action, ResourceSelector::All)
    }

    /// Return this permission restricted to `scope`.
    pub fn with_scope(mut self, scope: PermissionScope) -> Self {
        self.scope = Some(Segment::Known(scope));
        self
    }

    /// Build from raw segment text, classifying each segment.
    pub(crate) fn from_segments(action: &str, resource: &str, scope: Option<&str>) -> Self {
        Self {
            action: Segment::parse(action),
            resource: Segment::parse(resource),
            scope: scope.map(Segment::parse),
        }
    }

    /// Resolve every segment against the vocabulary.
    ///
    /// # Returns
    ///
    /// `None` if any segment is `Unknown`.
    pub fn resolve(&self) -> Option<ResolvedPermission> {
        let scope = match &self.scope {
            Some(segment) => Some(segment.known()?),
            None => None,
        };

        Some(ResolvedPermission {
            action: self.action.known()?,
            resource: self.resource.known()?,
            scope,
        })
    }

    /// Check if every segment is recognized vocabulary.
    pub fn is_recognized(&self) -> bool {
        self.resolve().is_some()
    }

    /// Check if this permission carries a scope.
    pub fn is_scoped(&self) -> bool {
        self.scope.is_some()
    }

    /// Compare the wire text of two permissions, segment by segment.
    pub fn same_text(&self, other: &PermissionFeature) -> bool {
        self.action.as_str() == other.action.as_str()
            && self.resource.as_str() == other.resource.as_str()
            && self.scope.as_ref().map(Segment::as_str) == other.scope.as_ref().map(Segment::as_str)
    }
}

impl TryFrom<String> for PermissionFeature {
    type Error = PermissionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_permission(&value)
    }
}

impl From<PermissionFeature> for String {
    fn from(permission: PermissionFeature) -> Self {
        permission.to_string()
    }
}

/// A set of held permissions, as granted to a role or user.
///
/// Grants keep insertion order so that the grant reported by
/// [`PermissionSet::granting`] is deterministic. Duplicates are dropped.
///
/// # Example
///
/// ```
/// use workforce_rbac::permissions::PermissionSet;
///
/// let set = PermissionSet::from_strings(["manage:events:organization", "view:reports"]).unwrap();
///
/// assert!(set.has("update:events:owned").unwrap());
/// assert!(!set.has("export:reports").unwrap());
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct PermissionSet {
    permissions: Vec<PermissionFeature>,
}

impl PermissionSet {
    /// Create a new empty permission set.
    pub fn new() -> Self {
        Self {
            permissions: Vec::new(),
        }
    }

    /// Parse a list of permission strings.
    ///
    /// The whole set is rejected on the first malformed entry; a grant list
    /// is either valid or not loaded at all.
    ///
    /// # Errors
    ///
    /// Returns [`PermissionError::Malformed`] for the first bad string.
    pub fn from_strings<I, S>(perms: I) -> PermissionResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for perm in perms {
            set.add(parse_permission(perm.as_ref())?);
        }
        Ok(set)
    }

    /// Add a permission to the set.
    ///
    /// # Returns
    ///
    /// `true` if the permission was not already present
    pub fn add(&mut self, permission: PermissionFeature) -> bool {
        if self.permissions.contains(&permission) {
            return false;
        }
        self.permissions.push(permission);
        true
    }

    /// Add multiple permissions to the set.
    pub fn add_all<I>(&mut self, permissions: I)
    where
        I: IntoIterator<Item = PermissionFeature>,
    {
        for perm in permissions {
            self.add(perm);
        }
    }

    /// Remove a permission from the set.
    ///
    /// # Returns
    ///
    /// `true` if the permission was present, `false` otherwise
    pub fn remove(&mut self, permission: &PermissionFeature) -> bool {
        let before = self.permissions.len();
        self.permissions.retain(|p| p != permission);
        self.permissions.len() != before
    }

    /// Check if any held permission covers the requested permission string.
    ///
    /// # Errors
    ///
    /// Returns [`PermissionError::Malformed`] if `target` is malformed.
    pub fn has(&self, target: &str) -> PermissionResult<bool> {
        let target = parse_permission(target)?;
        Ok(self.has_permission(&target))
    }

    /// Check if any held permission covers `target`.
    pub fn has_permission(&self, target: &PermissionFeature) -> bool {
        self.granting(target).is_some()
    }

    /// Find the first held permission that covers `target`.
    pub fn granting(&self, target: &PermissionFeature) -> Option<&PermissionFeature> {
        self.permissions
            .iter()
            .find(|held| evaluate(held, target).granted)
    }

    /// Iterate over the held permissions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PermissionFeature> {
        self.permissions.iter()
    }

    /// Held permissions in their canonical string form.
    pub fn to_strings(&self) -> Vec<String> {
        self.permissions.iter().map(|p| p.to_string()).collect()
    }

    /// Merge another permission set into this one.
    pub fn merge(&mut self, other: &PermissionSet) {
        self.add_all(other.permissions.iter().cloned());
    }

    /// Get the count of permissions.
    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }

    /// Check if this set covers every permission of another set.
    pub fn contains_all(&self, other: &PermissionSet) -> bool {
        other.iter().all(|perm| self.has_permission(perm))
    }

    /// Check if this set covers at least one permission of another set.
    pub fn contains_any(&self, other: &PermissionSet) -> bool {
        other.iter().any(|perm| self.has_permission(perm))
    }
}

impl FromIterator<PermissionFeature> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = PermissionFeature>>(iter: T) -> Self {
        let mut set = PermissionSet::new();
        set.add_all(iter);
        set
    }
}

impl TryFrom<Vec<String>> for PermissionSet {
    type Error = PermissionError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        PermissionSet::from_strings(value)
    }
}

impl From<PermissionSet> for Vec<String> {
    fn from(set: PermissionSet) -> Self {
        set.to_strings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::ResourceType;

    #[test]
    fn test_permission_creation() {
        let perm = PermissionFeature::new(Action::Update, ResourceType::Shifts);
        assert_eq!(perm.to_string(), "update:shifts");
        assert!(!perm.is_scoped());
        assert!(perm.is_recognized());
    }

    #[test]
    fn test_permission_with_scope() {
        let perm =
            PermissionFeature::new(Action::View, ResourceType::Staff).with_scope(PermissionScope::Owned);
        assert_eq!(perm.to_string(), "view:staff:owned");
        assert!(perm.is_scoped());
        assert_eq!(
            perm.resolve(),
            Some(ResolvedPermission {
                action: Action::View,
                resource: ResourceSelector::Resource(ResourceType::Staff),
                scope: Some(PermissionScope::Owned),
            })
        );
    }

    #[test]
    fn test_unknown_segments_do_not_resolve() {
        let perm = PermissionFeature::from_segments("frobnicate", "users", None);
        assert_eq!(perm.action, Segment::Unknown("frobnicate".to_string()));
        assert!(!perm.is_recognized());

        let perm = PermissionFeature::from_segments("view", "users", Some("galaxy"));
        assert!(perm.action.is_known());
        assert!(perm.resolve().is_none());
    }

    #[test]
    fn test_same_text() {
        let known = PermissionFeature::new(Action::View, ResourceType::Users);
        let spelled = PermissionFeature {
            action: Segment::Unknown("view".to_string()),
            resource: Segment::Known(ResourceSelector::Resource(ResourceType::Users)),
            scope: None,
        };
        assert_ne!(known, spelled);
        assert!(known.same_text(&spelled));
        assert!(!known.same_text(&known.clone().with_scope(PermissionScope::All)));
    }

    #[test]
    fn test_permission_serde() {
        let perm = PermissionFeature::new(Action::Approve, ResourceType::Timesheets)
            .with_scope(PermissionScope::Region);
        let json = serde_json::to_string(&perm).unwrap();
        assert_eq!(json, "\"approve:timesheets:region\"");

        let back: PermissionFeature = serde_json::from_str(&json).unwrap();
        assert_eq!(back, perm);

        assert!(serde_json::from_str::<PermissionFeature>("\"nocolon\"").is_err());
    }

    #[test]
    fn test_permission_set() {
        let mut set = PermissionSet::new();
        assert!(set.add(PermissionFeature::new(Action::View, ResourceType::Events)));
        assert!(set.add(PermissionFeature::new(Action::Create, ResourceType::Events)));
        assert!(!set.add(PermissionFeature::new(Action::View, ResourceType::Events)));

        assert!(set.has("view:events").unwrap());
        assert!(set.has("create:events:owned").unwrap());
        assert!(!set.has("delete:events").unwrap());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_permission_set_rejects_malformed() {
        let err = PermissionSet::from_strings(["view:events", "nocolon"]).unwrap_err();
        assert_eq!(
            err,
            PermissionError::Malformed {
                permission: "nocolon".to_string(),
                segments: 1,
            }
        );

        let set = PermissionSet::from_strings(["view:events"]).unwrap();
        assert!(set.has("bogus").is_err());
    }

    #[test]
    fn test_granting_reports_first_match() {
        let set = PermissionSet::from_strings([
            "view:kits:assigned",
            "manage:kits:region",
            "view:all",
        ])
        .unwrap();

        let target = parse_permission("view:kits:owned").unwrap();
        assert_eq!(
            set.granting(&target).map(|p| p.to_string()),
            Some("manage:kits:region".to_string())
        );

        let target = parse_permission("view:venues").unwrap();
        assert_eq!(
            set.granting(&target).map(|p| p.to_string()),
            Some("view:all".to_string())
        );
    }

    #[test]
    fn test_permission_set_merge() {
        let mut set1 = PermissionSet::from_strings(["view:bookings"]).unwrap();
        let set2 = PermissionSet::from_strings(["approve:bookings", "view:bookings"]).unwrap();

        set1.merge(&set2);
        assert_eq!(set1.to_strings(), vec!["view:bookings", "approve:bookings"]);
    }

    #[test]
    fn test_permission_set_remove() {
        let mut set = PermissionSet::from_strings(["view:clients"]).unwrap();
        let perm = PermissionFeature::new(Action::View, ResourceType::Clients);

        assert!(set.remove(&perm));
        assert!(!set.remove(&perm));
        assert!(set.is_empty());
    }

    #[test]
    fn test_permission_set_contains_all_and_any() {
        let admin = PermissionSet::from_strings(["manage:events", "manage:shifts"]).unwrap();
        let coordinator =
            PermissionSet::from_strings(["view:events:region", "update:shifts:owned"]).unwrap();
        let auditor = PermissionSet::from_strings(["export:reports", "view:events"]).unwrap();

        assert!(admin.contains_all(&coordinator));
        assert!(!coordinator.contains_all(&admin));
        assert!(admin.contains_any(&auditor));
        assert!(!coordinator.contains_any(&auditor));
    }

    #[test]
    fn test_permission_set_serde() {
        let set: PermissionSet =
            serde_json::from_str(r#"["manage:users:organization", "view:reports"]"#).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(
            serde_json::to_string(&set).unwrap(),
            r#"["manage:users:organization","view:reports"]"#
        );

        assert!(serde_json::from_str::<PermissionSet>(r#"["view"]"#).is_err());
    }

    #[test]
    fn test_from_iterator() {
        let set: PermissionSet = ResourceType::for_service(crate::resources::Service::Logistics)
            .into_iter()
            .map(|r| PermissionFeature::new(Action::Assign, r))
            .collect();
        assert_eq!(set.to_strings(), vec!["assign:kits", "assign:venues"]);
    }
}
