//! # Actions
//!
//! Defines the closed set of verbs a permission can grant.
//! Actions are the first segment of a permission string.

use serde::{Deserialize, Serialize};

/// Actions that can be granted on a resource.
///
/// - **View**: Read resource data
/// - **Create**: Create new resource instances
/// - **Update**: Modify existing resource data
/// - **Delete**: Remove resource instances
/// - **Manage**: Administer the resource; implies the four CRUD actions
/// - **Assign**: Assign people or equipment to the resource
/// - **Approve**: Approve pending changes (timesheets, bookings)
/// - **Export**: Download resource data
/// - **Import**: Upload resource data
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// View/read resource.
    View,

    /// Create new resource.
    Create,

    /// Update existing resource.
    Update,

    /// Delete resource.
    Delete,

    /// Manage resource.
    ///
    /// Implies `View`, `Create`, `Update` and `Delete` on the same resource,
    /// but not `Assign`, `Approve`, `Export` or `Import`.
    Manage,

    /// Assign staff, kits or shifts.
    Assign,

    /// Approve pending actions.
    Approve,

    /// Export resource data.
    Export,

    /// Import data into resource.
    Import,
}

impl Action {
    /// Get the wire representation of the action.
    ///
    /// # Returns
    ///
    /// A static lowercase string as it appears in permission strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Manage => "manage",
            Action::Assign => "assign",
            Action::Approve => "approve",
            Action::Export => "export",
            Action::Import => "import",
        }
    }

    /// Parse an action from its wire representation.
    ///
    /// Matching is exact: stored grants are lowercase and there are no
    /// aliases, so `parse(a.as_str()) == Some(a)` and nothing else parses.
    ///
    /// # Example
    ///
    /// ```
    /// use workforce_rbac::actions::Action;
    ///
    /// assert_eq!(Action::parse("view"), Some(Action::View));
    /// assert_eq!(Action::parse("manage"), Some(Action::Manage));
    /// assert_eq!(Action::parse("read"), None);
    /// assert_eq!(Action::parse("VIEW"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "view" => Some(Action::View),
            "create" => Some(Action::Create),
            "update" => Some(Action::Update),
            "delete" => Some(Action::Delete),
            "manage" => Some(Action::Manage),
            "assign" => Some(Action::Assign),
            "approve" => Some(Action::Approve),
            "export" => Some(Action::Export),
            "import" => Some(Action::Import),
            _ => None,
        }
    }

    /// Get all actions.
    pub fn all() -> Vec<Self> {
        vec![
            Action::View,
            Action::Create,
            Action::Update,
            Action::Delete,
            Action::Manage,
            Action::Assign,
            Action::Approve,
            Action::Export,
            Action::Import,
        ]
    }

    /// The four basic CRUD actions, in catalog order.
    pub fn crud() -> [Self; 4] {
        [Action::View, Action::Create, Action::Update, Action::Delete]
    }

    /// Check if this is one of the four CRUD actions.
    pub fn is_crud(&self) -> bool {
        matches!(
            self,
            Action::View | Action::Create | Action::Update | Action::Delete
        )
    }

    /// Check if this action implies a *different* action on the same resource.
    ///
    /// Only `Manage` implies anything, and only the four CRUD actions.
    /// The relation is not reflexive; equal actions are handled by the
    /// same-action rule of the coverage evaluator.
    ///
    /// # Example
    ///
    /// ```
    /// use workforce_rbac::actions::Action;
    ///
    /// assert!(Action::Manage.implies(Action::View));
    /// assert!(Action::Manage.implies(Action::Delete));
    /// assert!(!Action::Manage.implies(Action::Assign));
    /// assert!(!Action::Update.implies(Action::View));
    /// ```
    pub fn implies(&self, other: Action) -> bool {
        *self == Action::Manage && other.is_crud()
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
