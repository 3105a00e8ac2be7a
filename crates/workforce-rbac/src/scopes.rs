//! # Permission Scopes
//!
//! Scopes bound the data a grant applies to. They form two narrowing chains
//! rooted at `all`:
//!
//! ```text
//! all ⊇ organization ⊇ owned ⊇ assigned
//! all ⊇ region       ⊇ owned ⊇ assigned
//! ```
//!
//! `organization` and `region` are incomparable.

use serde::{Deserialize, Serialize};

/// The boundary a permission applies within.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PermissionScope {
    /// All data across every organization.
    All,
    /// Data within the caller's organization.
    Organization,
    /// Data within the caller's region.
    Region,
    /// Data the caller owns.
    Owned,
    /// Data the caller is assigned to.
    Assigned,
}

impl PermissionScope {
    /// Get the wire representation of the scope.
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionScope::All => "all",
            PermissionScope::Organization => "organization",
            PermissionScope::Region => "region",
            PermissionScope::Owned => "owned",
            PermissionScope::Assigned => "assigned",
        }
    }

    /// Parse a scope from its wire representation (exact match).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(PermissionScope::All),
            "organization" => Some(PermissionScope::Organization),
            "region" => Some(PermissionScope::Region),
            "owned" => Some(PermissionScope::Owned),
            "assigned" => Some(PermissionScope::Assigned),
            _ => None,
        }
    }

    /// Get all scopes, widest first.
    pub fn all() -> Vec<Self> {
        vec![
            PermissionScope::All,
            PermissionScope::Organization,
            PermissionScope::Region,
            PermissionScope::Owned,
            PermissionScope::Assigned,
        ]
    }

    /// Check if a grant at this scope covers a request at `other`.
    ///
    /// # Example
    ///
    /// ```
    /// use workforce_rbac::scopes::PermissionScope;
    ///
    /// assert!(PermissionScope::Organization.covers(PermissionScope::Assigned));
    /// assert!(!PermissionScope::Organization.covers(PermissionScope::Region));
    /// assert!(!PermissionScope::Owned.covers(PermissionScope::Organization));
    /// ```
    pub fn covers(&self, other: PermissionScope) -> bool {
        use PermissionScope::*;

        match self {
            All => true,
            Organization => matches!(other, Organization | Owned | Assigned),
            Region => matches!(other, Region | Owned | Assigned),
            Owned => matches!(other, Owned | Assigned),
            Assigned => other == Assigned,
        }
    }
}

impl std::fmt::Display for PermissionScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PermissionScope::*;

    #[test]
    fn test_scope_parsing() {
        for scope in PermissionScope::all() {
            assert_eq!(PermissionScope::parse(scope.as_str()), Some(scope));
        }
        assert_eq!(PermissionScope::parse("org"), None);
        assert_eq!(PermissionScope::parse("Owned"), None);
    }

    #[test]
    fn test_all_covers_everything() {
        for scope in PermissionScope::all() {
            assert!(All.covers(scope));
        }
    }

    #[test]
    fn test_chains() {
        assert!(Organization.covers(Organization));
        assert!(Organization.covers(Owned));
        assert!(Organization.covers(Assigned));
        assert!(!Organization.covers(All));

        assert!(Region.covers(Region));
        assert!(Region.covers(Owned));
        assert!(Region.covers(Assigned));
        assert!(!Region.covers(All));

        assert!(Owned.covers(Owned));
        assert!(Owned.covers(Assigned));
        assert!(!Owned.covers(Organization));
        assert!(!Owned.covers(Region));

        assert!(Assigned.covers(Assigned));
        assert!(!Assigned.covers(Owned));
    }

    #[test]
    fn test_organization_and_region_are_incomparable() {
        assert!(!Organization.covers(Region));
        assert!(!Region.covers(Organization));
    }

    #[test]
    fn test_reflexive() {
        for scope in PermissionScope::all() {
            assert!(scope.covers(scope));
        }
    }
}
