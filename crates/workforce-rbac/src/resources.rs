//! # Resource Types
//!
//! Defines all resource types a permission can target, the service area that
//! owns each one, and the `all` wildcard selector.

use serde::{Deserialize, Serialize};

/// Logical service area that owns a resource.
///
/// The feature catalog groups capabilities by service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Service {
    /// Tenancy, users, roles and system administration.
    Platform,
    /// Staff records, timesheets and availability.
    Workforce,
    /// Events, shifts, bookings and clients.
    Scheduling,
    /// Equipment kits and venues.
    Logistics,
    /// Reports and audit trails.
    Reporting,
}

impl Service {
    /// Get the string representation of the service.
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Platform => "platform",
            Service::Workforce => "workforce",
            Service::Scheduling => "scheduling",
            Service::Logistics => "logistics",
            Service::Reporting => "reporting",
        }
    }

    /// Parse service from string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "platform" => Some(Service::Platform),
            "workforce" => Some(Service::Workforce),
            "scheduling" => Some(Service::Scheduling),
            "logistics" => Some(Service::Logistics),
            "reporting" => Some(Service::Reporting),
            _ => None,
        }
    }

    /// Get all services, in catalog order.
    pub fn all() -> Vec<Self> {
        vec![
            Service::Platform,
            Service::Workforce,
            Service::Scheduling,
            Service::Logistics,
            Service::Reporting,
        ]
    }
}

/// Resource types that can have permissions assigned.
///
/// Wire names are the lowercase collection names stored in role grants
/// (`users`, `events`, `audit_logs`, ...). `system` is the one uncountable
/// resource and stays singular.
///
/// - **Platform**: System, Users, Organizations, Regions, Roles, Features, Settings
/// - **Workforce**: Staff, Timesheets, Availability
/// - **Scheduling**: Events, Shifts, Bookings, Clients
/// - **Logistics**: Kits, Venues
/// - **Reporting**: Reports, AuditLogs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    // Platform
    /// System-wide administration.
    System,
    /// User accounts.
    Users,
    /// Tenant organizations.
    Organizations,
    /// Regions within an organization.
    Regions,
    /// Roles and their permission grants.
    Roles,
    /// Feature toggles.
    Features,
    /// Organization settings.
    Settings,

    // Workforce
    /// Staff member records.
    Staff,
    /// Timesheets submitted by staff.
    Timesheets,
    /// Staff availability calendars.
    Availability,

    // Scheduling
    /// Events being staffed.
    Events,
    /// Shifts within an event.
    Shifts,
    /// Client bookings.
    Bookings,
    /// Client accounts.
    Clients,

    // Logistics
    /// Equipment kits.
    Kits,
    /// Venues where events take place.
    Venues,

    // Reporting
    /// Generated reports.
    Reports,
    /// Audit log entries.
    AuditLogs,
}

impl ResourceType {
    /// Get the wire representation of the resource type.
    pub fn as_str(&self) -> &'static str {
        match self {
            // Platform
            ResourceType::System => "system",
            ResourceType::Users => "users",
            ResourceType::Organizations => "organizations",
            ResourceType::Regions => "regions",
            ResourceType::Roles => "roles",
            ResourceType::Features => "features",
            ResourceType::Settings => "settings",
            // Workforce
            ResourceType::Staff => "staff",
            ResourceType::Timesheets => "timesheets",
            ResourceType::Availability => "availability",
            // Scheduling
            ResourceType::Events => "events",
            ResourceType::Shifts => "shifts",
            ResourceType::Bookings => "bookings",
            ResourceType::Clients => "clients",
            // Logistics
            ResourceType::Kits => "kits",
            ResourceType::Venues => "venues",
            // Reporting
            ResourceType::Reports => "reports",
            ResourceType::AuditLogs => "audit_logs",
        }
    }

    /// Get the service that owns this resource type.
    ///
    /// # Example
    ///
    /// ```
    /// use workforce_rbac::resources::{ResourceType, Service};
    ///
    /// assert_eq!(ResourceType::Users.service(), Service::Platform);
    /// assert_eq!(ResourceType::Shifts.service(), Service::Scheduling);
    /// assert_eq!(ResourceType::Kits.service(), Service::Logistics);
    /// ```
    pub fn service(&self) -> Service {
        match self {
            ResourceType::System
            | ResourceType::Users
            | ResourceType::Organizations
            | ResourceType::Regions
            | ResourceType::Roles
            | ResourceType::Features
            | ResourceType::Settings => Service::Platform,
            ResourceType::Staff | ResourceType::Timesheets | ResourceType::Availability => {
                Service::Workforce
            }
            ResourceType::Events
            | ResourceType::Shifts
            | ResourceType::Bookings
            | ResourceType::Clients => Service::Scheduling,
            ResourceType::Kits | ResourceType::Venues => Service::Logistics,
            ResourceType::Reports | ResourceType::AuditLogs => Service::Reporting,
        }
    }

    /// Parse resource type from its wire representation.
    ///
    /// Matching is exact so that the permission round-trip law holds:
    /// singular spellings such as `user` are not resource types.
    ///
    /// # Example
    ///
    /// ```
    /// use workforce_rbac::resources::ResourceType;
    ///
    /// assert_eq!(ResourceType::parse("users"), Some(ResourceType::Users));
    /// assert_eq!(ResourceType::parse("audit_logs"), Some(ResourceType::AuditLogs));
    /// assert_eq!(ResourceType::parse("user"), None);
    /// assert_eq!(ResourceType::parse("all"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            // Platform
            "system" => Some(ResourceType::System),
            "users" => Some(ResourceType::Users),
            "organizations" => Some(ResourceType::Organizations),
            "regions" => Some(ResourceType::Regions),
            "roles" => Some(ResourceType::Roles),
            "features" => Some(ResourceType::Features),
            "settings" => Some(ResourceType::Settings),
            // Workforce
            "staff" => Some(ResourceType::Staff),
            "timesheets" => Some(ResourceType::Timesheets),
            "availability" => Some(ResourceType::Availability),
            // Scheduling
            "events" => Some(ResourceType::Events),
            "shifts" => Some(ResourceType::Shifts),
            "bookings" => Some(ResourceType::Bookings),
            "clients" => Some(ResourceType::Clients),
            // Logistics
            "kits" => Some(ResourceType::Kits),
            "venues" => Some(ResourceType::Venues),
            // Reporting
            "reports" => Some(ResourceType::Reports),
            "audit_logs" => Some(ResourceType::AuditLogs),
            _ => None,
        }
    }

    /// Get all resource types.
    pub fn all() -> Vec<Self> {
        vec![
            // Platform
            ResourceType::System,
            ResourceType::Users,
            ResourceType::Organizations,
            ResourceType::Regions,
            ResourceType::Roles,
            ResourceType::Features,
            ResourceType::Settings,
            // Workforce
            ResourceType::Staff,
            ResourceType::Timesheets,
            ResourceType::Availability,
            // Scheduling
            ResourceType::Events,
            ResourceType::Shifts,
            ResourceType::Bookings,
            ResourceType::Clients,
            // Logistics
            ResourceType::Kits,
            ResourceType::Venues,
            // Reporting
            ResourceType::Reports,
            ResourceType::AuditLogs,
        ]
    }

    /// Get all resource types owned by a service.
    ///
    /// # Example
    ///
    /// ```
    /// use workforce_rbac::resources::{ResourceType, Service};
    ///
    /// let logistics = ResourceType::for_service(Service::Logistics);
    /// assert_eq!(logistics, vec![ResourceType::Kits, ResourceType::Venues]);
    /// ```
    pub fn for_service(service: Service) -> Vec<Self> {
        Self::all()
            .into_iter()
            .filter(|r| r.service() == service)
            .collect()
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The resource position of a permission: a concrete type or the `all` wildcard.
///
/// `all` is deliberately not a [`ResourceType`]; it may only appear as the
/// resource of a permission, never as a resource that something belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceSelector {
    /// Every resource type.
    All,
    /// One concrete resource type.
    Resource(ResourceType),
}

impl ResourceSelector {
    /// Wire text of the wildcard selector.
    pub const WILDCARD: &'static str = "all";

    /// Get the wire representation of the selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceSelector::All => Self::WILDCARD,
            ResourceSelector::Resource(resource) => resource.as_str(),
        }
    }

    /// Parse a selector: `all` or a resource type wire name.
    pub fn parse(s: &str) -> Option<Self> {
        if s == Self::WILDCARD {
            return Some(ResourceSelector::All);
        }
        ResourceType::parse(s).map(ResourceSelector::Resource)
    }

    /// Check if this is the `all` wildcard.
    pub fn is_wildcard(&self) -> bool {
        matches!(self, ResourceSelector::All)
    }
}

impl From<ResourceType> for ResourceSelector {
    fn from(resource: ResourceType) -> Self {
        ResourceSelector::Resource(resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_type_service_mapping() {
        assert_eq!(ResourceType::System.service(), Service::Platform);
        assert_eq!(ResourceType::Organizations.service(), Service::Platform);
        assert_eq!(ResourceType::Timesheets.service(), Service::Workforce);
        assert_eq!(ResourceType::Bookings.service(), Service::Scheduling);
        assert_eq!(ResourceType::Venues.service(), Service::Logistics);
        assert_eq!(ResourceType::AuditLogs.service(), Service::Reporting);
    }

    #[test]
    fn test_for_service() {
        assert_eq!(ResourceType::for_service(Service::Platform).len(), 7);
        assert_eq!(ResourceType::for_service(Service::Workforce).len(), 3);
        assert_eq!(ResourceType::for_service(Service::Scheduling).len(), 4);
        assert_eq!(ResourceType::for_service(Service::Logistics).len(), 2);
        assert_eq!(ResourceType::for_service(Service::Reporting).len(), 2);

        let total: usize = Service::all()
            .into_iter()
            .map(|s| ResourceType::for_service(s).len())
            .sum();
        assert_eq!(total, ResourceType::all().len());
    }

    #[test]
    fn test_resource_type_parsing() {
        for resource in ResourceType::all() {
            assert_eq!(ResourceType::parse(resource.as_str()), Some(resource));
        }

        assert_eq!(ResourceType::parse("event"), None);
        assert_eq!(ResourceType::parse("Users"), None);
        assert_eq!(ResourceType::parse("all"), None);
        assert_eq!(ResourceType::parse("widgets"), None);
    }

    #[test]
    fn test_selector_parsing() {
        assert_eq!(ResourceSelector::parse("all"), Some(ResourceSelector::All));
        assert_eq!(
            ResourceSelector::parse("kits"),
            Some(ResourceSelector::Resource(ResourceType::Kits))
        );
        assert_eq!(ResourceSelector::parse("ALL"), None);
        assert!(ResourceSelector::All.is_wildcard());
        assert!(!ResourceSelector::from(ResourceType::Kits).is_wildcard());
        assert_eq!(ResourceSelector::from(ResourceType::AuditLogs).as_str(), "audit_logs");
    }

    #[test]
    fn test_service_parsing() {
        for service in Service::all() {
            assert_eq!(Service::parse(service.as_str()), Some(service));
        }
        assert_eq!(Service::parse("Scheduling"), Some(Service::Scheduling));
        assert_eq!(Service::parse("billing"), None);
    }

    #[test]
    fn test_all_resources_count() {
        assert_eq!(ResourceType::all().len(), 18);
    }
}
