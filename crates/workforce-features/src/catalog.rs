//! The built-in feature catalog.
//!
//! One top-level feature per screen of the application, grouped by service.
//! Resources edited inside another screen are nested as sub-features.

use workforce_rbac::{Action, ResourceType, Service};

use crate::feature::{standard_operations, Feature, FeatureOperation};

/// Build the catalog, in display order.
pub(crate) fn build() -> Vec<Feature> {
    let mut features = Vec::new();
    for service in Service::all() {
        features.extend(service_features(service));
    }
    features
}

fn service_features(service: Service) -> Vec<Feature> {
    match service {
        Service::Platform => platform(),
        Service::Workforce => workforce(),
        Service::Scheduling => scheduling(),
        Service::Logistics => logistics(),
        Service::Reporting => reporting(),
    }
}

/// A feature for one resource with the four CRUD operations.
fn crud_feature(resource: ResourceType, name: &str, description: &str) -> Feature {
    Feature::new(resource.as_str(), name, description, resource.service())
        .with_operations(standard_operations(resource.as_str()))
}

/// A feature for one resource with a hand-picked set of operations.
fn feature(resource: ResourceType, name: &str, description: &str) -> Feature {
    Feature::new(resource.as_str(), name, description, resource.service())
}

fn op(resource: ResourceType, action: Action, name: &str, description: &str) -> FeatureOperation {
    FeatureOperation::for_resource(resource, action, name, description)
}

fn platform() -> Vec<Feature> {
    use ResourceType::*;

    vec![
        feature(System, "System", "Platform-wide administration")
            .with_operation(op(System, Action::View, "View System", "View system status and configuration"))
            .with_operation(op(System, Action::Manage, "Manage System", "Change system configuration"))
            .with_route("/admin/system"),
        crud_feature(Organizations, "Organizations", "Tenant organizations")
            .with_sub_feature(crud_feature(Regions, "Regions", "Regions within an organization"))
            .with_sub_feature(
                feature(Settings, "Settings", "Organization settings")
                    .with_operation(op(Settings, Action::View, "View Settings", "View organization settings"))
                    .with_operation(op(Settings, Action::Update, "Update Settings", "Change organization settings")),
            )
            .with_route("/organizations"),
        crud_feature(Users, "Users", "User accounts")
            .with_operation(op(Users, Action::Assign, "Assign Roles", "Assign roles to users"))
            .with_operation(op(Users, Action::Import, "Import Users", "Bulk import user accounts"))
            .with_sub_feature(crud_feature(Roles, "Roles", "Roles and their permission grants"))
            .with_route("/users"),
        feature(Features, "Features", "Feature toggles per organization")
            .with_operation(op(Features, Action::View, "View Features", "List available features"))
            .with_operation(op(Features, Action::Manage, "Toggle Features", "Enable or disable features"))
            .with_route("/admin/features"),
    ]
}

fn workforce() -> Vec<Feature> {
    use ResourceType::*;

    vec![crud_feature(Staff, "Staff", "Staff member records")
        .with_operation(op(Staff, Action::Assign, "Assign Staff", "Assign staff to shifts"))
        .with_operation(op(Staff, Action::Import, "Import Staff", "Bulk import staff records"))
        .with_operation(op(Staff, Action::Export, "Export Staff", "Export staff records"))
        .with_sub_feature(
            crud_feature(Timesheets, "Timesheets", "Hours submitted by staff")
                .with_operation(op(Timesheets, Action::Approve, "Approve Timesheets", "Approve submitted timesheets"))
                .with_operation(op(Timesheets, Action::Export, "Export Timesheets", "Export timesheets for payroll")),
        )
        .with_sub_feature(crud_feature(Availability, "Availability", "Staff availability calendars"))
        .with_route("/staff")]
}

fn scheduling() -> Vec<Feature> {
    use ResourceType::*;

    vec![
        crud_feature(Events, "Events", "Events being staffed")
            .with_operation(op(Events, Action::Import, "Import Events", "Bulk import events"))
            .with_operation(op(Events, Action::Export, "Export Events", "Export event schedules"))
            .with_sub_feature(
                crud_feature(Shifts, "Shifts", "Shifts within an event")
                    .with_operation(op(Shifts, Action::Assign, "Assign Shifts", "Fill shifts with staff")),
            )
            .with_sub_feature(
                crud_feature(Bookings, "Bookings", "Client bookings for events")
                    .with_operation(op(Bookings, Action::Approve, "Approve Bookings", "Confirm pending bookings")),
            )
            .with_route("/events"),
        crud_feature(Clients, "Clients", "Client accounts").with_route("/clients"),
    ]
}

fn logistics() -> Vec<Feature> {
    use ResourceType::*;

    vec![
        crud_feature(Kits, "Kits", "Equipment kits")
            .with_operation(op(Kits, Action::Assign, "Assign Kits", "Assign kits to events"))
            .with_route("/kits"),
        crud_feature(Venues, "Venues", "Event venues").with_route("/venues"),
    ]
}

fn reporting() -> Vec<Feature> {
    use ResourceType::*;

    vec![
        feature(Reports, "Reports", "Operational reports")
            .with_operation(op(Reports, Action::View, "View Reports", "View generated reports"))
            .with_operation(op(Reports, Action::Create, "Create Reports", "Generate new reports"))
            .with_operation(op(Reports, Action::Export, "Export Reports", "Download reports"))
            .with_route("/reports"),
        feature(AuditLogs, "Audit Logs", "Audit trail of changes")
            .with_operation(op(AuditLogs, Action::View, "View Audit Logs", "Browse the audit trail"))
            .with_operation(op(AuditLogs, Action::Export, "Export Audit Logs", "Download the audit trail"))
            .with_route("/admin/audit-logs"),
    ]
}
