//! # Coverage
//!
//! Decides whether a held permission *covers* a requested one.
//!
//! Rules are evaluated in order and the first that applies decides:
//!
//! 1. **Exact match**: identical permission text.
//! 2. **Wildcard resource**: held resource is `all` and the actions are
//!    equal. Scopes are ignored on both sides.
//! 3. **Manage implies CRUD**: held action is `manage`, resources are equal,
//!    and the requested action is `view`, `create`, `update` or `delete`.
//! 4. **Same action and resource**.
//! 5. Otherwise nothing is covered.
//!
//! Rules 3 and 4 then compare scopes: an unscoped grant covers any scope, a
//! scoped grant never covers an unscoped request, and otherwise
//! [`PermissionScope::covers`] decides.
//!
//! Rules 2 to 4 only apply when both permissions are made entirely of known
//! vocabulary. An unrecognized permission covers nothing and is covered by
//! nothing except its exact text.
//!
//! There is no rule combining the wildcard resource with `manage`: `manage:all`
//! covers `manage:events` but not `view:events`.

use serde::Serialize;
use tracing::trace;

use crate::actions::Action;
use crate::codec::parse_permission;
use crate::error::PermissionResult;
use crate::permissions::PermissionFeature;
use crate::resources::ResourceSelector;
use crate::scopes::PermissionScope;

/// The rule that decided a coverage check.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CoverageRule {
    /// Identical permission text.
    ExactMatch,
    /// `action:all` grant for the requested action.
    WildcardResource,
    /// `manage` grant over a CRUD request on the same resource.
    ManageImpliesCrud,
    /// Grant with the same action and resource.
    SameActionAndResource,
    /// One side contains vocabulary outside the closed sets.
    Unrecognized,
    /// No rule applied.
    NoMatch,
}

/// Outcome of a coverage check.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Decision {
    /// Whether the request is covered.
    pub granted: bool,
    /// The rule that decided.
    pub rule: CoverageRule,
}

impl Decision {
    fn grant(rule: CoverageRule) -> Self {
        Self { granted: true, rule }
    }

    fn deny(rule: CoverageRule) -> Self {
        Self {
            granted: false,
            rule,
        }
    }

    fn scoped(rule: CoverageRule, granted: bool) -> Self {
        Self { granted, rule }
    }
}

/// Check if the `covering` permission string covers the `target` string.
///
/// # Errors
///
/// Returns [`PermissionError::Malformed`](crate::error::PermissionError::Malformed)
/// if either string is malformed. Both are parsed before any rule runs.
///
/// # Example
///
/// ```
/// use workforce_rbac::covers;
///
/// assert!(covers("manage:users", "view:users").unwrap());
/// assert!(!covers("manage:users", "assign:users").unwrap());
/// assert!(covers("view:all", "view:users").unwrap());
/// assert!(covers("manage:events:organization", "view:events:assigned").unwrap());
/// assert!(!covers("view:users:owned", "view:users").unwrap());
/// ```
pub fn covers(covering: &str, target: &str) -> PermissionResult<bool> {
    let covering = parse_permission(covering)?;
    let target = parse_permission(target)?;
    Ok(evaluate(&covering, &target).granted)
}

/// Check if any of the `held` permission strings covers `target`.
///
/// Stops at the first covering grant. Held strings after that grant are not
/// parsed.
///
/// # Errors
///
/// Returns the parse error of `target`, or of the first malformed held
/// string encountered before a covering grant.
///
/// # Example
///
/// ```
/// use workforce_rbac::covers_any;
///
/// let held = ["manage:organizations:organization", "view:reports"];
/// assert!(covers_any(held, "update:organizations:owned").unwrap());
/// assert!(!covers_any(held, "export:reports").unwrap());
/// ```
pub fn covers_any<I, S>(held: I, target: &str) -> PermissionResult<bool>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let target = parse_permission(target)?;
    for grant in held {
        let grant = parse_permission(grant.as_ref())?;
        if evaluate(&grant, &target).granted {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Evaluate coverage between two parsed permissions.
///
/// This is the decision procedure behind [`covers`]; it is total and
/// returns the deciding rule alongside the result.
pub fn evaluate(covering: &PermissionFeature, target: &PermissionFeature) -> Decision {
    let decision = decide(covering, target);
    trace!(
        covering = %covering,
        target = %target,
        rule = ?decision.rule,
        granted = decision.granted,
        "evaluated permission coverage"
    );
    decision
}

fn decide(covering: &PermissionFeature, target: &PermissionFeature) -> Decision {
    if covering.same_text(target) {
        return Decision::grant(CoverageRule::ExactMatch);
    }

    let (Some(held), Some(wanted)) = (covering.resolve(), target.resolve()) else {
        return Decision::deny(CoverageRule::Unrecognized);
    };

    if held.resource == ResourceSelector::All && held.action == wanted.action {
        return Decision::grant(CoverageRule::WildcardResource);
    }

    if held.action == Action::Manage
        && held.resource == wanted.resource
        && held.action.implies(wanted.action)
    {
        return Decision::scoped(
            CoverageRule::ManageImpliesCrud,
            scope_allows(held.scope, wanted.scope),
        );
    }

    if held.action == wanted.action && held.resource == wanted.resource {
        return Decision::scoped(
            CoverageRule::SameActionAndResource,
            scope_allows(held.scope, wanted.scope),
        );
    }

    Decision::deny(CoverageRule::NoMatch)
}

/// Scope comparison shared by the manage and same-action rules.
fn scope_allows(held: Option<PermissionScope>, wanted: Option<PermissionScope>) -> bool {
    match (held, wanted) {
        (None, _) => true,
        // A scoped grant cannot cover an unscoped (global) request.
        (Some(_), None) => false,
        (Some(held), Some(wanted)) => held.covers(wanted),
    }
}
