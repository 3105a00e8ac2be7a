//! # Permission Codec
//!
//! Conversion between [`PermissionFeature`] and its canonical string form,
//! `action:resource` or `action:resource:scope`.
//!
//! The codec checks shape only. Segment text outside the closed vocabulary is
//! preserved as [`Segment::Unknown`](crate::permissions::Segment::Unknown), so
//! `serialize_permission(&parse_permission(s)?) == s` for every well-formed `s`.

use std::fmt;
use std::str::FromStr;

use crate::error::{PermissionError, PermissionResult};
use crate::permissions::PermissionFeature;

/// Separator between permission segments.
pub const SEPARATOR: char = ':';

/// Parse a permission string.
///
/// # Errors
///
/// Returns [`PermissionError::Malformed`] unless the input splits into
/// exactly 2 or 3 segments.
///
/// # Example
///
/// ```
/// use workforce_rbac::codec::parse_permission;
/// use workforce_rbac::scopes::PermissionScope;
///
/// let perm = parse_permission("view:users:owned").unwrap();
/// assert_eq!(perm.scope.and_then(|s| s.known()), Some(PermissionScope::Owned));
///
/// assert!(parse_permission("nocolon").is_err());
/// ```
pub fn parse_permission(s: &str) -> PermissionResult<PermissionFeature> {
    let segments: Vec<&str> = s.split(SEPARATOR).collect();

    match segments.as_slice() {
        [action, resource] => Ok(PermissionFeature::from_segments(action, resource, None)),
        [action, resource, scope] => Ok(PermissionFeature::from_segments(
            action,
            resource,
            Some(scope),
        )),
        _ => Err(PermissionError::malformed(s, segments.len())),
    }
}

/// Serialize a permission to its canonical string.
///
/// The structured value is trusted; nothing is re-validated.
pub fn serialize_permission(permission: &PermissionFeature) -> String {
    permission.to_string()
}

impl fmt::Display for PermissionFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{SEPARATOR}{}",
            self.action.as_str(),
            self.resource.as_str()
        )?;
        if let Some(scope) = &self.scope {
            write!(f, "{SEPARATOR}{}", scope.as_str())?;
        }
        Ok(())
    }
}

impl FromStr for PermissionFeature {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_permission(s)
    }
}
