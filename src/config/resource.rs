//! Resource reference resolution.
//!
//! Configuration fields that hold human-readable text do not embed the text
//! itself; they carry a symbolic reference to a localized string resource
//! owned by the hosting package. References use the `@string/<name>` syntax
//! and are resolved to numeric resource ids at parse time, after which the
//! symbolic form is discarded.

use crate::error::ConfigError;

/// Numeric identifier of a string resource in the hosting package.
pub type ResourceId = u32;

/// Required prefix for a string resource reference.
const STRING_REFERENCE_PREFIX: &str = "@string/";

/// Capability that maps symbolic resource names, scoped to an owner package,
/// to numeric identifiers.
///
/// The lookup is expected to be synchronous and side-effect free. Results are
/// not cached by this crate; each reference in a configuration is resolved
/// independently, exactly once per parse.
pub trait ResourceLookup {
    /// Resolve a symbolic resource name (e.g. `string/title`) scoped to the
    /// given package, returning `None` when no such resource exists.
    fn resolve(&self, name: &str, package: &str) -> Option<ResourceId>;
}

/// Resolve a `@string/` reference against the owner package's resources.
///
/// `parent` and `field` name the element and attribute the reference was read
/// from and appear only in error diagnostics.
pub(crate) fn resolve_reference(
    reference: &str,
    resource_pkg_name: &str,
    resources: &dyn ResourceLookup,
    parent: &str,
    field: &str,
) -> Result<ResourceId, ConfigError> {
    if !reference.starts_with(STRING_REFERENCE_PREFIX) {
        return Err(ConfigError::NotAReference {
            reference: reference.to_string(),
            parent: parent.to_string(),
            field: field.to_string(),
        });
    }
    // Strip the leading `@`, keeping `string/<name>` as the lookup key.
    resources
        .resolve(&reference[1..], resource_pkg_name)
        .ok_or_else(|| ConfigError::MissingReference {
            reference: reference.to_string(),
            parent: parent.to_string(),
            field: field.to_string(),
        })
}
