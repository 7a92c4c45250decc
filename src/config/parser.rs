//! Pipeline entry point for parsing a Safety Center configuration.
//!
//! Validates call-level preconditions, drives the external deserializer, and
//! hands the raw tree to the converters. A call either produces a fully
//! validated [`SafetyCenterConfig`] or a single descriptive
//! [`ConfigError`](crate::error::ConfigError); there is no partially-valid
//! result and nothing is cached across calls.

use std::io::Read;

use tracing::{debug, info};

use crate::config::convert;
use crate::config::raw;
use crate::config::resource::ResourceLookup;
use crate::config::types::SafetyCenterConfig;
use crate::error::ConfigError;

/// Parse and validate raw configuration bytes into a [`SafetyCenterConfig`].
///
/// `resource_pkg_name` names the package that owns the configuration's string
/// resources; every `@string/` reference in the document is resolved against
/// it through `resources`.
///
/// # Errors
///
/// Fails with [`ConfigError::InvalidInput`] when `resource_pkg_name` is
/// empty, with [`ConfigError::DeserializationFailed`] when the bytes cannot
/// be deserialized, and with the structural variants of
/// [`ConfigError`](crate::error::ConfigError) when the document violates an
/// invariant the schema cannot express. The first failure, in document order,
/// aborts the parse.
pub fn parse<R: Read>(
    input: R,
    resource_pkg_name: &str,
    resources: &dyn ResourceLookup,
) -> Result<SafetyCenterConfig, ConfigError> {
    validate_input(resource_pkg_name)?;

    debug!(package = resource_pkg_name, "parsing safety center configuration");
    let raw = raw::read(input).map_err(ConfigError::deserialization_failed)?;
    let config = convert::convert_config(raw.as_ref(), resource_pkg_name, resources)?;

    info!(
        safety_sources_groups = config.safety_sources_groups().len(),
        static_safety_sources_groups = config.static_safety_sources_groups().len(),
        "safety center configuration parsed"
    );
    Ok(config)
}

fn validate_input(resource_pkg_name: &str) -> Result<(), ConfigError> {
    if resource_pkg_name.is_empty() {
        return Err(ConfigError::invalid_input("Resource package name"));
    }
    Ok(())
}
