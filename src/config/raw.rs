//! Raw parsed tree produced by the external XML deserializer.
//!
//! This module is the adapter boundary around the schema-derived
//! deserializer: everything `quick-xml`-specific stays in here, and the rest
//! of the pipeline only ever sees the `Raw*` structs. Conversion logic can be
//! exercised against hand-built trees (plain struct literals) without any XML
//! involved.
//!
//! Absence is modeled explicitly: every scalar field is an `Option`, and the
//! two group collections are `Option<Vec<_>>` so that an absent collection
//! stays distinguishable from a present-but-empty one. The original schema's
//! zero/unset sentinel for the type and profile attributes is translated into
//! `None` here, once, so converters never see a sentinel value.

use std::io::Read;

use serde::Deserialize;
use thiserror::Error;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::config::types::{SafetySourceProfile, SafetySourceType};

/// Name of the document root element.
pub(crate) const ROOT_ELEMENT: &str = "safety-center-config";

/// Failures raised by the external deserializer.
///
/// Never crosses the crate boundary as-is; the pipeline entry point wraps it
/// into [`ConfigError::DeserializationFailed`](crate::error::ConfigError).
#[derive(Debug, Error)]
pub(crate) enum ReadError {
    /// The input bytes could not be read
    #[error("failed to read configuration bytes")]
    Io(#[from] std::io::Error),

    /// The input was not well-formed XML
    #[error("malformed XML")]
    Syntax(#[from] quick_xml::Error),

    /// The XML did not match the configuration schema
    #[error("XML does not match the configuration schema")]
    Schema(#[from] quick_xml::DeError),
}

/// Raw `<safety-center-config>` document root.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawSafetyCenterConfig {
    #[serde(rename = "safety-sources-config")]
    pub(crate) safety_sources_config: Option<RawSafetySourcesConfig>,
}

/// Raw `<safety-sources-config>` element holding both group collections.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawSafetySourcesConfig {
    /// `None` when the document contains no dynamic group at all.
    #[serde(rename = "safety-sources-group")]
    pub(crate) safety_sources_groups: Option<Vec<RawSafetySourcesGroup>>,

    /// `None` when the document contains no static group at all.
    #[serde(rename = "static-safety-sources-group")]
    pub(crate) static_safety_sources_groups: Option<Vec<RawStaticSafetySourcesGroup>>,
}

/// Raw `<safety-sources-group>` element.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawSafetySourcesGroup {
    #[serde(rename = "@id")]
    pub(crate) id: Option<String>,

    #[serde(rename = "@title")]
    pub(crate) title: Option<String>,

    #[serde(rename = "@summary")]
    pub(crate) summary: Option<String>,

    #[serde(rename = "safety-source", default)]
    pub(crate) safety_sources: Vec<RawSafetySource>,
}

/// Raw `<static-safety-sources-group>` element. Carries no summary.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawStaticSafetySourcesGroup {
    #[serde(rename = "@id")]
    pub(crate) id: Option<String>,

    #[serde(rename = "@title")]
    pub(crate) title: Option<String>,

    #[serde(rename = "static-safety-source", default)]
    pub(crate) static_safety_sources: Vec<RawSafetySource>,
}

/// Raw `<safety-source>` / `<static-safety-source>` element.
///
/// The two wire elements share one attribute set; which one a node came from
/// only matters for error labels, which the converters carry separately.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawSafetySource {
    #[serde(rename = "@type")]
    pub(crate) source_type: Option<SafetySourceType>,

    #[serde(rename = "@id")]
    pub(crate) id: Option<String>,

    #[serde(rename = "@packageName")]
    pub(crate) package_name: Option<String>,

    #[serde(rename = "@title")]
    pub(crate) title: Option<String>,

    #[serde(rename = "@summary")]
    pub(crate) summary: Option<String>,

    #[serde(rename = "@intentAction")]
    pub(crate) intent_action: Option<String>,

    #[serde(rename = "@profile")]
    pub(crate) profile: Option<SafetySourceProfile>,

    #[serde(rename = "@searchTerms")]
    pub(crate) search_terms: Option<String>,

    #[serde(rename = "@broadcastReceiverClassName")]
    pub(crate) broadcast_receiver_class_name: Option<String>,

    #[serde(rename = "@disallowLogging", default)]
    pub(crate) disallow_logging: bool,

    #[serde(rename = "@allowRefreshOnPageOpen", default)]
    pub(crate) allow_refresh_on_page_open: bool,
}

/// Deserialize configuration bytes into the raw tree.
///
/// Returns `Ok(None)` when the document holds no `safety-center-config` root
/// element, mirroring the generated parser's behavior of producing no tree
/// for a foreign document. All other failures are [`ReadError`]s.
pub(crate) fn read<R: Read>(mut input: R) -> Result<Option<RawSafetyCenterConfig>, ReadError> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    if !has_config_root(&text)? {
        return Ok(None);
    }
    let raw: RawSafetyCenterConfig = quick_xml::de::from_str(&text)?;
    Ok(Some(raw))
}

/// Check whether the document's first element is the expected root.
fn has_config_root(text: &str) -> Result<bool, ReadError> {
    let mut reader = Reader::from_str(text);
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => {
                return Ok(e.name().as_ref() == ROOT_ELEMENT.as_bytes())
            }
            Event::Eof => return Ok(false),
            // Prolog, comments, and whitespace may precede the root.
            _ => {}
        }
    }
}
