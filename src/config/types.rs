//! Domain model for the safety-sources configuration.
//!
//! Every entity here is immutable once constructed. Construction goes through
//! a single validating constructor per entity that takes required fields as
//! plain arguments and optional fields as explicit `Option`s, checks that the
//! required fields are populated, and either returns the finished value or
//! fails with [`ConfigError::InvalidElement`] carrying the caller-supplied
//! element name. A failed construction leaves nothing behind to misuse.

use serde::Deserialize;

use crate::config::resource::ResourceId;
use crate::error::ConfigError;

/// Kind of a safety source.
///
/// The raw schema leaves the kind attribute off sources that are rendered
/// from static configuration alone, so the unset value maps to [`Static`].
///
/// [`Static`]: SafetySourceType::Static
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SafetySourceType {
    /// Entry described entirely by configuration, with no live provider
    #[default]
    Static,

    /// Entry backed by a live provider that pushes status updates
    Dynamic,

    /// Provider that contributes issues but no visible entry of its own
    IssueOnly,
}

/// Profiles a safety source applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetySourceProfile {
    /// The source reports for the primary profile only
    #[default]
    PrimaryProfileOnly,

    /// The source reports for all profiles on the device
    AllProfiles,
}

/// The atomic unit describing one status/entry provider, including its
/// activation and display metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafetySource {
    source_type: SafetySourceType,
    id: String,
    package_name: String,
    title_res_id: Option<ResourceId>,
    summary_res_id: Option<ResourceId>,
    intent_action: String,
    profile: SafetySourceProfile,
    search_terms_res_id: Option<ResourceId>,
    broadcast_receiver_class_name: Option<String>,
    disallow_logging: bool,
    allow_refresh_on_page_open: bool,
}

impl SafetySource {
    /// Validate and assemble a safety source.
    ///
    /// `element` names the XML element being converted and is used purely for
    /// error diagnostics. Fails with [`ConfigError::InvalidElement`] when a
    /// required field is unpopulated.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        element: &str,
        source_type: Option<SafetySourceType>,
        id: String,
        package_name: String,
        title_res_id: Option<ResourceId>,
        summary_res_id: Option<ResourceId>,
        intent_action: String,
        profile: Option<SafetySourceProfile>,
        search_terms_res_id: Option<ResourceId>,
        broadcast_receiver_class_name: Option<String>,
        disallow_logging: bool,
        allow_refresh_on_page_open: bool,
    ) -> Result<Self, ConfigError> {
        if id.is_empty() || package_name.is_empty() || intent_action.is_empty() {
            return Err(ConfigError::invalid_element(element));
        }
        Ok(Self {
            source_type: source_type.unwrap_or_default(),
            id,
            package_name,
            title_res_id,
            summary_res_id,
            intent_action,
            profile: profile.unwrap_or_default(),
            search_terms_res_id,
            broadcast_receiver_class_name,
            disallow_logging,
            allow_refresh_on_page_open,
        })
    }

    /// Kind of this source
    pub fn source_type(&self) -> SafetySourceType {
        self.source_type
    }

    /// Unique identifier of this source
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Package that owns the provider behind this source
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Resolved title resource id, if a title was configured
    pub fn title_res_id(&self) -> Option<ResourceId> {
        self.title_res_id
    }

    /// Resolved summary resource id, if a summary was configured
    pub fn summary_res_id(&self) -> Option<ResourceId> {
        self.summary_res_id
    }

    /// Intent action used to open the source's page
    pub fn intent_action(&self) -> &str {
        &self.intent_action
    }

    /// Profiles this source applies to
    pub fn profile(&self) -> SafetySourceProfile {
        self.profile
    }

    /// Resolved search-terms resource id, if search terms were configured
    pub fn search_terms_res_id(&self) -> Option<ResourceId> {
        self.search_terms_res_id
    }

    /// Class name of the broadcast receiver handling refresh requests
    pub fn broadcast_receiver_class_name(&self) -> Option<&str> {
        self.broadcast_receiver_class_name.as_deref()
    }

    /// Whether interaction logging is disallowed for this source
    pub fn disallow_logging(&self) -> bool {
        self.disallow_logging
    }

    /// Whether the source may be refreshed when the page opens
    pub fn allow_refresh_on_page_open(&self) -> bool {
        self.allow_refresh_on_page_open
    }
}

/// A named, user-described collection of sources shown together in a UI
/// section, with independently configurable display fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafetySourcesGroup {
    id: String,
    title_res_id: Option<ResourceId>,
    summary_res_id: Option<ResourceId>,
    safety_sources: Vec<SafetySource>,
}

impl SafetySourcesGroup {
    /// Validate and assemble a safety sources group.
    ///
    /// Fails with [`ConfigError::InvalidElement`] when the identifier is
    /// unpopulated. The source list may be empty.
    pub fn new(
        element: &str,
        id: String,
        title_res_id: Option<ResourceId>,
        summary_res_id: Option<ResourceId>,
        safety_sources: Vec<SafetySource>,
    ) -> Result<Self, ConfigError> {
        if id.is_empty() {
            return Err(ConfigError::invalid_element(element));
        }
        Ok(Self {
            id,
            title_res_id,
            summary_res_id,
            safety_sources,
        })
    }

    /// Identifier of this group
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Resolved title resource id, if a title was configured
    pub fn title_res_id(&self) -> Option<ResourceId> {
        self.title_res_id
    }

    /// Resolved summary resource id, if a summary was configured
    pub fn summary_res_id(&self) -> Option<ResourceId> {
        self.summary_res_id
    }

    /// Sources in this group, in document order
    pub fn safety_sources(&self) -> &[SafetySource] {
        &self.safety_sources
    }
}

/// A named collection of static sources with fewer configurable display
/// fields than a [`SafetySourcesGroup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticSafetySourcesGroup {
    id: String,
    title_res_id: Option<ResourceId>,
    static_safety_sources: Vec<SafetySource>,
}

impl StaticSafetySourcesGroup {
    /// Validate and assemble a static safety sources group.
    pub fn new(
        element: &str,
        id: String,
        title_res_id: Option<ResourceId>,
        static_safety_sources: Vec<SafetySource>,
    ) -> Result<Self, ConfigError> {
        if id.is_empty() {
            return Err(ConfigError::invalid_element(element));
        }
        Ok(Self {
            id,
            title_res_id,
            static_safety_sources,
        })
    }

    /// Identifier of this group
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Resolved title resource id, if a title was configured
    pub fn title_res_id(&self) -> Option<ResourceId> {
        self.title_res_id
    }

    /// Sources in this group, in document order
    pub fn static_safety_sources(&self) -> &[SafetySource] {
        &self.static_safety_sources
    }
}

/// The root validated configuration object.
///
/// Owns its group collections outright; re-parsing the same bytes always
/// yields a brand-new graph, never a shared instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafetyCenterConfig {
    safety_sources_groups: Vec<SafetySourcesGroup>,
    static_safety_sources_groups: Vec<StaticSafetySourcesGroup>,
}

impl SafetyCenterConfig {
    /// Assemble the root configuration from already-validated groups.
    ///
    /// Both collections may be empty; their presence in the raw input is
    /// enforced by the converter, not here.
    pub fn new(
        safety_sources_groups: Vec<SafetySourcesGroup>,
        static_safety_sources_groups: Vec<StaticSafetySourcesGroup>,
    ) -> Self {
        Self {
            safety_sources_groups,
            static_safety_sources_groups,
        }
    }

    /// Dynamic groups, in document order
    pub fn safety_sources_groups(&self) -> &[SafetySourcesGroup] {
        &self.safety_sources_groups
    }

    /// Static groups, in document order
    pub fn static_safety_sources_groups(&self) -> &[StaticSafetySourcesGroup] {
        &self.static_safety_sources_groups
    }
}
