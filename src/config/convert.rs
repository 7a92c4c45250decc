//! Converters from the raw parsed tree to the validated domain model.
//!
//! Conversion walks the tree top-down in document order, injecting the owner
//! package name and the resource lookup into every nested conversion, and
//! finalizes entities bottom-up through their validating constructors. The
//! first failure aborts the whole conversion; there is no partial-success
//! aggregation.

use crate::config::raw::{
    RawSafetyCenterConfig, RawSafetySource, RawSafetySourcesGroup, RawStaticSafetySourcesGroup,
    ROOT_ELEMENT,
};
use crate::config::resource::{resolve_reference, ResourceLookup};
use crate::config::types::{
    SafetyCenterConfig, SafetySource, SafetySourcesGroup, StaticSafetySourcesGroup,
};
use crate::error::ConfigError;

const SOURCES_CONFIG_ELEMENT: &str = "safety-sources-config";
const SOURCES_GROUP_ELEMENT: &str = "safety-sources-group";
const STATIC_SOURCES_GROUP_ELEMENT: &str = "static-safety-sources-group";
const SOURCE_ELEMENT: &str = "safety-source";
const STATIC_SOURCE_ELEMENT: &str = "static-safety-source";

/// Convert the raw document root into a validated [`SafetyCenterConfig`].
///
/// Both group collections must be present in the raw tree; a collection that
/// is absent (as opposed to present but empty) makes the enclosing
/// `safety-sources-config` element malformed.
pub(crate) fn convert_config(
    raw: Option<&RawSafetyCenterConfig>,
    resource_pkg_name: &str,
    resources: &dyn ResourceLookup,
) -> Result<SafetyCenterConfig, ConfigError> {
    let raw = raw.ok_or_else(|| ConfigError::missing_element(ROOT_ELEMENT))?;
    let sources_config = raw
        .safety_sources_config
        .as_ref()
        .ok_or_else(|| ConfigError::missing_element(SOURCES_CONFIG_ELEMENT))?;

    let (Some(raw_groups), Some(raw_static_groups)) = (
        sources_config.safety_sources_groups.as_ref(),
        sources_config.static_safety_sources_groups.as_ref(),
    ) else {
        return Err(ConfigError::malformed_element(SOURCES_CONFIG_ELEMENT));
    };

    let mut groups = Vec::with_capacity(raw_groups.len());
    for raw_group in raw_groups {
        groups.push(convert_safety_sources_group(
            raw_group,
            resource_pkg_name,
            resources,
        )?);
    }

    let mut static_groups = Vec::with_capacity(raw_static_groups.len());
    for raw_group in raw_static_groups {
        static_groups.push(convert_static_safety_sources_group(
            raw_group,
            resource_pkg_name,
            resources,
        )?);
    }

    Ok(SafetyCenterConfig::new(groups, static_groups))
}

fn convert_safety_sources_group(
    raw: &RawSafetySourcesGroup,
    resource_pkg_name: &str,
    resources: &dyn ResourceLookup,
) -> Result<SafetySourcesGroup, ConfigError> {
    let title_res_id = raw
        .title
        .as_deref()
        .map(|r| resolve_reference(r, resource_pkg_name, resources, SOURCES_GROUP_ELEMENT, "title"))
        .transpose()?;
    let summary_res_id = raw
        .summary
        .as_deref()
        .map(|r| {
            resolve_reference(
                r,
                resource_pkg_name,
                resources,
                SOURCES_GROUP_ELEMENT,
                "summary",
            )
        })
        .transpose()?;

    let mut sources = Vec::with_capacity(raw.safety_sources.len());
    for raw_source in &raw.safety_sources {
        sources.push(convert_safety_source(
            raw_source,
            resource_pkg_name,
            resources,
            SOURCE_ELEMENT,
        )?);
    }

    let id = raw
        .id
        .clone()
        .ok_or_else(|| ConfigError::invalid_element(SOURCES_GROUP_ELEMENT))?;
    SafetySourcesGroup::new(
        SOURCES_GROUP_ELEMENT,
        id,
        title_res_id,
        summary_res_id,
        sources,
    )
}

fn convert_static_safety_sources_group(
    raw: &RawStaticSafetySourcesGroup,
    resource_pkg_name: &str,
    resources: &dyn ResourceLookup,
) -> Result<StaticSafetySourcesGroup, ConfigError> {
    let title_res_id = raw
        .title
        .as_deref()
        .map(|r| {
            resolve_reference(
                r,
                resource_pkg_name,
                resources,
                STATIC_SOURCES_GROUP_ELEMENT,
                "title",
            )
        })
        .transpose()?;

    let mut sources = Vec::with_capacity(raw.static_safety_sources.len());
    for raw_source in &raw.static_safety_sources {
        sources.push(convert_safety_source(
            raw_source,
            resource_pkg_name,
            resources,
            STATIC_SOURCE_ELEMENT,
        )?);
    }

    let id = raw
        .id
        .clone()
        .ok_or_else(|| ConfigError::invalid_element(STATIC_SOURCES_GROUP_ELEMENT))?;
    StaticSafetySourcesGroup::new(STATIC_SOURCES_GROUP_ELEMENT, id, title_res_id, sources)
}

/// Convert one raw source node.
///
/// `element` is the wire element the node came from (`safety-source` or
/// `static-safety-source`) and is used purely for error context.
fn convert_safety_source(
    raw: &RawSafetySource,
    resource_pkg_name: &str,
    resources: &dyn ResourceLookup,
    element: &str,
) -> Result<SafetySource, ConfigError> {
    let title_res_id = raw
        .title
        .as_deref()
        .map(|r| resolve_reference(r, resource_pkg_name, resources, element, "title"))
        .transpose()?;
    let summary_res_id = raw
        .summary
        .as_deref()
        .map(|r| resolve_reference(r, resource_pkg_name, resources, element, "summary"))
        .transpose()?;
    let search_terms_res_id = raw
        .search_terms
        .as_deref()
        .map(|r| resolve_reference(r, resource_pkg_name, resources, element, "searchTerms"))
        .transpose()?;

    let id = raw
        .id
        .clone()
        .ok_or_else(|| ConfigError::invalid_element(element))?;
    let package_name = raw
        .package_name
        .clone()
        .ok_or_else(|| ConfigError::invalid_element(element))?;
    let intent_action = raw
        .intent_action
        .clone()
        .ok_or_else(|| ConfigError::invalid_element(element))?;

    SafetySource::new(
        element,
        raw.source_type,
        id,
        package_name,
        title_res_id,
        summary_res_id,
        intent_action,
        raw.profile,
        search_terms_res_id,
        raw.broadcast_receiver_class_name.clone(),
        raw.disallow_logging,
        raw.allow_refresh_on_page_open,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::raw::RawSafetySourcesConfig;
    use crate::config::resource::ResourceId;
    use crate::config::types::{SafetySourceProfile, SafetySourceType};

    const PKG: &str = "com.example.app";

    /// Resolves `string/known_*` names and nothing else.
    struct FakeResources;

    impl ResourceLookup for FakeResources {
        fn resolve(&self, name: &str, package: &str) -> Option<ResourceId> {
            (package == PKG && name.starts_with("string/known_")).then_some(42)
        }
    }

    fn raw_source(id: &str) -> RawSafetySource {
        RawSafetySource {
            id: Some(id.to_string()),
            package_name: Some(PKG.to_string()),
            intent_action: Some("ACTION_X".to_string()),
            ..Default::default()
        }
    }

    fn raw_group(id: &str, sources: Vec<RawSafetySource>) -> RawSafetySourcesGroup {
        RawSafetySourcesGroup {
            id: Some(id.to_string()),
            safety_sources: sources,
            ..Default::default()
        }
    }

    fn raw_config(
        groups: Option<Vec<RawSafetySourcesGroup>>,
        static_groups: Option<Vec<RawStaticSafetySourcesGroup>>,
    ) -> RawSafetyCenterConfig {
        RawSafetyCenterConfig {
            safety_sources_config: Some(RawSafetySourcesConfig {
                safety_sources_groups: groups,
                static_safety_sources_groups: static_groups,
            }),
        }
    }

    #[test]
    fn test_absent_root_is_missing_element() {
        let err = convert_config(None, PKG, &FakeResources).unwrap_err();
        match err {
            ConfigError::MissingElement { name } => assert_eq!(name, "safety-center-config"),
            _ => panic!("Expected MissingElement error"),
        }
    }

    #[test]
    fn test_absent_sources_config_is_missing_element() {
        let raw = RawSafetyCenterConfig {
            safety_sources_config: None,
        };
        let err = convert_config(Some(&raw), PKG, &FakeResources).unwrap_err();
        match err {
            ConfigError::MissingElement { name } => assert_eq!(name, "safety-sources-config"),
            _ => panic!("Expected MissingElement error"),
        }
    }

    #[test]
    fn test_absent_collection_is_malformed_element() {
        for (groups, static_groups) in [
            (None, None),
            (Some(vec![]), None),
            (None, Some(vec![])),
        ] {
            let raw = raw_config(groups, static_groups);
            let err = convert_config(Some(&raw), PKG, &FakeResources).unwrap_err();
            match err {
                ConfigError::MalformedElement { name } => {
                    assert_eq!(name, "safety-sources-config")
                }
                _ => panic!("Expected MalformedElement error"),
            }
        }
    }

    #[test]
    fn test_empty_collections_convert_to_empty_config() {
        let raw = raw_config(Some(vec![]), Some(vec![]));
        let config = convert_config(Some(&raw), PKG, &FakeResources).unwrap();
        assert!(config.safety_sources_groups().is_empty());
        assert!(config.static_safety_sources_groups().is_empty());
    }

    #[test]
    fn test_document_order_is_preserved() {
        let raw = raw_config(
            Some(vec![
                raw_group("group1", vec![raw_source("src1"), raw_source("src2")]),
                raw_group("group2", vec![]),
            ]),
            Some(vec![]),
        );
        let config = convert_config(Some(&raw), PKG, &FakeResources).unwrap();

        let ids: Vec<&str> = config
            .safety_sources_groups()
            .iter()
            .map(|g| g.id())
            .collect();
        assert_eq!(ids, ["group1", "group2"]);

        let source_ids: Vec<&str> = config.safety_sources_groups()[0]
            .safety_sources()
            .iter()
            .map(|s| s.id())
            .collect();
        assert_eq!(source_ids, ["src1", "src2"]);
    }

    #[test]
    fn test_group_references_are_resolved_in_context() {
        let mut group = raw_group("group1", vec![]);
        group.title = Some("@string/known_title".to_string());
        group.summary = Some("@string/known_summary".to_string());

        let raw = raw_config(Some(vec![group]), Some(vec![]));
        let config = convert_config(Some(&raw), PKG, &FakeResources).unwrap();
        let converted = &config.safety_sources_groups()[0];
        assert_eq!(converted.title_res_id(), Some(42));
        assert_eq!(converted.summary_res_id(), Some(42));
    }

    #[test]
    fn test_group_title_must_be_a_reference() {
        let mut group = raw_group("group1", vec![]);
        group.title = Some("just text".to_string());

        let raw = raw_config(Some(vec![group]), Some(vec![]));
        let err = convert_config(Some(&raw), PKG, &FakeResources).unwrap_err();
        match err {
            ConfigError::NotAReference {
                reference,
                parent,
                field,
            } => {
                assert_eq!(reference, "just text");
                assert_eq!(parent, "safety-sources-group");
                assert_eq!(field, "title");
            }
            _ => panic!("Expected NotAReference error"),
        }
    }

    #[test]
    fn test_source_search_terms_context_in_errors() {
        let mut source = raw_source("src1");
        source.search_terms = Some("@string/absent".to_string());

        let raw = raw_config(Some(vec![raw_group("group1", vec![source])]), Some(vec![]));
        let err = convert_config(Some(&raw), PKG, &FakeResources).unwrap_err();
        match err {
            ConfigError::MissingReference { parent, field, .. } => {
                assert_eq!(parent, "safety-source");
                assert_eq!(field, "searchTerms");
            }
            _ => panic!("Expected MissingReference error"),
        }
    }

    #[test]
    fn test_missing_required_source_field_is_invalid_element() {
        let mut source = raw_source("src1");
        source.intent_action = None;

        let raw = raw_config(Some(vec![raw_group("group1", vec![source])]), Some(vec![]));
        let err = convert_config(Some(&raw), PKG, &FakeResources).unwrap_err();
        match err {
            ConfigError::InvalidElement { name } => assert_eq!(name, "safety-source"),
            _ => panic!("Expected InvalidElement error"),
        }
    }

    #[test]
    fn test_static_source_errors_carry_static_label() {
        let mut source = raw_source("src1");
        source.package_name = None;

        let static_group = RawStaticSafetySourcesGroup {
            id: Some("static1".to_string()),
            title: None,
            static_safety_sources: vec![source],
        };
        let raw = raw_config(Some(vec![]), Some(vec![static_group]));
        let err = convert_config(Some(&raw), PKG, &FakeResources).unwrap_err();
        match err {
            ConfigError::InvalidElement { name } => assert_eq!(name, "static-safety-source"),
            _ => panic!("Expected InvalidElement error"),
        }
    }

    #[test]
    fn test_missing_group_id_is_invalid_element() {
        let mut group = raw_group("group1", vec![]);
        group.id = None;

        let raw = raw_config(Some(vec![group]), Some(vec![]));
        let err = convert_config(Some(&raw), PKG, &FakeResources).unwrap_err();
        match err {
            ConfigError::InvalidElement { name } => assert_eq!(name, "safety-sources-group"),
            _ => panic!("Expected InvalidElement error"),
        }
    }

    #[test]
    fn test_first_failure_wins() {
        // group1 has a bad reference, group2 is missing its id; conversion
        // must report group1's failure.
        let mut group1 = raw_group("group1", vec![]);
        group1.title = Some("oops".to_string());
        let mut group2 = raw_group("group2", vec![]);
        group2.id = None;

        let raw = raw_config(Some(vec![group1, group2]), Some(vec![]));
        let err = convert_config(Some(&raw), PKG, &FakeResources).unwrap_err();
        assert!(matches!(err, ConfigError::NotAReference { .. }));
    }

    #[test]
    fn test_sentinel_free_defaults_apply() {
        let raw = raw_config(
            Some(vec![raw_group("group1", vec![raw_source("src1")])]),
            Some(vec![]),
        );
        let config = convert_config(Some(&raw), PKG, &FakeResources).unwrap();
        let source = &config.safety_sources_groups()[0].safety_sources()[0];
        assert_eq!(source.source_type(), SafetySourceType::Static);
        assert_eq!(source.profile(), SafetySourceProfile::PrimaryProfileOnly);
    }
}
