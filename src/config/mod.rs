//! # Safety Center Configuration
//!
//! Domain model, converters, and the parsing entry point for the
//! safety-sources configuration. Data flows one way: raw bytes → raw parsed
//! tree ([`raw`], external deserializer) → converters ([`convert`], recursive,
//! top-down) → validated immutable entities ([`types`], bottom-up), or a
//! descriptive failure at the first point validation fails.

pub(crate) mod convert;
pub mod parser;
pub(crate) mod raw;
pub mod resource;
pub mod types;

// Re-export commonly used types
pub use parser::parse;
pub use resource::{ResourceId, ResourceLookup};
pub use types::{
    SafetyCenterConfig, SafetySource, SafetySourceProfile, SafetySourceType, SafetySourcesGroup,
    StaticSafetySourcesGroup,
};
