//! # Safety Center Config
//!
//! Parsing and validation for the Safety Center safety-sources configuration.
//! Downstream integrators ship the configuration as a packaged XML resource;
//! this crate turns those raw bytes into a strongly-typed, immutable
//! [`SafetyCenterConfig`] object graph, or a single descriptive error.
//!
//! ## Key Features
//! - One-call entry point: [`parse`] takes the raw bytes, the owning package
//!   name, and a resource-lookup capability, and returns a validated config
//! - Structural validation beyond what the XML schema can express (required
//!   collections, reference syntax, resource-id resolvability)
//! - String references (`@string/...`) resolved to numeric resource ids at
//!   parse time via the [`ResourceLookup`] trait
//! - Comprehensive error reporting through a single [`ConfigError`] type
//!
//! ## Design Principles
//! - Fail fast: the first invalid element aborts the whole parse; there is
//!   never a partially-valid result
//! - Immutable by construction: every entity is validated as it is built and
//!   cannot be mutated afterwards
//! - Fully synchronous: a `parse` call owns all of its state and returns
//!   before control is handed back; concurrent calls need no coordination
//! - Trait-based abstractions for dependency injection at the resource-lookup
//!   seam

pub mod config;
pub mod error;

// Re-export commonly used types at the crate root for convenience
pub use config::*;
pub use error::*;

/// Version of the safety-center-config crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
