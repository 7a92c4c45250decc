//! Error handling for safety-center-config
//!
//! All failures of the parse-and-validate pipeline surface as variants of
//! [`ConfigError`]; no foreign error type ever crosses the crate boundary.
//! Deserializer failures keep their underlying cause attached for
//! diagnostics, everything else carries the element or reference context the
//! failure was detected in.

use thiserror::Error;

/// Errors produced while parsing and validating a Safety Center configuration.
///
/// Validation is fail-fast: the first error encountered, in document order,
/// aborts the whole parse. Errors are never downgraded or aggregated.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A call-level precondition was violated before any parsing work
    #[error("{field} must be defined")]
    InvalidInput { field: String },

    /// The external deserializer rejected the input bytes
    #[error("Exception while reading XML: {source}")]
    DeserializationFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A required structural element was absent from the parsed tree
    #[error("Element {name} missing")]
    MissingElement { name: String },

    /// A required element was present but internally inconsistent, e.g. a
    /// required sub-collection was absent rather than empty
    #[error("Element {name} invalid")]
    MalformedElement { name: String },

    /// A string field expected to hold a resource reference did not use the
    /// `@string/` syntax
    #[error("String {reference} in {parent}.{field} is not a reference")]
    NotAReference {
        reference: String,
        parent: String,
        field: String,
    },

    /// A syntactically valid reference did not resolve to any resource id
    #[error("Reference {reference} in {parent}.{field} missing")]
    MissingReference {
        reference: String,
        parent: String,
        field: String,
    },

    /// Entity validation failed, a required field was never populated
    #[error("Element {name} invalid")]
    InvalidElement { name: String },
}

impl ConfigError {
    /// Create an invalid input error for the named call parameter
    pub fn invalid_input(field: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
        }
    }

    /// Create a deserialization error from the external deserializer's cause
    pub fn deserialization_failed(
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::DeserializationFailed {
            source: Box::new(source),
        }
    }

    /// Create a missing element error for the named element
    pub fn missing_element(name: impl Into<String>) -> Self {
        Self::MissingElement { name: name.into() }
    }

    /// Create a malformed element error for the named element
    pub fn malformed_element(name: impl Into<String>) -> Self {
        Self::MalformedElement { name: name.into() }
    }

    /// Create an invalid element error for the named element
    pub fn invalid_element(name: impl Into<String>) -> Self {
        Self::InvalidElement { name: name.into() }
    }
}
