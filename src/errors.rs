//! Error types with diagnostic codes using miette
//!
//! The set of failures is closed: a shape parameter is bad, or the context
//! configuration is bad. Nothing here is transient.

use miette::Diagnostic;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = SpatialError> = std::result::Result<T, E>;

/// Errors raised by context resolution and shape construction
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum SpatialError {
    /// A coordinate or shape parameter violates a bounds or ordering rule.
    #[error("invalid shape: {message}")]
    #[diagnostic(
        code(spatialctx::invalid_shape),
        help("coordinates must lie within the context's world bounds")
    )]
    InvalidShape { message: String },

    /// The context could not be resolved from its configuration.
    #[error("invalid configuration: {message}")]
    #[diagnostic(code(spatialctx::invalid_configuration))]
    InvalidConfiguration { message: String },
}

impl SpatialError {
    pub fn invalid_shape(message: impl Into<String>) -> Self {
        SpatialError::InvalidShape {
            message: message.into(),
        }
    }

    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        SpatialError::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Whether this is a shape validation failure
    pub fn is_invalid_shape(&self) -> bool {
        matches!(self, SpatialError::InvalidShape { .. })
    }

    /// Whether this is a configuration failure
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, SpatialError::InvalidConfiguration { .. })
    }
}
