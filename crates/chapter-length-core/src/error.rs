//! Error types for chapter-length-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur when resolving a chapter-length category.
///
/// Measurement, validation, and truncation never fail on text; the only
/// runtime error is a category label that is not in the specification table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LengthError {
    /// The category label is not one of the recognised chapter lengths.
    #[error("unknown chapter length: {label:?}. Use: {available}")]
    InvalidCategory {
        /// The label that was requested.
        label: String,
        /// Comma-separated list of recognised labels.
        available: String,
    },
}

/// Result type alias using [`LengthError`].
pub type LengthResult<T> = Result<T, LengthError>;
