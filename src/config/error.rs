//! Configuration loading errors.

use thiserror::Error;

/// Errors that can occur when reading or writing a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Input was not valid JSON or did not have the configuration shape
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Configuration could not be written as JSON
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),
}
