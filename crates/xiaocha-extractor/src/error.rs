//! Error types for the Extractor

use thiserror::Error;
use xiaocha_lang::LangError;

/// Errors that can occur while building or running the Extractor
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The segmenter failed while assembling entities
    #[error("Segmenter unavailable: {0}")]
    DependencyUnavailable(String),

    /// A claim pattern or translation marker is not usable
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Why it was rejected
        reason: String,
    },

    /// The same pattern appears twice in one table
    #[error("Duplicate pattern: {0}")]
    DuplicatePattern(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML (de)serialization error
    #[error("TOML error: {0}")]
    Toml(String),
}

impl From<LangError> for ExtractorError {
    fn from(e: LangError) -> Self {
        match e {
            LangError::InvalidMarker { pattern, reason } => {
                ExtractorError::InvalidPattern { pattern, reason }
            }
        }
    }
}

impl From<toml::de::Error> for ExtractorError {
    fn from(e: toml::de::Error) -> Self {
        ExtractorError::Toml(format!("Failed to parse TOML: {}", e))
    }
}

impl From<toml::ser::Error> for ExtractorError {
    fn from(e: toml::ser::Error) -> Self {
        ExtractorError::Toml(format!("Failed to serialize to TOML: {}", e))
    }
}
