//! Configuration for the Extractor

use crate::error::ExtractorError;
use crate::patterns::PatternSpec;
use serde::{Deserialize, Serialize};

/// Lowest accepted `confidence_floor`
pub const MIN_CONFIDENCE_FLOOR: f64 = 0.4;

/// Most entities a claim may carry
pub const MAX_ENTITIES: usize = 10;

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Language tag given to claims when the request names none
    pub default_language: String,

    /// Minimum claim length (characters)
    pub min_length: usize,

    /// Maximum claim length (characters)
    pub max_length: usize,

    /// Sentences classified below this confidence are dropped
    pub confidence_floor: f64,

    /// Keywords requested from the segmenter per sentence
    pub keyword_top_k: usize,

    /// Maximum entities kept per claim
    pub max_entities: usize,

    /// Replacement pattern table, in matching order; the built-in table when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patterns: Option<Vec<PatternSpec>>,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.default_language.trim().is_empty() {
            return Err("default_language must not be empty".to_string());
        }
        if self.min_length > self.max_length {
            return Err(format!(
                "min_length {} cannot exceed max_length {}",
                self.min_length, self.max_length
            ));
        }
        if !(MIN_CONFIDENCE_FLOOR..=1.0).contains(&self.confidence_floor) {
            return Err(format!(
                "confidence_floor {} out of range [{}, 1.0]",
                self.confidence_floor, MIN_CONFIDENCE_FLOOR
            ));
        }
        if !(1..=MAX_ENTITIES).contains(&self.max_entities) {
            return Err(format!(
                "max_entities {} out of range [1, {}]",
                self.max_entities, MAX_ENTITIES
            ));
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    /// Default configuration matching the built-in pipeline
    fn default() -> Self {
        Self {
            default_language: "zh-CN".to_string(),
            min_length: 10,
            max_length: 500,
            confidence_floor: 0.4,
            keyword_top_k: 5,
            max_entities: 10,
            patterns: None,
        }
    }
}

impl ExtractorConfig {
    /// Strict preset: shorter sentences only, opinions and weak matches dropped
    pub fn strict() -> Self {
        Self {
            min_length: 15,
            max_length: 300,
            confidence_floor: 0.6,
            max_entities: 5,
            ..Self::default()
        }
    }

    /// Lenient preset: wider length window, more keyword candidates
    pub fn lenient() -> Self {
        Self {
            min_length: 5,
            max_length: 1000,
            keyword_top_k: 8,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
