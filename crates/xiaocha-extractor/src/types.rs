//! Request and response types for extraction

use serde::{Deserialize, Serialize};
use xiaocha_domain::{ExtractedClaim, LanguageSignal};

/// Request to extract claims from text
///
/// Unset fields fall back to the extractor's configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRequest {
    /// Text to extract claims from
    pub text: String,

    /// Language tag copied onto every claim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Minimum claim length (characters)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Maximum claim length (characters)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

impl ExtractionRequest {
    /// Request with configuration defaults
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: None,
            min_length: None,
            max_length: None,
        }
    }

    /// Tag claims with this language instead of the configured default
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Override the claim length window
    pub fn with_length_bounds(mut self, min_length: usize, max_length: usize) -> Self {
        self.min_length = Some(min_length);
        self.max_length = Some(max_length);
        self
    }
}

/// Result of an analysis: claims plus language metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Claims in source order
    pub claims: Vec<ExtractedClaim>,

    /// Metadata about the extraction
    pub metadata: ExtractionMetadata,
}

/// Metadata about an extraction operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionMetadata {
    /// Dominant language of the whole text
    pub detected: LanguageSignal,

    /// Language composition, heaviest first
    pub composition: Vec<LanguageSignal>,

    /// Whether the text looks translated from foreign reporting
    pub translated: bool,

    /// Sentences that passed segmentation
    pub sentences_considered: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builders() {
        let request = ExtractionRequest::new("文本")
            .with_language("ja")
            .with_length_bounds(5, 50);
        assert_eq!(request.language.as_deref(), Some("ja"));
        assert_eq!(request.min_length, Some(5));
        assert_eq!(request.max_length, Some(50));
    }

    #[test]
    fn test_request_from_minimal_json() {
        let request: ExtractionRequest = serde_json::from_str(r#"{"text":"专家称"}"#).unwrap();
        assert_eq!(request, ExtractionRequest::new("专家称"));
    }
}
