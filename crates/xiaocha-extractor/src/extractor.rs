//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::entities::EntityAssembler;
use crate::error::ExtractorError;
use crate::patterns::{ClaimClassifier, PatternTable};
use crate::sentence::split_sentences;
use crate::types::{ExtractionMetadata, ExtractionRequest, ExtractionResult};
use std::fmt::Display;
use std::time::Instant;
use tracing::{debug, info};
use xiaocha_domain::{ExtractedClaim, Segmenter};
use xiaocha_lang::LanguageIdentifier;

/// The Extractor turns free text into verifiable claims
///
/// Pattern table and translation markers are compiled once in [`Extractor::new`];
/// every later call only reads them, so a shared `&Extractor` serves any
/// number of threads when the segmenter allows it.
pub struct Extractor<S>
where
    S: Segmenter,
{
    segmenter: S,
    classifier: ClaimClassifier,
    assembler: EntityAssembler,
    identifier: LanguageIdentifier,
    config: ExtractorConfig,
}

impl<S> Extractor<S>
where
    S: Segmenter,
    S::Error: Display,
{
    /// Create a new Extractor
    pub fn new(segmenter: S, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;

        let table = match &config.patterns {
            Some(specs) => PatternTable::compile(specs.iter().cloned())?,
            None => PatternTable::builtin()?,
        };
        debug!("Compiled {} claim patterns", table.len());

        Ok(Self {
            segmenter,
            classifier: ClaimClassifier::new(table),
            assembler: EntityAssembler::new(config.keyword_top_k, config.max_entities),
            identifier: LanguageIdentifier::new()?,
            config,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Active pattern table
    pub fn patterns(&self) -> &PatternTable {
        self.classifier.table()
    }

    /// Language identifier used by [`Extractor::analyze`]
    pub fn identifier(&self) -> &LanguageIdentifier {
        &self.identifier
    }

    /// Extract claims from text, in source order
    pub fn extract(&self, request: &ExtractionRequest) -> Result<Vec<ExtractedClaim>, ExtractorError> {
        self.extract_sentences(request).map(|(claims, _)| claims)
    }

    /// Extract claims and describe the language of the whole text
    pub fn analyze(&self, request: &ExtractionRequest) -> Result<ExtractionResult, ExtractorError> {
        let start = Instant::now();

        let (claims, sentences_considered) = self.extract_sentences(request)?;
        let detected = self.identifier.identify(&request.text);
        let composition = self.identifier.identify_all(&request.text);
        let translated = self.identifier.is_translated(&request.text);

        let metadata = ExtractionMetadata {
            detected,
            composition,
            translated,
            sentences_considered,
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        Ok(ExtractionResult { claims, metadata })
    }

    fn extract_sentences(
        &self,
        request: &ExtractionRequest,
    ) -> Result<(Vec<ExtractedClaim>, usize), ExtractorError> {
        let language = request
            .language
            .as_deref()
            .unwrap_or(&self.config.default_language);
        let min_length = request.min_length.unwrap_or(self.config.min_length);
        let max_length = request.max_length.unwrap_or(self.config.max_length);

        let sentences = split_sentences(&request.text);
        info!(
            "Starting extraction: {} sentences, language '{}', length window [{}, {}]",
            sentences.len(),
            language,
            min_length,
            max_length
        );

        let mut claims = Vec::new();
        for sentence in &sentences {
            let length = sentence.chars().count();
            if length < min_length || length > max_length {
                debug!("Skipping sentence of length {}", length);
                continue;
            }

            let (claim_type, confidence) = self.classifier.classify(sentence);
            if confidence < self.config.confidence_floor {
                debug!("Skipping {} sentence below floor: {}", claim_type, confidence);
                continue;
            }

            let entities = self.assembler.assemble(&self.segmenter, sentence)?;
            debug!(
                "Claim '{}' classified {} ({}) with {} entities",
                sentence,
                claim_type,
                confidence,
                entities.len()
            );

            claims.push(ExtractedClaim::new(
                sentence.clone(),
                claim_type,
                entities,
                language.to_string(),
                confidence,
            ));
        }

        info!("Extraction complete: {} claims from {} sentences", claims.len(), sentences.len());

        Ok((claims, sentences.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xiaocha_segmenter::MockSegmenter;

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = ExtractorConfig::default();
        config.min_length = 600;
        let result = Extractor::new(MockSegmenter::default(), config);
        assert!(matches!(result, Err(ExtractorError::Config(_))));
    }

    #[test]
    fn test_new_rejects_bad_pattern_table() {
        let mut config = ExtractorConfig::default();
        config.patterns = Some(vec![crate::PatternSpec::new(
            "[",
            xiaocha_domain::ClaimType::Factual,
            0.5,
        )]);
        let result = Extractor::new(MockSegmenter::default(), config);
        assert!(matches!(result, Err(ExtractorError::InvalidPattern { .. })));
    }

    #[test]
    fn test_extract_empty_text() {
        let segmenter = MockSegmenter::default();
        let extractor = Extractor::new(segmenter.clone(), ExtractorConfig::default()).unwrap();

        assert!(extractor.extract(&ExtractionRequest::new("")).unwrap().is_empty());
        assert!(extractor.extract(&ExtractionRequest::new("  \n ")).unwrap().is_empty());
        assert_eq!(segmenter.call_count(), 0);
    }
}
