//! XiaoChaGuan Extractor
//!
//! Turns free-form text into claims worth verifying.
//!
//! # Architecture
//!
//! ```text
//! Text → sentences → claim patterns → confidence floor → entities → claims
//!                                                          ↑
//!                                                      Segmenter
//! ```
//!
//! Each stage is a plain function of its input. The ordered pattern table is
//! compiled once when the [`Extractor`] is built; the segmenter is the only
//! outside dependency and its failures surface as
//! [`ExtractorError::DependencyUnavailable`].
//!
//! # Example Usage
//!
//! ```
//! use xiaocha_extractor::{Extractor, ExtractorConfig, ExtractionRequest};
//! use xiaocha_domain::{ClaimType, TaggedToken};
//! use xiaocha_segmenter::MockSegmenter;
//!
//! let segmenter = MockSegmenter::new(vec![TaggedToken::new("专家", "n")], vec![]);
//! let extractor = Extractor::new(segmenter, ExtractorConfig::default())?;
//!
//! let claims = extractor.extract(&ExtractionRequest::new("专家称这项技术将改变行业。"))?;
//! assert_eq!(claims.len(), 1);
//! assert_eq!(claims[0].claim_type, ClaimType::Quote);
//! assert_eq!(claims[0].entities, vec!["专家"]);
//! # Ok::<(), xiaocha_extractor::ExtractorError>(())
//! ```

#![warn(missing_docs)]

mod config;
mod entities;
mod error;
mod extractor;
mod patterns;
mod sentence;
mod types;


pub use config::{ExtractorConfig, MAX_ENTITIES, MIN_CONFIDENCE_FLOOR};
pub use entities::{noun_phrases, EntityAssembler};
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use patterns::{ClaimClassifier, PatternSpec, PatternTable, BUILTIN_PATTERNS, DEFAULT_CLASSIFICATION};
pub use sentence::{split_sentences, SENTENCE_FLOOR, TERMINATORS};
pub use types::{ExtractionMetadata, ExtractionRequest, ExtractionResult};
