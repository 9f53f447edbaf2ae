//! Trait definitions for external interactions
//!
//! The core never talks to a segmentation library directly. Word
//! segmentation, part-of-speech tagging and keyword weighting are reached
//! through [`Segmenter`]; implementations live in `xiaocha-segmenter`.

use serde::{Deserialize, Serialize};

/// Part-of-speech tags that count as nouns when building noun phrases
///
/// `n` common noun, `nr` person, `ns` place, `nt` organisation,
/// `nz` other proper noun, `ng` noun morpheme.
pub const NOUN_TAGS: [&str; 6] = ["n", "nr", "ns", "nt", "nz", "ng"];

/// Whether a part-of-speech tag belongs to the noun category
pub fn is_noun_tag(tag: &str) -> bool {
    NOUN_TAGS.contains(&tag)
}

/// A token with its part-of-speech tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    /// Surface text of the token
    pub text: String,
    /// Part-of-speech tag
    pub tag: String,
}

impl TaggedToken {
    /// Create a new tagged token
    pub fn new(text: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
        }
    }

    /// Whether this token is a noun
    pub fn is_noun(&self) -> bool {
        is_noun_tag(&self.tag)
    }
}

/// A keyword candidate with its weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedKeyword {
    /// Keyword text
    pub text: String,
    /// Relative weight, higher is more salient
    pub weight: f64,
}

impl WeightedKeyword {
    /// Create a new weighted keyword
    pub fn new(text: impl Into<String>, weight: f64) -> Self {
        Self {
            text: text.into(),
            weight,
        }
    }
}

/// Trait for the word-segmentation capability
///
/// Implemented by the infrastructure layer (xiaocha-segmenter). Calls are
/// synchronous; an asynchronous host awaits the call before entity assembly.
pub trait Segmenter {
    /// Error type for segmentation operations
    type Error;

    /// Split a sentence into tokens tagged with their part of speech
    fn tag(&self, sentence: &str) -> Result<Vec<TaggedToken>, Self::Error>;

    /// The `k` highest-weighted keywords of a sentence, heaviest first
    fn top_keywords(&self, sentence: &str, k: usize) -> Result<Vec<WeightedKeyword>, Self::Error>;

    /// Plain word segmentation without tags
    fn tokenize(&self, text: &str) -> Result<Vec<String>, Self::Error> {
        Ok(self.tag(text)?.into_iter().map(|t| t.text).collect())
    }
}
