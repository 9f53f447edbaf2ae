//! XiaoChaGuan Segmenter Layer
//!
//! Implementations of the `Segmenter` trait from `xiaocha-domain`.
//!
//! # Segmenters
//!
//! - `MockSegmenter`: Deterministic test double with fixed tokens and keywords
//! - `JiebaSegmenter`: jieba part-of-speech tagging and TF-IDF keywords,
//!   optionally extended with a user `Lexicon`
//!
//! # Examples
//!
//! ```
//! use xiaocha_segmenter::MockSegmenter;
//! use xiaocha_domain::{Segmenter, TaggedToken};
//!
//! let segmenter = MockSegmenter::new(vec![TaggedToken::new("专家", "n")], vec![]);
//! let tokens = segmenter.tag("专家称").unwrap();
//! assert_eq!(tokens[0].text, "专家");
//! ```

#![warn(missing_docs)]

pub mod jieba;
pub mod lexicon;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use xiaocha_domain::{Segmenter, TaggedToken, WeightedKeyword};

pub use jieba::JiebaSegmenter;
pub use lexicon::{Lexicon, LexiconEntry};

/// Errors that can occur during segmentation
#[derive(Error, Debug)]
pub enum SegmenterError {
    /// The segmentation backend cannot be reached or refused the request
    #[error("Segmenter unavailable: {0}")]
    Unavailable(String),

    /// Lexicon content is malformed
    #[error("Invalid lexicon: {0}")]
    InvalidLexicon(String),

    /// Lexicon file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("Segmenter error: {0}")]
    Other(String),
}

#[derive(Debug, Clone)]
enum MockResponse {
    Fixed {
        tokens: Vec<TaggedToken>,
        keywords: Vec<WeightedKeyword>,
    },
    Error,
}

/// Mock segmenter for deterministic testing
///
/// Returns pre-configured tokens and keywords without any dictionary.
/// Clones share their response table and call counter.
///
/// # Examples
///
/// ```
/// use xiaocha_segmenter::MockSegmenter;
/// use xiaocha_domain::{Segmenter, TaggedToken, WeightedKeyword};
///
/// let mut segmenter = MockSegmenter::default();
/// segmenter.add_response(
///     "北京下雨",
///     vec![TaggedToken::new("北京", "ns"), TaggedToken::new("下雨", "v")],
///     vec![WeightedKeyword::new("北京", 1.2)],
/// );
/// assert_eq!(segmenter.tag("北京下雨").unwrap().len(), 2);
/// assert!(segmenter.tag("anything else").unwrap().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct MockSegmenter {
    default_tokens: Vec<TaggedToken>,
    default_keywords: Vec<WeightedKeyword>,
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    call_count: Arc<Mutex<usize>>,
    unavailable: bool,
}

impl MockSegmenter {
    /// Create a MockSegmenter returning the same tokens and keywords for every sentence
    pub fn new(tokens: Vec<TaggedToken>, keywords: Vec<WeightedKeyword>) -> Self {
        Self {
            default_tokens: tokens,
            default_keywords: keywords,
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
            unavailable: false,
        }
    }

    /// Create a MockSegmenter that fails every call with `Unavailable`
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Add specific tokens and keywords for a given sentence
    pub fn add_response(
        &mut self,
        sentence: impl Into<String>,
        tokens: Vec<TaggedToken>,
        keywords: Vec<WeightedKeyword>,
    ) {
        lock(&self.responses).insert(sentence.into(), MockResponse::Fixed { tokens, keywords });
    }

    /// Configure to return an error for a specific sentence
    pub fn add_error(&mut self, sentence: impl Into<String>) {
        lock(&self.responses).insert(sentence.into(), MockResponse::Error);
    }

    /// Number of `tag` and `top_keywords` calls made so far
    pub fn call_count(&self) -> usize {
        *lock(&self.call_count)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *lock(&self.call_count) = 0;
    }

    fn respond(&self, sentence: &str) -> Result<(Vec<TaggedToken>, Vec<WeightedKeyword>), SegmenterError> {
        *lock(&self.call_count) += 1;

        if self.unavailable {
            return Err(SegmenterError::Unavailable("mock segmenter is offline".to_string()));
        }

        match lock(&self.responses).get(sentence) {
            Some(MockResponse::Fixed { tokens, keywords }) => Ok((tokens.clone(), keywords.clone())),
            Some(MockResponse::Error) => Err(SegmenterError::Other("Mock error".to_string())),
            None => Ok((self.default_tokens.clone(), self.default_keywords.clone())),
        }
    }
}

impl Default for MockSegmenter {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl Segmenter for MockSegmenter {
    type Error = SegmenterError;

    fn tag(&self, sentence: &str) -> Result<Vec<TaggedToken>, Self::Error> {
        self.respond(sentence).map(|(tokens, _)| tokens)
    }

    fn top_keywords(&self, sentence: &str, k: usize) -> Result<Vec<WeightedKeyword>, Self::Error> {
        self.respond(sentence).map(|(_, mut keywords)| {
            keywords.truncate(k);
            keywords
        })
    }
}

// Poisoning only means another caller panicked mid-call; the table is still usable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
