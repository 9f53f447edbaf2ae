//! Segmentation backed by jieba
//!
//! Part-of-speech tagging uses jieba's dictionary with HMM discovery of
//! unknown words. Keywords come from jieba's TF-IDF extractor, which already
//! skips single-character words and its built-in stopwords; user stopwords
//! are filtered on top.

use crate::lexicon::Lexicon;
use crate::SegmenterError;
use jieba_rs::{Jieba, KeywordExtract, TfIdf};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;
use xiaocha_domain::{Segmenter, TaggedToken, WeightedKeyword};

/// Segmenter over jieba's default dictionary plus an optional [`Lexicon`]
pub struct JiebaSegmenter {
    jieba: Jieba,
    tfidf: TfIdf,
    stopwords: HashSet<String>,
    user_words: usize,
}

impl JiebaSegmenter {
    /// Segmenter over the default dictionary
    pub fn new() -> Self {
        Self {
            jieba: Jieba::new(),
            tfidf: TfIdf::default(),
            stopwords: HashSet::new(),
            user_words: 0,
        }
    }

    /// Segmenter with user words and stopwords added, validating the lexicon first
    pub fn with_lexicon(lexicon: Lexicon) -> Result<Self, SegmenterError> {
        lexicon.validate().map_err(SegmenterError::InvalidLexicon)?;

        let mut segmenter = Self::new();
        for entry in &lexicon.words {
            segmenter.jieba.add_word(&entry.word, entry.freq, Some(&entry.tag));
        }
        segmenter.user_words = lexicon.words.len();
        segmenter.stopwords = lexicon.stopwords.iter().map(|w| w.to_lowercase()).collect();

        debug!(
            "Jieba segmenter ready with {} user words and {} stopwords",
            segmenter.user_words,
            segmenter.stopwords.len()
        );
        Ok(segmenter)
    }

    /// Number of words added from the user lexicon
    pub fn user_words(&self) -> usize {
        self.user_words
    }

    fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for JiebaSegmenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JiebaSegmenter")
            .field("user_words", &self.user_words)
            .field("stopwords", &self.stopwords.len())
            .finish_non_exhaustive()
    }
}

impl Segmenter for JiebaSegmenter {
    type Error = SegmenterError;

    fn tag(&self, sentence: &str) -> Result<Vec<TaggedToken>, Self::Error> {
        Ok(self
            .jieba
            .tag(sentence, true)
            .into_iter()
            .map(|t| TaggedToken::new(t.word, t.tag))
            .collect())
    }

    /// Highest TF-IDF words first, user stopwords removed
    fn top_keywords(&self, sentence: &str, k: usize) -> Result<Vec<WeightedKeyword>, Self::Error> {
        // Ask for enough extra candidates that filtering cannot leave fewer than k
        let wanted = k.saturating_add(self.stopwords.len());
        let keywords = self
            .tfidf
            .extract_keywords(&self.jieba, sentence, wanted, Vec::new());

        Ok(keywords
            .into_iter()
            .filter(|kw| !self.is_stopword(&kw.keyword))
            .take(k)
            .map(|kw| WeightedKeyword::new(kw.keyword, kw.weight))
            .collect())
    }
}
