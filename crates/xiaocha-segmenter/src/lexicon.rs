//! User lexicons layered over the jieba dictionary
//!
//! A lexicon is a TOML file of extra words (with their part-of-speech tag and
//! an optional frequency) plus words that must never be reported as keywords.
//!
//! ```toml
//! stopwords = ["记者"]
//!
//! [[words]]
//! word = "碳中和"
//! tag = "nz"
//! ```

use crate::SegmenterError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One user word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconEntry {
    /// Surface form
    pub word: String,
    /// Part-of-speech tag
    pub tag: String,
    /// Dictionary frequency; jieba picks one that keeps the word whole when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freq: Option<usize>,
}

impl LexiconEntry {
    /// Entry without an explicit frequency
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
            freq: None,
        }
    }
}

/// Extra vocabulary for [`crate::JiebaSegmenter`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lexicon {
    /// Words never reported as keywords
    #[serde(default)]
    pub stopwords: Vec<String>,

    /// Words added to the dictionary; later entries override earlier ones
    #[serde(default)]
    pub words: Vec<LexiconEntry>,
}

impl Lexicon {
    /// Parse a lexicon from TOML
    pub fn from_toml(toml_str: &str) -> Result<Self, SegmenterError> {
        toml::from_str(toml_str)
            .map_err(|e| SegmenterError::InvalidLexicon(format!("Failed to parse TOML: {}", e)))
    }

    /// Read a lexicon file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SegmenterError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Validate the lexicon
    pub fn validate(&self) -> Result<(), String> {
        for entry in &self.words {
            if entry.word.trim().is_empty() {
                return Err("lexicon contains an empty word".to_string());
            }
            if entry.word.chars().any(char::is_whitespace) {
                return Err(format!("word '{}' contains whitespace", entry.word));
            }
            if entry.tag.trim().is_empty() {
                return Err(format!("word '{}' has an empty tag", entry.word));
            }
            if entry.freq == Some(0) {
                return Err(format!("word '{}' has zero frequency", entry.word));
            }
        }
        if self.stopwords.iter().any(|w| w.trim().is_empty()) {
            return Err("lexicon contains an empty stopword".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lexicon() {
        let lexicon = Lexicon::from_toml(
            r#"
            stopwords = ["记者"]

            [[words]]
            word = "碳中和"
            tag = "nz"

            [[words]]
            word = "小查官"
            tag = "nt"
            freq = 5000
            "#,
        )
        .unwrap();

        assert_eq!(lexicon.stopwords, vec!["记者"]);
        assert_eq!(lexicon.words[0], LexiconEntry::new("碳中和", "nz"));
        assert_eq!(lexicon.words[1].freq, Some(5000));
        assert!(lexicon.validate().is_ok());
    }

    #[test]
    fn test_empty_lexicon() {
        let lexicon = Lexicon::from_toml("").unwrap();
        assert_eq!(lexicon, Lexicon::default());
        assert!(lexicon.validate().is_ok());
    }

    #[test]
    fn test_invalid_lexicons() {
        let empty_word = Lexicon::from_toml(r#"words = [{ word = " ", tag = "n" }]"#).unwrap();
        assert!(empty_word.validate().is_err());

        let spaced = Lexicon::from_toml(r#"words = [{ word = "碳 中和", tag = "n" }]"#).unwrap();
        assert!(spaced.validate().is_err());

        let no_tag = Lexicon::from_toml(r#"words = [{ word = "芯片", tag = "" }]"#).unwrap();
        assert!(no_tag.validate().is_err());

        let zero = Lexicon::from_toml(r#"words = [{ word = "芯片", tag = "n", freq = 0 }]"#).unwrap();
        assert!(zero.validate().is_err());

        assert!(matches!(
            Lexicon::from_toml("words = 42"),
            Err(SegmenterError::InvalidLexicon(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.toml");
        fs::write(&path, "words = [{ word = \"芯片\", tag = \"n\" }]\n").unwrap();

        let lexicon = Lexicon::load(&path).unwrap();
        assert_eq!(lexicon.words, vec![LexiconEntry::new("芯片", "n")]);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Lexicon::load("/nonexistent/lexicon.toml");
        assert!(matches!(result, Err(SegmenterError::Io(_))));
    }
}
