//! Language codes and detection signals

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A language the identifier can name
///
/// Serialized as its code (`zh-CN`, `ja`, ...), which is also the form the
/// API layer uses in requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// Simplified Chinese
    #[serde(rename = "zh-CN")]
    ChineseSimplified,
    /// Japanese
    #[serde(rename = "ja")]
    Japanese,
    /// Korean
    #[serde(rename = "ko")]
    Korean,
    /// Arabic
    #[serde(rename = "ar")]
    Arabic,
    /// Russian
    #[serde(rename = "ru")]
    Russian,
    /// English
    #[serde(rename = "en")]
    English,
    /// No decision could be made
    #[serde(rename = "unknown")]
    Unknown,
}

impl Language {
    /// Language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::ChineseSimplified => "zh-CN",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::Arabic => "ar",
            Language::Russian => "ru",
            Language::English => "en",
            Language::Unknown => "unknown",
        }
    }

    /// Lowercase English name
    pub fn name(&self) -> &'static str {
        match self {
            Language::ChineseSimplified => "chinese",
            Language::Japanese => "japanese",
            Language::Korean => "korean",
            Language::Arabic => "arabic",
            Language::Russian => "russian",
            Language::English => "english",
            Language::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    /// Accepts codes and English names, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zh-cn" | "zh" | "chinese" => Ok(Language::ChineseSimplified),
            "ja" | "japanese" => Ok(Language::Japanese),
            "ko" | "korean" => Ok(Language::Korean),
            "ar" | "arabic" => Ok(Language::Arabic),
            "ru" | "russian" => Ok(Language::Russian),
            "en" | "english" => Ok(Language::English),
            "unknown" => Ok(Language::Unknown),
            other => Err(format!("Unknown language: {}", other)),
        }
    }
}

/// A language decision with its confidence
///
/// The confidence is the fraction of classified characters attributable to
/// the language's script(s). It is a share, not a probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LanguageSignal {
    /// Detected language
    pub language: Language,
    /// Share of scripted characters
    pub confidence: f64,
}

impl LanguageSignal {
    /// Create a new signal
    pub fn new(language: Language, confidence: f64) -> Self {
        Self {
            language,
            confidence,
        }
    }

    /// The `("unknown", 0.0)` signal
    pub fn unknown() -> Self {
        Self::new(Language::Unknown, 0.0)
    }
}
