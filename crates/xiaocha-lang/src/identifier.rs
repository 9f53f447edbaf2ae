//! Primary language, language composition and translated-content heuristics

use crate::error::LangError;
use crate::script::{classify_scripts, Script};
use regex::Regex;
use std::cmp::Ordering;
use tracing::debug;
use xiaocha_domain::{Language, LanguageSignal};

/// Share above which a script decides the primary language
const PRIMARY_THRESHOLD: f64 = 0.3;

/// Combined kana share above which text is treated as Japanese
const KANA_THRESHOLD: f64 = 0.1;

/// Share a language needs to appear in the composition
const COMPOSITION_THRESHOLD: f64 = 0.05;

/// Share a language needs to count towards the mixed-language heuristic
const MIXED_THRESHOLD: f64 = 0.1;

/// Phrases that attribute text to foreign or translated media
pub const TRANSLATION_MARKERS: [&str; 5] = [
    r"据.*?外媒",
    r"据.*?报道",
    r"翻译自",
    r"原文来自",
    r"(英|日|韩|法|德|俄)媒",
];

/// Identifies the language(s) of a text from its script composition
///
/// Holds only the compiled marker table; every method is a pure function of
/// its input, so one identifier can be shared across threads.
#[derive(Debug, Clone)]
pub struct LanguageIdentifier {
    markers: Vec<Regex>,
}

impl LanguageIdentifier {
    /// Create an identifier with the built-in translation markers
    pub fn new() -> Result<Self, LangError> {
        Self::with_markers(TRANSLATION_MARKERS)
    }

    /// Create an identifier with a custom marker table
    pub fn with_markers<I, S>(patterns: I) -> Result<Self, LangError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let markers = patterns
            .into_iter()
            .map(|p| {
                let pattern = p.as_ref();
                Regex::new(pattern).map_err(|e| LangError::InvalidMarker {
                    pattern: pattern.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { markers })
    }

    /// Source patterns of the active marker table
    pub fn marker_patterns(&self) -> impl Iterator<Item = &str> {
        self.markers.iter().map(|m| m.as_str())
    }

    /// Decide the primary language of `text`
    ///
    /// Rules are checked in order and the first satisfied one wins:
    /// Chinese with kana, Chinese, kana, Korean, Arabic, Cyrillic, Latin.
    /// Blank text is `unknown` with 0.0; text without any scripted character
    /// is a weak `en` with 0.5.
    ///
    /// For Japanese with kanji the confidence is the kana share plus the
    /// Chinese share. The shares are disjoint fractions of one total, so the
    /// sum stays within [0, 1].
    pub fn identify(&self, text: &str) -> LanguageSignal {
        if text.trim().is_empty() {
            return LanguageSignal::unknown();
        }

        let counts = classify_scripts(text);
        let total = counts.total();
        if total == 0 {
            debug!("No scripted characters, defaulting to en");
            return LanguageSignal::new(Language::English, 0.5);
        }

        let chinese = counts.share(Script::Chinese);
        let kana = counts.share(Script::JapaneseHiragana) + counts.share(Script::JapaneseKatakana);

        let signal = if chinese > PRIMARY_THRESHOLD && kana > KANA_THRESHOLD {
            LanguageSignal::new(Language::Japanese, kana + chinese)
        } else if chinese > PRIMARY_THRESHOLD {
            LanguageSignal::new(Language::ChineseSimplified, chinese)
        } else if kana > KANA_THRESHOLD {
            LanguageSignal::new(Language::Japanese, kana)
        } else {
            [Script::Korean, Script::Arabic, Script::Cyrillic, Script::Latin]
                .into_iter()
                .map(|script| (script, counts.share(script)))
                .find(|(_, share)| *share > PRIMARY_THRESHOLD)
                .map(|(script, share)| LanguageSignal::new(script.language(), share))
                .unwrap_or_else(LanguageSignal::unknown)
        };

        debug!(
            "Identified {} with confidence {:.3} over {} scripted chars",
            signal.language, signal.confidence, total
        );
        signal
    }

    /// Every language whose share exceeds 5%, heaviest first
    ///
    /// Script shares are accumulated per language (hiragana and katakana both
    /// count towards `ja`) before the threshold is applied. Text without any
    /// scripted character yields `[en: 1.0]`. Equal shares keep script order.
    pub fn identify_all(&self, text: &str) -> Vec<LanguageSignal> {
        let counts = classify_scripts(text);
        if counts.total() == 0 {
            return vec![LanguageSignal::new(Language::English, 1.0)];
        }

        let mut composition: Vec<LanguageSignal> = Vec::new();
        for (script, count) in counts.iter() {
            if count == 0 {
                continue;
            }
            let share = counts.share(script);
            match composition.iter_mut().find(|s| s.language == script.language()) {
                Some(existing) => existing.confidence += share,
                None => composition.push(LanguageSignal::new(script.language(), share)),
            }
        }

        composition.retain(|s| s.confidence > COMPOSITION_THRESHOLD);
        composition.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(Ordering::Equal)
        });
        composition
    }

    /// Heuristic check for translated content
    ///
    /// True when more than one language holds over 10% of the scripted
    /// characters, or when any translation marker matches.
    pub fn is_translated(&self, text: &str) -> bool {
        let mixed = self
            .identify_all(text)
            .iter()
            .filter(|s| s.confidence > MIXED_THRESHOLD)
            .count();
        if mixed > 1 {
            debug!("Text mixes {} languages", mixed);
            return true;
        }

        match self.markers.iter().find(|m| m.is_match(text)) {
            Some(marker) => {
                debug!("Translation marker '{}' matched", marker.as_str());
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identifier() -> LanguageIdentifier {
        LanguageIdentifier::new().unwrap()
    }

    #[test]
    fn test_blank_text_is_unknown() {
        let id = identifier();
        assert_eq!(id.identify(""), LanguageSignal::unknown());
        assert_eq!(id.identify("   \n\t"), LanguageSignal::unknown());
    }

    #[test]
    fn test_unscripted_text_defaults_to_english() {
        let signal = identifier().identify("12345");
        assert_eq!(signal.language, Language::English);
        assert_eq!(signal.confidence, 0.5);
    }

    #[test]
    fn test_chinese() {
        let signal = identifier().identify("今天北京天气很好，适合出门。");
        assert_eq!(signal.language, Language::ChineseSimplified);
        assert_eq!(signal.confidence, 1.0);
    }

    #[test]
    fn test_japanese_with_kanji_sums_shares() {
        // 6 kanji, 4 hiragana
        let signal = identifier().identify("東京は日本の首都です");
        assert_eq!(signal.language, Language::Japanese);
        assert!((signal.confidence - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_japanese_confidence_is_unclamped_sum() {
        // 5 kanji, 2 hiragana, 2 latin
        let text = "東京日本語をはAB";
        let counts = classify_scripts(text);
        let expected = counts.share(Script::JapaneseHiragana)
            + counts.share(Script::JapaneseKatakana)
            + counts.share(Script::Chinese);

        let signal = identifier().identify(text);
        assert_eq!(signal.language, Language::Japanese);
        assert!((signal.confidence - expected).abs() < 1e-12);
        assert!((signal.confidence - 7.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_kana_only() {
        let signal = identifier().identify("ひらがなとカタカナ");
        assert_eq!(signal.language, Language::Japanese);
        assert!((signal.confidence - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_korean_arabic_russian_english() {
        let id = identifier();
        assert_eq!(id.identify("안녕하세요 세계").language, Language::Korean);
        assert_eq!(id.identify("مرحبا بالعالم").language, Language::Arabic);
        assert_eq!(id.identify("Привет мир").language, Language::Russian);

        let english = id.identify("Hello world");
        assert_eq!(english.language, Language::English);
        assert_eq!(english.confidence, 1.0);
    }

    #[test]
    fn test_no_dominant_script_is_unknown() {
        // Four scripts at 25% each
        let signal = identifier().identify("한국어عربРусEng");
        assert_eq!(signal, LanguageSignal::unknown());
    }

    #[test]
    fn test_chinese_beats_latin_when_both_over_threshold() {
        let signal = identifier().identify("中文中文中文abcd");
        assert_eq!(signal.language, Language::ChineseSimplified);
        assert!((signal.confidence - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_identify_all_unscripted() {
        assert_eq!(
            identifier().identify_all("!!! 42"),
            vec![LanguageSignal::new(Language::English, 1.0)]
        );
    }

    #[test]
    fn test_identify_all_sorted() {
        let all = identifier().identify_all("中文中文中文abcd");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].language, Language::ChineseSimplified);
        assert!((all[0].confidence - 0.6).abs() < 1e-9);
        assert_eq!(all[1].language, Language::English);
        assert!((all[1].confidence - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_identify_all_accumulates_kana_before_threshold() {
        // 2 hiragana + 2 katakana out of 60: each script is under 5%,
        // together they are over it
        let text = format!("あいアイ{}", "a".repeat(56));
        let all = identifier().identify_all(&text);

        let ja = all.iter().find(|s| s.language == Language::Japanese).unwrap();
        assert!((ja.confidence - 4.0 / 60.0).abs() < 1e-9);
        assert_eq!(all[0].language, Language::English);
    }

    #[test]
    fn test_identify_all_drops_trace_languages() {
        let text = format!("а{}", "b".repeat(99));
        let all = identifier().identify_all(&text);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].language, Language::English);
    }

    #[test]
    fn test_mixed_text_is_translated() {
        assert!(identifier().is_translated("中文中文中文abcd"));
    }

    #[test]
    fn test_translation_markers() {
        let id = identifier();
        assert!(id.is_translated("据美国外媒消息，该公司将裁员"));
        assert!(id.is_translated("本文翻译自一篇长篇评论"));
        assert!(id.is_translated("原文来自某海外网站"));
        assert!(id.is_translated("日媒称该项目已经暂停"));
        assert!(id.is_translated("据新华社报道，粮食产量增长"));
    }

    #[test]
    fn test_plain_text_is_not_translated() {
        let id = identifier();
        assert!(!id.is_translated("今天北京天气很好，适合出门。"));
        assert!(!id.is_translated("Plain English sentence."));
        assert!(!id.is_translated(""));
    }

    #[test]
    fn test_custom_markers() {
        let id = LanguageIdentifier::with_markers(["translated from"]).unwrap();
        assert!(id.is_translated("This piece was translated from Le Monde."));
        assert!(!id.is_translated("日媒称该项目已经暂停"));
        assert_eq!(id.marker_patterns().collect::<Vec<_>>(), vec!["translated from"]);
    }

    #[test]
    fn test_invalid_marker_rejected() {
        let result = LanguageIdentifier::with_markers(["(unclosed"]);
        assert!(matches!(result, Err(LangError::InvalidMarker { .. })));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Composition is sorted, above threshold, and never exceeds the whole
        #[test]
        fn test_composition_invariants(text in "[a-z中文字あかアカ한국абв ]{1,80}") {
            let id = LanguageIdentifier::new().unwrap();
            let all = id.identify_all(&text);

            let sum: f64 = all.iter().map(|s| s.confidence).sum();
            prop_assert!(sum <= 1.0 + 1e-9);
            for pair in all.windows(2) {
                prop_assert!(pair[0].confidence >= pair[1].confidence);
            }
            if classify_scripts(&text).total() > 0 {
                prop_assert!(all.iter().all(|s| s.confidence > COMPOSITION_THRESHOLD));
            }
        }

        /// The primary decision always carries a confidence in [0, 1]
        #[test]
        fn test_identify_confidence_bounded(text in "\\PC{0,80}") {
            let signal = LanguageIdentifier::new().unwrap().identify(&text);
            prop_assert!(signal.confidence >= 0.0);
            prop_assert!(signal.confidence <= 1.0 + 1e-9);
        }
    }
}
