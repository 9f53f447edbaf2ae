//! Unicode script classification

use xiaocha_domain::Language;

/// Writing systems recognised by the classifier, in matching order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Script {
    /// CJK Unified Ideographs
    Chinese,
    /// Japanese hiragana
    JapaneseHiragana,
    /// Japanese katakana
    JapaneseKatakana,
    /// Hangul syllables
    Korean,
    /// Arabic
    Arabic,
    /// Cyrillic
    Cyrillic,
    /// Basic Latin letters
    Latin,
}

/// All scripts in the order ranges are tested
pub const SCRIPTS: [Script; 7] = [
    Script::Chinese,
    Script::JapaneseHiragana,
    Script::JapaneseKatakana,
    Script::Korean,
    Script::Arabic,
    Script::Cyrillic,
    Script::Latin,
];

impl Script {
    /// Name used in reports
    pub fn name(&self) -> &'static str {
        match self {
            Script::Chinese => "chinese",
            Script::JapaneseHiragana => "japanese_hiragana",
            Script::JapaneseKatakana => "japanese_katakana",
            Script::Korean => "korean",
            Script::Arabic => "arabic",
            Script::Cyrillic => "cyrillic",
            Script::Latin => "latin",
        }
    }

    /// Inclusive code point range
    ///
    /// The Latin range is `A..=z` and so also covers `[\]^_` and the backtick.
    pub fn range(&self) -> (u32, u32) {
        match self {
            Script::Chinese => (0x4E00, 0x9FFF),
            Script::JapaneseHiragana => (0x3040, 0x309F),
            Script::JapaneseKatakana => (0x30A0, 0x30FF),
            Script::Korean => (0xAC00, 0xD7AF),
            Script::Arabic => (0x0600, 0x06FF),
            Script::Cyrillic => (0x0400, 0x04FF),
            Script::Latin => (0x0041, 0x007A),
        }
    }

    /// Language this script is attributed to
    pub fn language(&self) -> Language {
        match self {
            Script::Chinese => Language::ChineseSimplified,
            Script::JapaneseHiragana | Script::JapaneseKatakana => Language::Japanese,
            Script::Korean => Language::Korean,
            Script::Arabic => Language::Arabic,
            Script::Cyrillic => Language::Russian,
            Script::Latin => Language::English,
        }
    }

    /// First script whose range contains the character
    pub fn of(c: char) -> Option<Script> {
        let cp = c as u32;
        SCRIPTS.into_iter().find(|script| {
            let (start, end) = script.range();
            start <= cp && cp <= end
        })
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Per-script character counts for one piece of text
///
/// Every character contributes to at most one script, so `total()` never
/// exceeds the number of characters in the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptCounts {
    counts: [usize; SCRIPTS.len()],
}

impl ScriptCounts {
    /// Count for one script
    pub fn get(&self, script: Script) -> usize {
        self.counts[script.index()]
    }

    /// Sum over all scripts
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Fraction of counted characters in `script`, 0.0 when nothing was counted
    pub fn share(&self, script: Script) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(script) as f64 / total as f64
    }

    /// `(script, count)` pairs in enumeration order
    pub fn iter(&self) -> impl Iterator<Item = (Script, usize)> + '_ {
        SCRIPTS.iter().map(move |s| (*s, self.get(*s)))
    }

    fn increment(&mut self, script: Script) {
        self.counts[script.index()] += 1;
    }
}

/// Count the characters of `text` per script
///
/// Punctuation, digits, whitespace and anything outside the known ranges
/// is not counted.
pub fn classify_scripts(text: &str) -> ScriptCounts {
    let mut counts = ScriptCounts::default();
    for script in text.chars().filter_map(Script::of) {
        counts.increment(script);
    }
    counts
}
