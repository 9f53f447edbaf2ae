//! Sentence segmentation

/// Minimum sentence length in characters, applied before any caller bounds
pub const SENTENCE_FLOOR: usize = 10;

/// Sentence-terminal punctuation, CJK and Latin
pub const TERMINATORS: [char; 6] = ['。', '！', '？', '.', '!', '?'];

/// Split text into trimmed sentences of at least [`SENTENCE_FLOOR`] characters
///
/// Every terminator splits, including a period inside a decimal number.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(TERMINATORS)
        .map(str::trim)
        .filter(|s| s.chars().count() >= SENTENCE_FLOOR)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_cjk_and_latin_terminators() {
        let text = "今天北京的天气非常晴朗。明天上海可能会下大雨！The market closed higher today? ok";
        let sentences = split_sentences(text);
        assert_eq!(
            sentences,
            vec![
                "今天北京的天气非常晴朗",
                "明天上海可能会下大雨",
                "The market closed higher today",
            ]
        );
    }

    #[test]
    fn test_floor_counts_characters_not_bytes() {
        // 9 CJK characters is 27 bytes but still below the floor
        assert!(split_sentences("一二三四五六七八九。").is_empty());
        assert_eq!(split_sentences("一二三四五六七八九十。").len(), 1);
    }

    #[test]
    fn test_trims_whitespace() {
        let sentences = split_sentences("   这是一个需要被修剪的句子   \n。");
        assert_eq!(sentences, vec!["这是一个需要被修剪的句子"]);
    }

    #[test]
    fn test_full_width_space_is_trimmed() {
        let sentences = split_sentences("\u{3000}\u{3000}这是一个需要被修剪的句子");
        assert_eq!(sentences, vec!["这是一个需要被修剪的句子"]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n\t ").is_empty());
        assert!(split_sentences("。。。！！？").is_empty());
    }

    #[test]
    fn test_decimal_point_splits() {
        let sentences = split_sentences("今年全国粮食产量增长了3.5个百分点");
        assert_eq!(sentences, vec!["今年全国粮食产量增长了3"]);
    }

    #[test]
    fn test_idempotent() {
        let text = "据新华社报道今年粮食产量增长。我认为这个政策非常好的啦！";
        assert_eq!(split_sentences(text), split_sentences(text));
    }
}
