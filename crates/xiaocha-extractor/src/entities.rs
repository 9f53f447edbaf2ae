//! Entity assembly from segmenter output

use crate::error::ExtractorError;
use std::collections::HashSet;
use std::fmt::Display;
use tracing::warn;
use xiaocha_domain::{Segmenter, TaggedToken};

/// Merges noun phrases and top keywords into one entity list
#[derive(Debug, Clone, Copy)]
pub struct EntityAssembler {
    keyword_top_k: usize,
    max_entities: usize,
}

impl EntityAssembler {
    /// Assembler requesting `keyword_top_k` keywords and keeping at most
    /// `max_entities` entities
    pub fn new(keyword_top_k: usize, max_entities: usize) -> Self {
        Self {
            keyword_top_k,
            max_entities,
        }
    }

    /// Entities of one sentence
    ///
    /// Noun phrases come first, then keyword texts. Duplicates keep their
    /// first position and the list is truncated after deduplication.
    pub fn assemble<S>(&self, segmenter: &S, sentence: &str) -> Result<Vec<String>, ExtractorError>
    where
        S: Segmenter,
        S::Error: Display,
    {
        let tokens = segmenter.tag(sentence).map_err(|e| unavailable("tagging", e))?;
        let keywords = segmenter
            .top_keywords(sentence, self.keyword_top_k)
            .map_err(|e| unavailable("keyword extraction", e))?;

        let candidates = noun_phrases(&tokens)
            .into_iter()
            .chain(keywords.into_iter().map(|kw| kw.text));

        let mut seen = HashSet::new();
        let mut entities: Vec<String> = candidates
            .filter(|entity| !entity.is_empty() && seen.insert(entity.clone()))
            .collect();
        entities.truncate(self.max_entities);
        Ok(entities)
    }
}

fn unavailable(stage: &str, e: impl Display) -> ExtractorError {
    warn!("Segmenter failed during {}: {}", stage, e);
    ExtractorError::DependencyUnavailable(format!("{} failed: {}", stage, e))
}

/// Maximal runs of noun-tagged tokens, each joined into one phrase
pub fn noun_phrases(tokens: &[TaggedToken]) -> Vec<String> {
    let mut phrases = Vec::new();
    let mut current = String::new();

    for token in tokens {
        if token.is_noun() {
            current.push_str(&token.text);
        } else if !current.is_empty() {
            phrases.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        phrases.push(current);
    }

    phrases
}

#[cfg(test)]
mod tests {
    use super::*;
    use xiaocha_domain::WeightedKeyword;
    use xiaocha_segmenter::MockSegmenter;

    fn t(text: &str, tag: &str) -> TaggedToken {
        TaggedToken::new(text, tag)
    }

    #[test]
    fn test_noun_phrases_join_consecutive_nouns() {
        let tokens = vec![
            t("中国", "ns"),
            t("科学院", "nt"),
            t("发布", "v"),
            t("报告", "n"),
        ];
        assert_eq!(noun_phrases(&tokens), vec!["中国科学院", "报告"]);
    }

    #[test]
    fn test_noun_phrases_none() {
        assert!(noun_phrases(&[]).is_empty());
        assert!(noun_phrases(&[t("很", "d"), t("好", "a")]).is_empty());
    }

    #[test]
    fn test_assemble_dedups_in_first_seen_order() {
        let segmenter = MockSegmenter::new(
            vec![t("专家", "n"), t("称", "v"), t("技术", "n")],
            vec![WeightedKeyword::new("技术", 2.0), WeightedKeyword::new("改变", 1.0)],
        );
        let entities = EntityAssembler::new(5, 10).assemble(&segmenter, "专家称技术").unwrap();
        assert_eq!(entities, vec!["专家", "技术", "改变"]);
    }

    #[test]
    fn test_assemble_truncates_after_dedup() {
        let tokens: Vec<TaggedToken> = (0..6)
            .flat_map(|i| vec![t(&format!("名词{}", i), "n"), t("和", "c")])
            .collect();
        let keywords = (0..6).map(|i| WeightedKeyword::new(format!("名词{}", i), 1.0)).collect();
        let segmenter = MockSegmenter::new(tokens, keywords);

        let entities = EntityAssembler::new(5, 4).assemble(&segmenter, "s").unwrap();
        assert_eq!(entities, vec!["名词0", "名词1", "名词2", "名词3"]);
    }

    #[test]
    fn test_assemble_requests_top_k() {
        let keywords = (0..8).map(|i| WeightedKeyword::new(format!("k{}", i), 1.0)).collect();
        let segmenter = MockSegmenter::new(vec![], keywords);
        let entities = EntityAssembler::new(3, 10).assemble(&segmenter, "s").unwrap();
        assert_eq!(entities, vec!["k0", "k1", "k2"]);
    }

    #[test]
    fn test_segmenter_failure_is_dependency_unavailable() {
        let segmenter = MockSegmenter::unavailable();
        let result = EntityAssembler::new(5, 10).assemble(&segmenter, "专家称");
        assert!(matches!(result, Err(ExtractorError::DependencyUnavailable(_))));

        let mut flaky = MockSegmenter::default();
        flaky.add_error("坏句子");
        let result = EntityAssembler::new(5, 10).assemble(&flaky, "坏句子");
        assert!(matches!(result, Err(ExtractorError::DependencyUnavailable(_))));
    }
}
