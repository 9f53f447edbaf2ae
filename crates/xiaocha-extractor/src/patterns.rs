//! Ordered claim-pattern table
//!
//! A sentence takes the type and confidence of the FIRST pattern that
//! matches anywhere in it. Later rows are never consulted, so row order is
//! part of the table's meaning.

use crate::error::ExtractorError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use xiaocha_domain::ClaimType;

/// Classification for sentences no pattern matches
pub const DEFAULT_CLASSIFICATION: (ClaimType, f64) = (ClaimType::Factual, 0.5);

/// Built-in rows, in matching order
pub const BUILTIN_PATTERNS: [(&str, ClaimType, f64); 11] = [
    (r"据.*?报道", ClaimType::Factual, 0.7),
    (r"根据.*?(显示|表明|证明)", ClaimType::Factual, 0.8),
    (r"研究(表明|发现|显示)", ClaimType::Factual, 0.8),
    (r"专家(称|说|表示)", ClaimType::Quote, 0.6),
    (r"官方(表示|宣布|声明)", ClaimType::Factual, 0.8),
    (r"数据(显示|表明)", ClaimType::Factual, 0.8),
    (r"\d+%", ClaimType::Factual, 0.7),
    (r"\d+(万|亿|千|百)", ClaimType::Factual, 0.6),
    (r"(去年|今年|上个月|本月|明年)", ClaimType::Factual, 0.5),
    (r"将(会|要|于)", ClaimType::Prediction, 0.5),
    (r"(我认为|我觉得|在我看来)", ClaimType::Opinion, 0.4),
];

/// One uncompiled row of a pattern table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternSpec {
    /// Regular expression searched anywhere in the sentence
    pub pattern: String,
    /// Type assigned on match
    pub claim_type: ClaimType,
    /// Base confidence assigned on match, in [0, 1]
    pub confidence: f64,
}

impl PatternSpec {
    /// Create a new pattern row
    pub fn new(pattern: impl Into<String>, claim_type: ClaimType, confidence: f64) -> Self {
        Self {
            pattern: pattern.into(),
            claim_type,
            confidence,
        }
    }

    /// The built-in rows as specs
    pub fn builtin() -> Vec<PatternSpec> {
        BUILTIN_PATTERNS
            .iter()
            .map(|(pattern, claim_type, confidence)| PatternSpec::new(*pattern, *claim_type, *confidence))
            .collect()
    }
}

#[derive(Debug, Clone)]
struct CompiledPattern {
    spec: PatternSpec,
    regex: Regex,
}

/// A compiled, immutable pattern table
#[derive(Debug, Clone)]
pub struct PatternTable {
    rows: Vec<CompiledPattern>,
}

impl PatternTable {
    /// Compile the built-in table
    pub fn builtin() -> Result<Self, ExtractorError> {
        Self::compile(PatternSpec::builtin())
    }

    /// Compile rows in the given order
    ///
    /// Fails on the first row that does not compile, carries a confidence
    /// outside [0, 1] or repeats an earlier pattern.
    pub fn compile(specs: impl IntoIterator<Item = PatternSpec>) -> Result<Self, ExtractorError> {
        let mut seen = HashSet::new();
        let mut rows = Vec::new();

        for spec in specs {
            if !seen.insert(spec.pattern.clone()) {
                return Err(ExtractorError::DuplicatePattern(spec.pattern));
            }
            if !(0.0..=1.0).contains(&spec.confidence) {
                return Err(ExtractorError::InvalidPattern {
                    reason: format!("confidence {} out of range [0.0, 1.0]", spec.confidence),
                    pattern: spec.pattern,
                });
            }
            let regex = Regex::new(&spec.pattern).map_err(|e| ExtractorError::InvalidPattern {
                pattern: spec.pattern.clone(),
                reason: e.to_string(),
            })?;
            rows.push(CompiledPattern { spec, regex });
        }

        Ok(Self { rows })
    }

    /// Rows in matching order
    pub fn specs(&self) -> impl Iterator<Item = &PatternSpec> {
        self.rows.iter().map(|row| &row.spec)
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row matching the sentence
    pub fn first_match(&self, sentence: &str) -> Option<&PatternSpec> {
        self.rows
            .iter()
            .find(|row| row.regex.is_match(sentence))
            .map(|row| &row.spec)
    }
}

/// Assigns a claim type and base confidence to a sentence
#[derive(Debug, Clone)]
pub struct ClaimClassifier {
    table: PatternTable,
}

impl ClaimClassifier {
    /// Classifier over a compiled table
    pub fn new(table: PatternTable) -> Self {
        Self { table }
    }

    /// Classifier over the built-in table
    pub fn builtin() -> Result<Self, ExtractorError> {
        Ok(Self::new(PatternTable::builtin()?))
    }

    /// The table in use
    pub fn table(&self) -> &PatternTable {
        &self.table
    }

    /// Type and confidence of the first matching row, or
    /// [`DEFAULT_CLASSIFICATION`] when none match
    pub fn classify(&self, sentence: &str) -> (ClaimType, f64) {
        self.table
            .first_match(sentence)
            .map_or(DEFAULT_CLASSIFICATION, |spec| (spec.claim_type, spec.confidence))
    }
}
