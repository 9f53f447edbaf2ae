//! Patterns command implementation.

use crate::error::Result;
use crate::output::Formatter;
use xiaocha_extractor::{Extractor, PatternSpec};
use xiaocha_segmenter::JiebaSegmenter;

/// Execute the patterns command.
pub fn execute_patterns(extractor: &Extractor<JiebaSegmenter>, formatter: &Formatter) -> Result<()> {
    let patterns: Vec<PatternSpec> = extractor.patterns().specs().cloned().collect();
    println!("{}", formatter.format_patterns(&patterns)?);
    Ok(())
}
