//! Command implementations and the request boundary they share.

pub mod detect;
pub mod extract;
pub mod patterns;

pub use self::detect::{execute_detect, DetectionReport};
pub use self::extract::execute_extract;
pub use self::patterns::execute_patterns;

use crate::error::{CliError, Result};
use std::path::Path;
use std::time::Duration;
use tracing::debug;
use xiaocha_extractor::{Extractor, ExtractorConfig};
use xiaocha_segmenter::{JiebaSegmenter, Lexicon};

/// Build the extractor over jieba's dictionary plus an optional user lexicon.
pub fn build_extractor(
    lexicon: Option<&Path>,
    config: ExtractorConfig,
) -> Result<Extractor<JiebaSegmenter>> {
    let segmenter = match lexicon {
        Some(path) => {
            debug!("Loading lexicon from {}", path.display());
            JiebaSegmenter::with_lexicon(Lexicon::load(path)?)?
        }
        None => JiebaSegmenter::new(),
    };
    Ok(Extractor::new(segmenter, config)?)
}

/// Reject blank input and input outside `[min_chars, max_chars]`.
pub fn validate_input(text: &str, min_chars: usize, max_chars: usize) -> Result<()> {
    if text.trim().is_empty() {
        return Err(CliError::InvalidInput("Text is empty".to_string()));
    }
    let length = text.chars().count();
    if length < min_chars || length > max_chars {
        return Err(CliError::InvalidInput(format!(
            "Text length {} outside [{}, {}]",
            length, min_chars, max_chars
        )));
    }
    Ok(())
}

/// Run a synchronous job on the blocking pool under a time limit.
pub async fn run_with_timeout<T, F>(limit: Duration, job: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    let handle = tokio::task::spawn_blocking(job);
    match tokio::time::timeout(limit, handle).await {
        Ok(joined) => joined.map_err(|e| CliError::Task(e.to_string()))?,
        Err(_) => Err(CliError::Timeout(limit)),
    }
}
