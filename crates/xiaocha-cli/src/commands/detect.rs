//! Detect command implementation.

use super::validate_input;
use crate::cli::DetectArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::output::Formatter;
use serde::Serialize;
use xiaocha_domain::LanguageSignal;
use xiaocha_lang::LanguageIdentifier;

/// Language report for one text.
#[derive(Debug, Clone, Serialize)]
pub struct DetectionReport {
    /// Dominant language
    pub detected: LanguageSignal,

    /// Full composition, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composition: Option<Vec<LanguageSignal>>,

    /// Whether the text looks translated
    pub translated: bool,
}

/// Execute the detect command.
pub async fn execute_detect(args: DetectArgs, settings: &Settings, formatter: &Formatter) -> Result<()> {
    let text = args.input.read()?;
    validate_input(&text, 1, settings.max_input_chars)?;

    let identifier = LanguageIdentifier::new()?;
    let report = detect(&identifier, &text, args.all);

    println!("{}", formatter.format_detection(&report)?);
    Ok(())
}

/// Identify the language of `text`, with its composition if `all` is set.
pub fn detect(identifier: &LanguageIdentifier, text: &str, all: bool) -> DetectionReport {
    DetectionReport {
        detected: identifier.identify(text),
        composition: all.then(|| identifier.identify_all(text)),
        translated: identifier.is_translated(text),
    }
}
