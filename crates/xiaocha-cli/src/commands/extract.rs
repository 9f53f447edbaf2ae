//! Extract command implementation.

use super::{run_with_timeout, validate_input};
use crate::cli::ExtractArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::output::Formatter;
use std::sync::Arc;
use xiaocha_domain::ExtractedClaim;
use xiaocha_extractor::{ExtractionRequest, ExtractionResult, Extractor};
use xiaocha_segmenter::JiebaSegmenter;

/// Execute the extract command.
pub async fn execute_extract(
    args: ExtractArgs,
    extractor: Arc<Extractor<JiebaSegmenter>>,
    settings: &Settings,
    formatter: &Formatter,
) -> Result<()> {
    let text = args.input.read()?;
    let analyze = args.analyze;
    let request = build_request(text, &args);

    let output = if analyze {
        let result = analyze_claims(extractor, request, settings).await?;
        formatter.format_analysis(&result)?
    } else {
        let claims = extract_claims(extractor, request, settings).await?;
        formatter.format_claims(&claims)?
    };
    println!("{}", output);

    Ok(())
}

/// Validate the request and extract claims on the blocking pool.
pub async fn extract_claims(
    extractor: Arc<Extractor<JiebaSegmenter>>,
    request: ExtractionRequest,
    settings: &Settings,
) -> Result<Vec<ExtractedClaim>> {
    validate_input(&request.text, settings.min_input_chars, settings.max_input_chars)?;

    run_with_timeout(settings.timeout(), move || Ok(extractor.extract(&request)?)).await
}

/// Like [`extract_claims`], also describing the language of the whole text.
pub async fn analyze_claims(
    extractor: Arc<Extractor<JiebaSegmenter>>,
    request: ExtractionRequest,
    settings: &Settings,
) -> Result<ExtractionResult> {
    validate_input(&request.text, settings.min_input_chars, settings.max_input_chars)?;

    run_with_timeout(settings.timeout(), move || Ok(extractor.analyze(&request)?)).await
}

fn build_request(text: String, args: &ExtractArgs) -> ExtractionRequest {
    let mut request = ExtractionRequest::new(text);
    request.language = args.language.clone();
    request.min_length = args.min_length;
    request.max_length = args.max_length;
    request
}
