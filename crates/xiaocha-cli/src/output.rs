//! Output formatting for the CLI.

use crate::commands::DetectionReport;
use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use xiaocha_domain::{ClaimType, ExtractedClaim, LanguageSignal};
use xiaocha_extractor::{ExtractionMetadata, ExtractionResult, PatternSpec};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format extracted claims.
    pub fn format_claims(&self, claims: &[ExtractedClaim]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(claims)?),
            OutputFormat::Table => Ok(self.format_claims_table(claims)),
            OutputFormat::Quiet => Ok(claims.iter().map(|c| c.text.as_str()).collect::<Vec<_>>().join("\n")),
        }
    }

    /// Format claims together with the language metadata.
    pub fn format_analysis(&self, result: &ExtractionResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Table => Ok(format!(
                "{}\n{}",
                self.format_claims_table(&result.claims),
                self.format_metadata(&result.metadata)
            )),
            OutputFormat::Quiet => self.format_claims(&result.claims),
        }
    }

    /// Format a language detection report.
    pub fn format_detection(&self, report: &DetectionReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Quiet => Ok(report.detected.language.code().to_string()),
            OutputFormat::Table => {
                let signals = report
                    .composition
                    .as_deref()
                    .unwrap_or(std::slice::from_ref(&report.detected));
                Ok(format!(
                    "{}\n{}",
                    self.format_signals_table(signals),
                    self.translated_line(report.translated)
                ))
            }
        }
    }

    /// Format the pattern table.
    pub fn format_patterns(&self, patterns: &[PatternSpec]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(patterns)?),
            OutputFormat::Quiet => Ok(patterns.iter().map(|p| p.pattern.as_str()).collect::<Vec<_>>().join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["#", "Pattern", "Type", "Confidence"]);
                for (idx, spec) in patterns.iter().enumerate() {
                    builder.push_record([
                        (idx + 1).to_string(),
                        spec.pattern.clone(),
                        self.claim_type(spec.claim_type),
                        format!("{:.2}", spec.confidence),
                    ]);
                }
                Ok(self.render(builder))
            }
        }
    }

    fn format_claims_table(&self, claims: &[ExtractedClaim]) -> String {
        if claims.is_empty() {
            return self.colorize("No claims found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Type", "Confidence", "Claim", "Entities"]);

        for claim in claims {
            let id = claim.id.to_string();
            builder.push_record([
                id[..8].to_string(), // Truncate ID for readability
                self.claim_type(claim.claim_type),
                format!("{:.2}", claim.confidence),
                claim.text.clone(),
                claim.entities.join(", "),
            ]);
        }

        self.render(builder)
    }

    fn format_metadata(&self, metadata: &ExtractionMetadata) -> String {
        format!(
            "{}\n{}\n{}",
            self.format_signals_table(&metadata.composition),
            self.translated_line(metadata.translated),
            self.info(&format!(
                "Detected {} ({:.2}); {} sentence(s) considered in {} ms",
                metadata.detected.language.code(),
                metadata.detected.confidence,
                metadata.sentences_considered,
                metadata.processing_time_ms
            ))
        )
    }

    fn format_signals_table(&self, signals: &[LanguageSignal]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Language", "Code", "Confidence"]);
        for signal in signals {
            builder.push_record([
                signal.language.name().to_string(),
                signal.language.code().to_string(),
                format!("{:.2}", signal.confidence),
            ]);
        }
        self.render(builder)
    }

    fn translated_line(&self, translated: bool) -> String {
        if translated {
            self.warning("Looks translated from foreign reporting")
        } else {
            self.info("No sign of translated content")
        }
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    fn claim_type(&self, claim_type: ClaimType) -> String {
        let color = match claim_type {
            ClaimType::Factual => "green",
            ClaimType::Opinion => "yellow",
            ClaimType::Prediction => "cyan",
            ClaimType::Quote => "magenta",
        };
        self.colorize(claim_type.as_str(), color)
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}
