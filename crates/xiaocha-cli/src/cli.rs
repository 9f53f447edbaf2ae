//! CLI command definitions and argument parsing.

use crate::error::{CliError, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// XiaoCha CLI - Extract verifiable claims and identify languages.
#[derive(Debug, Parser)]
#[command(name = "xiaocha")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "XIAOCHA_CONFIG")]
    pub config: Option<PathBuf>,

    /// User lexicon added to the jieba dictionary
    #[arg(long, global = true, env = "XIAOCHA_LEXICON")]
    pub lexicon: Option<PathBuf>,

    /// Log pipeline decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (one line per item)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract claims from text
    Extract(ExtractArgs),

    /// Identify the language of text
    Detect(DetectArgs),

    /// List the active claim patterns in matching order
    Patterns,
}

/// Where the input text comes from.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Text to process
    pub text: Option<String>,

    /// Read text from a file
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Read text from stdin
    #[arg(long, conflicts_with_all = ["text", "file"])]
    pub stdin: bool,
}

impl InputArgs {
    /// Read the input text.
    pub fn read(&self) -> Result<String> {
        if self.stdin {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        } else if let Some(path) = &self.file {
            Ok(fs::read_to_string(path)?)
        } else if let Some(text) = &self.text {
            Ok(text.clone())
        } else {
            Err(CliError::InvalidInput(
                "Must specify TEXT, --file or --stdin".to_string(),
            ))
        }
    }
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Language tag for the claims
    #[arg(short, long)]
    pub language: Option<String>,

    /// Minimum claim length in characters
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Maximum claim length in characters
    #[arg(long)]
    pub max_length: Option<usize>,

    /// Also report the language composition of the text
    #[arg(short, long)]
    pub analyze: bool,
}

/// Arguments for the detect command.
#[derive(Debug, Parser)]
pub struct DetectArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Show the full language composition
    #[arg(short, long)]
    pub all: bool,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_command() {
        let cli = Cli::parse_from([
            "xiaocha",
            "extract",
            "专家称这项技术将改变行业。",
            "--language",
            "zh-TW",
            "--min-length",
            "5",
        ]);
        match cli.command {
            Command::Extract(args) => {
                assert_eq!(args.input.text.as_deref(), Some("专家称这项技术将改变行业。"));
                assert_eq!(args.language.as_deref(), Some("zh-TW"));
                assert_eq!(args.min_length, Some(5));
                assert_eq!(args.max_length, None);
                assert!(!args.analyze);
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_detect_command_with_global_flags() {
        let cli = Cli::parse_from(["xiaocha", "detect", "hello", "--all", "--format", "json", "--no-color"]);
        assert!(cli.no_color);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        match cli.command {
            Command::Detect(args) => assert!(args.all),
            _ => panic!("Expected Detect command"),
        }
    }

    #[test]
    fn test_patterns_command() {
        let cli = Cli::parse_from(["xiaocha", "-v", "patterns"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Patterns));
    }

    #[test]
    fn test_text_and_file_conflict() {
        let result = Cli::try_parse_from(["xiaocha", "extract", "text", "--file", "a.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "据新华社报道今年粮食产量增长。").unwrap();

        let input = InputArgs {
            text: None,
            file: Some(path),
            stdin: false,
        };
        assert_eq!(input.read().unwrap(), "据新华社报道今年粮食产量增长。");
    }

    #[test]
    fn test_missing_input() {
        let input = InputArgs {
            text: None,
            file: None,
            stdin: false,
        };
        assert!(matches!(input.read(), Err(CliError::InvalidInput(_))));
    }
}
