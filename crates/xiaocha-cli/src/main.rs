//! XiaoCha CLI - Claim extraction and language identification from the command line.

use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use xiaocha_cli::commands;
use xiaocha_cli::{Cli, Command, Config, Formatter};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> xiaocha_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    let lexicon = cli.lexicon.clone().or_else(|| config.settings.lexicon.clone());

    match cli.command {
        Command::Detect(args) => {
            commands::execute_detect(args, &config.settings, &formatter).await?;
        }
        Command::Extract(args) => {
            let extractor = commands::build_extractor(lexicon.as_deref(), config.extractor.clone())?;
            commands::execute_extract(args, Arc::new(extractor), &config.settings, &formatter).await?;
        }
        Command::Patterns => {
            let extractor = commands::build_extractor(lexicon.as_deref(), config.extractor.clone())?;
            commands::execute_patterns(&extractor, &formatter)?;
        }
    }

    Ok(())
}

/// Logs go to stderr so JSON output on stdout stays clean.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
