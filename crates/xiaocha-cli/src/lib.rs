//! XiaoCha CLI library.
//!
//! The request boundary around the extraction pipeline: input validation,
//! time limits, configuration loading and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
