//! Error types for language identification

use thiserror::Error;

/// Errors raised while building a [`crate::LanguageIdentifier`]
///
/// Identification itself never fails; only marker configuration can.
#[derive(Error, Debug)]
pub enum LangError {
    /// A translation marker is not a valid regular expression
    #[error("Invalid translation marker '{pattern}': {reason}")]
    InvalidMarker {
        /// The offending pattern
        pattern: String,
        /// Compiler message
        reason: String,
    },
}
