//! XiaoChaGuan Language Identification
//!
//! Script-range arithmetic over raw text: how many characters fall into each
//! writing system, which language dominates, what the language mix looks
//! like, and whether the text reads like translated foreign reporting.
//!
//! # Example Usage
//!
//! ```
//! use xiaocha_lang::{classify_scripts, LanguageIdentifier, Script};
//! use xiaocha_domain::Language;
//!
//! let counts = classify_scripts("新华社 Xinhua");
//! assert_eq!(counts.get(Script::Chinese), 3);
//! assert_eq!(counts.get(Script::Latin), 6);
//!
//! let identifier = LanguageIdentifier::new()?;
//! let signal = identifier.identify("今天北京天气很好");
//! assert_eq!(signal.language, Language::ChineseSimplified);
//! # Ok::<(), xiaocha_lang::LangError>(())
//! ```

#![warn(missing_docs)]

mod error;
mod identifier;
mod script;

pub use error::LangError;
pub use identifier::{LanguageIdentifier, TRANSLATION_MARKERS};
pub use script::{classify_scripts, Script, ScriptCounts, SCRIPTS};
