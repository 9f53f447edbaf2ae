//! XiaoChaGuan Domain Layer
//!
//! Value types shared by every stage of the claim preprocessing pipeline and
//! the trait boundary to the external word-segmentation capability.
//!
//! ## Key Concepts
//!
//! - **Extracted claim**: a sentence judged worth verifying, with a type,
//!   a base confidence and the entities it mentions
//! - **Claim type**: factual, opinion, prediction or quote
//! - **Language signal**: a language code paired with the share of scripted
//!   characters attributable to it
//! - **Segmenter**: tokenization, part-of-speech tagging and keyword weighting,
//!   supplied by infrastructure
//!
//! ## Architecture
//!
//! - Minimal dependencies (`uuid` for identifiers, `serde` for the wire shape)
//! - No I/O and no mutable global state
//! - Infrastructure implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod claim;
pub mod language;
pub mod traits;

// Re-exports for convenience
pub use claim::{ClaimId, ClaimType, ExtractedClaim};
pub use language::{Language, LanguageSignal};
pub use traits::{is_noun_tag, Segmenter, TaggedToken, WeightedKeyword, NOUN_TAGS};
