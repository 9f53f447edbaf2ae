//! Claim module - the unit handed to the verification layer

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for an extracted claim, backed by a UUIDv7
///
/// UUIDv7 provides:
/// - Chronological sortability, so claims from one call sort in creation order
/// - 128-bit uniqueness without coordination between threads
/// - The RFC 9562 hyphenated form expected by the API layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClaimId(u128);

impl ClaimId {
    /// Generate a new UUIDv7-based ClaimId
    ///
    /// # Examples
    ///
    /// ```
    /// use xiaocha_domain::ClaimId;
    ///
    /// let id = ClaimId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a ClaimId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a ClaimId from its hyphenated string form
    ///
    /// # Examples
    ///
    /// ```
    /// use xiaocha_domain::ClaimId;
    ///
    /// let id = ClaimId::new();
    /// let parsed = ClaimId::from_string(&id.to_string()).unwrap();
    /// assert_eq!(id, parsed);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid claim id '{}': {}", s, e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for ClaimId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

impl Serialize for ClaimId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClaimId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ClaimId::from_string(&s).map_err(serde::de::Error::custom)
    }
}

/// Classification of a sentence by what kind of statement it makes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimType {
    /// A checkable statement of fact
    Factual,
    /// A first-person judgement
    Opinion,
    /// A statement about the future
    Prediction,
    /// Speech attributed to someone else
    Quote,
}

impl ClaimType {
    /// Lowercase name used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimType::Factual => "factual",
            ClaimType::Opinion => "opinion",
            ClaimType::Prediction => "prediction",
            ClaimType::Quote => "quote",
        }
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "factual" => Ok(ClaimType::Factual),
            "opinion" => Ok(ClaimType::Opinion),
            "prediction" => Ok(ClaimType::Prediction),
            "quote" => Ok(ClaimType::Quote),
            other => Err(format!("Unknown claim type: {}", other)),
        }
    }
}

/// A claim extracted from free-form text
///
/// Created once per surviving sentence and never mutated afterwards.
/// Ownership passes to the caller when the extraction call returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedClaim {
    /// Unique within the extraction call that produced it
    pub id: ClaimId,

    /// The sentence, trimmed
    pub text: String,

    /// Claim type assigned by the first matching pattern
    #[serde(rename = "type")]
    pub claim_type: ClaimType,

    /// Deduplicated noun phrases and keywords, at most ten
    pub entities: Vec<String>,

    /// Language tag inherited from the request, not re-detected
    pub language: String,

    /// Base confidence of the matching pattern
    pub confidence: f64,
}

impl ExtractedClaim {
    /// Create a claim with a freshly generated id
    pub fn new(
        text: String,
        claim_type: ClaimType,
        entities: Vec<String>,
        language: String,
        confidence: f64,
    ) -> Self {
        Self {
            id: ClaimId::new(),
            text,
            claim_type,
            entities,
            language,
            confidence,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Ordering of ids matches ordering of the underlying values
        #[test]
        fn test_id_ordering_property(a: u128, b: u128) {
            let id_a = ClaimId::from_value(a);
            let id_b = ClaimId::from_value(b);

            prop_assert_eq!(id_a < id_b, a < b);
            prop_assert_eq!(id_a == id_b, a == b);
        }
    }
}
