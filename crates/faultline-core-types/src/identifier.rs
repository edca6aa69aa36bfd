//! Occurrence identifiers for failure correlation
//!
//! Every error in the taxonomy carries exactly one `OccurrenceId`. The
//! convention is that a single logical failure keeps one identifier across
//! all layers that rewrap it, so wrapping code passes the inner error's
//! identifier on explicitly instead of generating a new one.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the canonical 8-4-4-4-12 hyphenated layout
const CANONICAL_LENGTH: usize = 36;

/// A supplied identifier did not match the canonical hyphenated layout
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("identifier must be a 36-character hyphenated RFC 4122 string, got {candidate:?}")]
pub struct InvalidIdentifier {
    candidate: String,
}

impl InvalidIdentifier {
    /// The rejected input
    pub fn candidate(&self) -> &str {
        &self.candidate
    }
}

/// Unique identifier for a single failure occurrence
///
/// A version-4 random identifier, rendered canonically as 36 hyphenated
/// hexadecimal characters. Immutable once constructed; `Copy` so it can be
/// propagated untouched when an error is wrapped as the cause of another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OccurrenceId(Uuid);

impl OccurrenceId {
    /// Generate a new random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier from the canonical hyphenated layout
    ///
    /// Accepts exactly the 36-character 8-4-4-4-12 form. Simple, braced,
    /// and urn renderings are rejected: the contract is the textual
    /// layout, not UUID-ness in general.
    pub fn parse(candidate: &str) -> Result<Self, InvalidIdentifier> {
        if candidate.len() != CANONICAL_LENGTH {
            return Err(InvalidIdentifier {
                candidate: candidate.to_string(),
            });
        }
        Uuid::try_parse(candidate)
            .map(Self)
            .map_err(|_| InvalidIdentifier {
                candidate: candidate.to_string(),
            })
    }

    /// Check whether a candidate matches the canonical layout
    pub fn is_valid(candidate: &str) -> bool {
        Self::parse(candidate).is_ok()
    }
}

impl Default for OccurrenceId {
    fn default() -> Self {
        Self::generate()
    }
}

impl std::fmt::Display for OccurrenceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl std::str::FromStr for OccurrenceId {
    type Err = InvalidIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
