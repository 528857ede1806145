//! Candidate names as they appear on the ballot.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A free-form candidate identifier or display name.
///
/// Candidates never participate in key construction, so no character
/// restrictions apply. Ordered so tallies iterate deterministically.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Candidate(String);

impl Candidate {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw candidate string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Candidate {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for Candidate {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}
