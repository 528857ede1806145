//! Election lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether an election is accepting votes.
///
/// The ballot gate checks for exactly `Open`. Stored status strings other
/// than the literal `"OPEN"` decode to `Closed`, so a record written with
/// an unrecognized status rejects votes instead of failing to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElectionStatus {
    Open,
    Closed,
}

impl ElectionStatus {
    /// Whether votes may be recorded.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// The wire representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
        }
    }

    /// Decode a stored status string.
    pub fn from_wire(raw: &str) -> Self {
        if raw == "OPEN" {
            Self::Open
        } else {
            Self::Closed
        }
    }
}

impl fmt::Display for ElectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ElectionStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ElectionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&raw))
    }
}
