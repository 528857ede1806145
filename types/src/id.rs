//! Validated string identifiers for elections and students.
//!
//! Identifiers are embedded into composite storage keys with `:` as the
//! component delimiter, so construction rejects the empty string and any
//! string containing `:`. Distinct (election, student) pairs therefore
//! always map to distinct keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A rejected identifier string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidId {
    #[error("identifier must not be empty")]
    Empty,

    #[error("identifier {0:?} contains the reserved delimiter ':'")]
    ReservedDelimiter(String),
}

fn validate(raw: String) -> Result<String, InvalidId> {
    if raw.is_empty() {
        return Err(InvalidId::Empty);
    }
    if raw.contains(':') {
        return Err(InvalidId::ReservedDelimiter(raw));
    }
    Ok(raw)
}

/// A caller-assigned election identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ElectionId(String);

impl ElectionId {
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidId> {
        validate(raw.into()).map(Self)
    }

    /// Return the raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ElectionId {
    type Error = InvalidId;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<ElectionId> for String {
    fn from(id: ElectionId) -> Self {
        id.0
    }
}

/// A student's voter identifier, unique per real-world voter.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StudentId(String);

impl StudentId {
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidId> {
        validate(raw.into()).map(Self)
    }

    /// Return the raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for StudentId {
    type Error = InvalidId;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<StudentId> for String {
    fn from(id: StudentId) -> Self {
        id.0
    }
}
