//! Ledger records and their wire format.
//!
//! Every value in the ledger keyspace is a JSON object carrying a `docType`
//! discriminator. Bytes are decoded exactly once on read into the tagged
//! [`Record`] enum; the higher layers then match on the variant instead of
//! inspecting fields ad hoc.

use serde::{Deserialize, Serialize};

use crate::{Candidate, ElectionId, ElectionStatus, StudentId};

/// An election registry record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Election {
    #[serde(rename = "ID")]
    pub id: ElectionId,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Status")]
    pub status: ElectionStatus,
}

/// A recorded vote. Immutable once written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    #[serde(rename = "electionID")]
    pub election: ElectionId,

    #[serde(rename = "studentID")]
    pub student: StudentId,

    pub candidate: Candidate,
}

/// A decoded ledger record, discriminated by its `docType` field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "docType")]
pub enum Record {
    #[serde(rename = "election")]
    Election(Election),

    #[serde(rename = "vote")]
    Vote(Vote),
}

impl Record {
    /// The `docType` discriminator for this record.
    pub fn kind(&self) -> &'static str {
        match self {
            Record::Election(_) => "election",
            Record::Vote(_) => "vote",
        }
    }

    /// Encode to the JSON wire format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Decode from the JSON wire format.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn election() -> Election {
        Election {
            id: ElectionId::new("election1").unwrap(),
            name: "UWO President".to_string(),
            status: ElectionStatus::Open,
        }
    }

    fn vote() -> Vote {
        Vote {
            election: ElectionId::new("election1").unwrap(),
            student: StudentId::new("student1").unwrap(),
            candidate: Candidate::new("Alice"),
        }
    }

    #[test]
    fn election_wire_format() {
        let bytes = Record::Election(election()).to_bytes().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["docType"], "election");
        assert_eq!(value["ID"], "election1");
        assert_eq!(value["Name"], "UWO President");
        assert_eq!(value["Status"], "OPEN");
    }

    #[test]
    fn vote_wire_format() {
        let bytes = Record::Vote(vote()).to_bytes().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["docType"], "vote");
        assert_eq!(value["electionID"], "election1");
        assert_eq!(value["studentID"], "student1");
        assert_eq!(value["candidate"], "Alice");
    }

    #[test]
    fn decode_dispatches_on_doc_type() {
        let bytes = Record::Vote(vote()).to_bytes().unwrap();
        match Record::from_bytes(&bytes).unwrap() {
            Record::Vote(v) => assert_eq!(v, vote()),
            Record::Election(_) => panic!("decoded the wrong record kind"),
        }
    }

    #[test]
    fn unknown_doc_type_is_an_error() {
        let bytes = br#"{"docType":"ballot","ID":"x"}"#;
        assert!(Record::from_bytes(bytes).is_err());
    }

    #[test]
    fn missing_doc_type_is_an_error() {
        let bytes = br#"{"ID":"election1","Name":"n","Status":"OPEN"}"#;
        assert!(Record::from_bytes(bytes).is_err());
    }
}
