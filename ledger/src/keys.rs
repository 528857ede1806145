//! Composite-key layout for the ledger keyspace.
//!
//! Elections and votes share one flat keyspace, separated by prefix:
//!
//! - `election:<id>`: one registry record per election
//! - `vote:<election>:<student>`: one vote record per (election, student)
//!
//! Identifiers cannot contain `:` (enforced at construction), so the
//! mapping from (election, student) to a vote key is injective, and the
//! tally's prefix scan for one election can never pick up votes belonging
//! to another election whose id shares a textual prefix.

use scrutin_types::{ElectionId, StudentId};

const ELECTION_PREFIX: &str = "election:";
const VOTE_PREFIX: &str = "vote:";

/// Storage key for an election registry record.
pub fn election_key(id: &ElectionId) -> String {
    format!("{ELECTION_PREFIX}{id}")
}

/// Storage key for the vote cast by `student` in `election`.
pub fn vote_key(election: &ElectionId, student: &StudentId) -> String {
    format!("{VOTE_PREFIX}{election}:{student}")
}

/// Scan prefix covering every vote recorded for `election`.
pub fn vote_prefix(election: &ElectionId) -> String {
    format!("{VOTE_PREFIX}{election}:")
}
