//! The vote ledger — exactly-once vote recording per (election, student).

use std::sync::Arc;

use scrutin_store::StateStore;
use scrutin_types::{Candidate, ElectionId, Record, StudentId, Vote};

use crate::codec::{decode, encode};
use crate::error::LedgerError;
use crate::keys::vote_key;
use crate::registry::ElectionRegistry;

/// Records votes in the state store, one per (election, student) pair.
pub struct VoteLedger<S> {
    store: Arc<S>,
    registry: ElectionRegistry<S>,
}

impl<S: StateStore> VoteLedger<S> {
    pub fn new(store: Arc<S>) -> Self {
        let registry = ElectionRegistry::new(Arc::clone(&store));
        Self { store, registry }
    }

    /// Record `student`'s vote for `candidate` in `election`.
    ///
    /// Checks run in a fixed order, each aborting before any write: the
    /// election must exist, it must be open, and the student must not have
    /// a recorded vote in it. The final write is an atomic insert-if-absent,
    /// so two racing calls for the same pair record exactly one vote; the
    /// loser observes [`LedgerError::AlreadyVoted`].
    pub fn cast_vote(
        &self,
        election: &ElectionId,
        student: &StudentId,
        candidate: &Candidate,
    ) -> Result<Vote, LedgerError> {
        let record = self
            .registry
            .get_election(election)?
            .ok_or_else(|| LedgerError::ElectionNotFound(election.to_string()))?;

        if !record.status.is_open() {
            return Err(LedgerError::ElectionClosed(election.to_string()));
        }

        let key = vote_key(election, student);
        if self.store.get(&key)?.is_some_and(|bytes| !bytes.is_empty()) {
            return Err(LedgerError::AlreadyVoted {
                election: election.to_string(),
                student: student.to_string(),
            });
        }

        let vote = Vote {
            election: election.clone(),
            student: student.clone(),
            candidate: candidate.clone(),
        };
        let bytes = encode(&Record::Vote(vote.clone()))?;
        if !self.store.put_if_absent(&key, &bytes)? {
            // Lost a race against a concurrent cast for the same pair.
            return Err(LedgerError::AlreadyVoted {
                election: election.to_string(),
                student: student.to_string(),
            });
        }
        tracing::info!(election = %election, student = %student, "vote recorded");
        Ok(vote)
    }

    /// Read the vote cast by `student` in `election`.
    ///
    /// Reading never mutates the store; repeated calls return identical
    /// content.
    pub fn get_vote(
        &self,
        election: &ElectionId,
        student: &StudentId,
    ) -> Result<Vote, LedgerError> {
        let key = vote_key(election, student);
        let bytes = match self.store.get(&key)? {
            Some(bytes) if !bytes.is_empty() => bytes,
            _ => {
                return Err(LedgerError::VoteNotFound {
                    election: election.to_string(),
                    student: student.to_string(),
                })
            }
        };
        match decode(&key, &bytes)? {
            Record::Vote(vote) => Ok(vote),
            other => Err(LedgerError::CorruptRecord {
                key,
                reason: format!("expected a vote record, found {}", other.kind()),
            }),
        }
    }
}
