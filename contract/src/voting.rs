//! Contract entry points.

use std::sync::Arc;

use scrutin_ledger::{ElectionRegistry, TallyEngine, VoteLedger};
use scrutin_store::StateStore;
use scrutin_types::{Candidate, ElectionId, Record, StudentId};

use crate::error::ContractError;

/// The ledger-backed vote contract.
///
/// Thin orchestration over the election registry, vote ledger, and tally
/// engine, all sharing one store handle. Each operation returns its result
/// in the serialized JSON wire form, like the transaction interface it
/// stands behind.
pub struct VotingContract<S> {
    registry: ElectionRegistry<S>,
    votes: VoteLedger<S>,
    tally: TallyEngine<S>,
}

impl<S: StateStore> VotingContract<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            registry: ElectionRegistry::new(Arc::clone(&store)),
            votes: VoteLedger::new(Arc::clone(&store)),
            tally: TallyEngine::new(store),
        }
    }

    /// Create (or re-create) an election with status `OPEN`, returning the
    /// serialized election record.
    pub fn init_election(&self, id: &ElectionId, name: &str) -> Result<String, ContractError> {
        let election = self.registry.init_election(id, name)?;
        to_json(&Record::Election(election))
    }

    /// Record a student's vote, returning the serialized vote record.
    pub fn cast_vote(
        &self,
        election: &ElectionId,
        student: &StudentId,
        candidate: &Candidate,
    ) -> Result<String, ContractError> {
        let vote = self.votes.cast_vote(election, student, candidate)?;
        to_json(&Record::Vote(vote))
    }

    /// Read a previously recorded vote in serialized form.
    pub fn get_vote(
        &self,
        election: &ElectionId,
        student: &StudentId,
    ) -> Result<String, ContractError> {
        let vote = self.votes.get_vote(election, student)?;
        to_json(&Record::Vote(vote))
    }

    /// Serialized per-candidate vote counts for an election.
    ///
    /// An election with no recorded votes yields `{}`, never an error.
    pub fn query_results(&self, election: &ElectionId) -> Result<String, ContractError> {
        let results = self.tally.query_results(election)?;
        to_json(&results)
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, ContractError> {
    serde_json::to_string(value).map_err(|e| ContractError::Serialization(e.to_string()))
}
