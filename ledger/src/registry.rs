//! Election registry — lifecycle records keyed by election id.

use std::sync::Arc;

use scrutin_store::StateStore;
use scrutin_types::{Election, ElectionId, ElectionStatus, Record};

use crate::codec::{decode, encode};
use crate::error::LedgerError;
use crate::keys::election_key;

/// Manages election records in the state store.
pub struct ElectionRegistry<S> {
    store: Arc<S>,
}

impl<S: StateStore> ElectionRegistry<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Create (or re-create) an election record with status `Open`.
    ///
    /// Overwrites any record already stored under this id: re-running setup
    /// reopens the election in place. Votes are keyed independently of the
    /// election record, so any votes recorded before a re-initialization
    /// remain counted for the reopened election; guarding against an
    /// accidental reset is the integrating application's responsibility.
    pub fn init_election(&self, id: &ElectionId, name: &str) -> Result<Election, LedgerError> {
        let election = Election {
            id: id.clone(),
            name: name.to_string(),
            status: ElectionStatus::Open,
        };
        let bytes = encode(&Record::Election(election.clone()))?;
        self.store.put(&election_key(id), &bytes)?;
        tracing::info!(election = %id, name, "election initialized");
        Ok(election)
    }

    /// Read an election record, or `None` if the id was never initialized.
    pub fn get_election(&self, id: &ElectionId) -> Result<Option<Election>, LedgerError> {
        let key = election_key(id);
        let Some(bytes) = self.store.get(&key)? else {
            return Ok(None);
        };
        match decode(&key, &bytes)? {
            Record::Election(election) => Ok(Some(election)),
            other => Err(LedgerError::CorruptRecord {
                key,
                reason: format!("expected an election record, found {}", other.kind()),
            }),
        }
    }
}
