//! Tally engine — per-candidate vote counts over the recorded ledger.

use std::collections::BTreeMap;
use std::sync::Arc;

use scrutin_store::StateStore;
use scrutin_types::{Candidate, ElectionId, Record};

use crate::codec::decode;
use crate::error::LedgerError;
use crate::keys::vote_prefix;

/// Computes election results by scanning recorded votes.
pub struct TallyEngine<S> {
    store: Arc<S>,
}

impl<S: StateStore> TallyEngine<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Count recorded votes per candidate for `election`.
    ///
    /// Scans every vote under the election's key prefix. The aggregation is
    /// a commutative sum, so store iteration order never affects the
    /// result; a `BTreeMap` makes the candidate order deterministic too.
    /// An election with no recorded votes yields an empty map, as does an
    /// election id that was never initialized.
    pub fn query_results(
        &self,
        election: &ElectionId,
    ) -> Result<BTreeMap<Candidate, u64>, LedgerError> {
        let mut results = BTreeMap::new();
        for (key, bytes) in self.store.scan_prefix(&vote_prefix(election))? {
            let Record::Vote(vote) = decode(&key, &bytes)? else {
                return Err(LedgerError::CorruptRecord {
                    key,
                    reason: "expected a vote record under the vote prefix".to_string(),
                });
            };
            *results.entry(vote.candidate).or_insert(0) += 1;
        }
        tracing::debug!(election = %election, candidates = results.len(), "tally computed");
        Ok(results)
    }
}
