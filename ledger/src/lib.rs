//! Ledger semantics for campus elections.
//!
//! Three components share one [`scrutin_store::StateStore`] handle:
//! the [`ElectionRegistry`] manages election lifecycle records, the
//! [`VoteLedger`] records at most one vote per (election, student) pair,
//! and the [`TallyEngine`] aggregates recorded votes into per-candidate
//! counts. Nothing here caches store state; every read goes to the store.

mod codec;
pub mod error;
pub mod keys;
pub mod registry;
pub mod tally;
pub mod votes;

pub use error::LedgerError;
pub use registry::ElectionRegistry;
pub use tally::TallyEngine;
pub use votes::VoteLedger;
