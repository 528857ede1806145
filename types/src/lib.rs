//! Fundamental types for the scrutin vote ledger.
//!
//! This crate defines the types shared across every other crate in the
//! workspace: validated identifiers, the election status gate, and the
//! tagged record format stored in the ledger keyspace.

pub mod candidate;
pub mod id;
pub mod record;
pub mod status;

pub use candidate::Candidate;
pub use id::{ElectionId, InvalidId, StudentId};
pub use record::{Election, Record, Vote};
pub use status::ElectionStatus;
