//! The externally invoked vote contract.
//!
//! [`VotingContract`] is the single entry surface for the surrounding
//! application layer: initialize an election, cast a vote, read a vote
//! back, query results. Operations return their records in serialized JSON
//! form; domain failures pass through with kind and message intact.

pub mod error;
pub mod voting;

pub use error::ContractError;
pub use voting::VotingContract;
