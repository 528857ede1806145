//! Caller-visible contract failures.

use scrutin_ledger::LedgerError;
use thiserror::Error;

/// Failure kinds reported to contract callers.
///
/// Mirrors [`LedgerError`] kind-for-kind with identical message content, so
/// the application layer can match on either the variant or the text (the
/// "already voted" signal in particular is special-cased by callers).
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("election {0} does not exist")]
    ElectionNotFound(String),

    #[error("election {0} is closed")]
    ElectionClosed(String),

    #[error("student {student} has already voted in election {election}")]
    AlreadyVoted { election: String, student: String },

    #[error("student {student} has not voted yet in election {election}")]
    VoteNotFound { election: String, student: String },

    #[error("corrupt record at {key}: {reason}")]
    CorruptRecord { key: String, reason: String },

    #[error("store error: {0}")]
    Store(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<LedgerError> for ContractError {
    fn from(e: LedgerError) -> Self {
        match e {
            LedgerError::ElectionNotFound(id) => ContractError::ElectionNotFound(id),
            LedgerError::ElectionClosed(id) => ContractError::ElectionClosed(id),
            LedgerError::AlreadyVoted { election, student } => {
                ContractError::AlreadyVoted { election, student }
            }
            LedgerError::VoteNotFound { election, student } => {
                ContractError::VoteNotFound { election, student }
            }
            LedgerError::CorruptRecord { key, reason } => {
                ContractError::CorruptRecord { key, reason }
            }
            LedgerError::Storage(e) => ContractError::Store(e.to_string()),
        }
    }
}
