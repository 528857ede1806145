use scrutin_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
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

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}
