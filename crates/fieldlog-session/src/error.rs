use fieldlog_storage::error::StorageError;
use fieldlog_survey::validation::ValidationError;
use thiserror::Error;

use crate::session::Phase;

#[derive(Debug, Error)]
pub enum SessionError {
    /// An answer is missing or malformed. Recoverable by editing the draft.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The store rejected a read or write. Recoverable by retrying.
    #[error("persistence failed: {0}")]
    Persistence(#[from] StorageError),

    /// No usable session could be set up. Fatal for this run.
    #[error("initialization failed: {0}")]
    Initialization(String),

    #[error("{action} is not available in phase {phase:?}")]
    NotAvailable { action: &'static str, phase: Phase },
}

impl SessionError {
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Initialization(_))
    }
}
