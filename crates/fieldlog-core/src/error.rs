use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("entry log is full ({cap} entries)")]
    TrialFull { cap: usize },

    #[error("entry log holds {count} entries, more than the cap of {cap}")]
    LogOverCap { count: usize, cap: usize },

    #[error("invalid participant id: {0:?}")]
    InvalidParticipantId(String),
}
