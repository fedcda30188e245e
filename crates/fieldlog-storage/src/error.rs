use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("read failed for key {key}: {message}")]
    Read { key: String, message: String },

    #[error("write failed for key {key}: {message}")]
    Write { key: String, message: String },

    #[error("write rejected by store for key: {key}")]
    Rejected { key: String },

    #[error("invalid key: {0:?}")]
    InvalidKey(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
