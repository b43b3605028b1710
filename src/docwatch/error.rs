use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocwatchError {
    #[error("Document name cannot be empty")]
    InvalidName,

    #[error("Alert lead time must be zero or more days (got {0})")]
    InvalidLeadTime(i64),

    #[error("Search term cannot be empty")]
    EmptyQuery,

    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Store file {} is corrupt: {reason}", path.display())]
    CorruptStore { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DocwatchError>;
