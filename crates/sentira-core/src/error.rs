use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid scoring config '{id}': {reason}")]
    InvalidConfig { id: String, reason: String },
}
