use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid question id: {0}")]
    InvalidQuestionId(String),

    #[error("unknown assessment variant: {0}")]
    UnknownVariant(String),
}
