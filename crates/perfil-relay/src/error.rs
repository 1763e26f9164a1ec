use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("relay endpoint not configured")]
    Disabled,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("relay request failed: {0}")]
    Transport(#[from] ureq::Error),
}
