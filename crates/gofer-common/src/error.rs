use thiserror::Error;

#[derive(Debug, Error)]
pub enum GoferError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Evidence map error: {0}")]
    EvidenceMap(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<toml::de::Error> for GoferError {
    fn from(e: toml::de::Error) -> Self {
        GoferError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GoferError>;
