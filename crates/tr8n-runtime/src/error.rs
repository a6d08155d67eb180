use thiserror::Error;
use tr8n_core::Tr8nError;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid hash format")]
    InvalidHash,
    #[error("catalog hash mismatch: {0}")]
    HashMismatch(String),
    #[error("unsupported catalog format: {0}")]
    UnsupportedFormat(String),
    #[error("catalog error: {0}")]
    Catalog(#[from] Tr8nError),
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;
