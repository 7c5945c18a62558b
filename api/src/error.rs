use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaygroundError {
    #[error("{0}")]
    Validation(String),

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    // Storage errors never reach the user; they are logged at the store
    // boundary and the in-memory state stays authoritative.
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<sqlx::Error> for PlaygroundError {
    fn from(err: sqlx::Error) -> Self {
        PlaygroundError::Storage(err.to_string())
    }
}

impl From<std::io::Error> for PlaygroundError {
    fn from(err: std::io::Error) -> Self {
        PlaygroundError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for PlaygroundError {
    fn from(err: serde_json::Error) -> Self {
        PlaygroundError::Storage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PlaygroundError>;
