use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Upstream request failed: {0}")]
    Transport(String),

    #[error("Upstream request timed out: {0}")]
    Timeout(String),

    #[error("Upstream returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse employee data: {0}")]
    Decode(String),

    #[error("Invalid upstream url: {0}")]
    InvalidUrl(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RepositoryError::Timeout(err.to_string())
        } else if err.is_decode() {
            RepositoryError::Decode(err.to_string())
        } else {
            RepositoryError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::Decode(err.to_string())
    }
}
