use thiserror::Error;

/// Failure taxonomy shared by every employee operation.
///
/// Each variant carries the message shown to the caller as the error detail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unavailable(String),

    #[error("{0}")]
    Unexpected(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
