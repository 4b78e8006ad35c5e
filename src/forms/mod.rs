//! Request bodies accepted by the employee routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod employee;

#[derive(Debug, Error)]
/// Errors that can occur when processing request data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Employee cannot be null")]
    MissingEmployee,

    /// First violated constraint, in field priority order.
    #[error("{0}")]
    Invalid(String),
}
