//! Error conversion glue between the domain, form and service layers.
//!
//! The domain layer must not depend on service error types, so the
//! conversions used by the `server` feature live here.

use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        match val {
            FormError::MissingEmployee | FormError::Invalid(_) => {
                ServiceError::Validation(val.to_string())
            }
            // Violations on a field without a reporting rule.
            FormError::Validation(_) => ServiceError::Unexpected(val.to_string()),
        }
    }
}
