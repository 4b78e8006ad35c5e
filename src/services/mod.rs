pub mod employees;
pub mod errors;

pub use errors::{ServiceError, ServiceResult};
