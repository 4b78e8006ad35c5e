//! DTOs exposed by the employee API endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    /// HTTP status code, repeated in the body.
    pub status: u16,
    /// Short failure category, e.g. `NotFound`.
    pub summary: String,
    /// Message of the underlying failure.
    pub detail: String,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Builds a response stamped with the current time.
    pub fn new(status: u16, summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            status,
            summary: summary.into(),
            detail: detail.into(),
            timestamp: Utc::now(),
        }
    }
}
