//! HTTP mapping for service errors.
//!
//! Services stay HTTP-agnostic; this is the single place where a failure
//! becomes a status code and an [`ErrorResponse`] body.

use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};

use crate::dto::api::ErrorResponse;
use crate::services::ServiceError;

impl ServiceError {
    /// Short category reported in the `summary` field.
    pub fn summary(&self) -> &'static str {
        match self {
            ServiceError::Validation(_) => "BadRequest",
            ServiceError::NotFound(_) => "NotFound",
            ServiceError::Unavailable(_) => "ServiceUnavailable",
            ServiceError::Unexpected(_) => "InternalServerError",
        }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServiceError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse::new(
            status.as_u16(),
            self.summary(),
            self.to_string(),
        ))
    }
}

/// Turns malformed JSON bodies into a `400` with the usual error body.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected body for {} {}: {err}", req.method(), req.path());
    ServiceError::Validation(format!("Invalid request body: {err}")).into()
}

/// Fallback for routes that do not exist.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    ServiceError::NotFound(format!("No route for {} {}", req.method(), req.path()))
        .error_response()
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;

    use super::*;

    async fn body_of(err: ServiceError) -> ErrorResponse {
        let response = err.error_response();
        let bytes = to_bytes(response.into_body()).await.expect("readable body");
        serde_json::from_slice(&bytes).expect("error body")
    }

    #[actix_web::test]
    async fn maps_each_variant_to_status_and_summary() {
        let cases = [
            (ServiceError::Validation("bad".into()), 400, "BadRequest"),
            (ServiceError::NotFound("gone".into()), 404, "NotFound"),
            (
                ServiceError::Unavailable("down".into()),
                503,
                "ServiceUnavailable",
            ),
            (
                ServiceError::Unexpected("boom".into()),
                500,
                "InternalServerError",
            ),
        ];

        for (err, status, summary) in cases {
            assert_eq!(err.status_code().as_u16(), status);
            let detail = err.to_string();
            let body = body_of(err).await;
            assert_eq!(body.status, status);
            assert_eq!(body.summary, summary);
            assert_eq!(body.detail, detail);
        }
    }
}
