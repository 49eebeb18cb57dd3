//! API error types and the conversion of service errors into HTTP responses.
//!
//! # Examples
//!
//! ```rust,ignore
//! use account_app::api::middleware::error_handler::service_error_to_api_error;
//! use account_app::application::ServiceError;
//!
//! let (status, api_error) = service_error_to_api_error(ServiceError::customer_not_found(id));
//! // status == StatusCode::NOT_FOUND
//! ```

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::errors::{EntityKind, ServiceError};
use crate::domain::value_objects::IdentifierError;

/// API error response body.
///
/// # Example JSON
///
/// ```json
/// {
///     "code": "NOT_FOUND",
///     "message": "Customer 7 not found",
///     "details": {
///         "entity": "Customer",
///         "id": 7
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    /// A machine-readable error code.
    pub code: String,
    /// A human-readable error message.
    pub message: String,
    /// Optional additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Creates a new `ApiError` without details.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new `ApiError` with details.
    #[must_use]
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

/// Response wrapper that includes HTTP status code with `ApiError`.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    pub status: StatusCode,
    pub error: ApiError,
}

impl ApiErrorResponse {
    #[must_use]
    pub const fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<ServiceError> for ApiErrorResponse {
    fn from(error: ServiceError) -> Self {
        if !error.is_client_error() {
            tracing::error!(error = %error, "Request failed in the store");
        }
        let (status, api_error) = service_error_to_api_error(error);
        Self::new(status, api_error)
    }
}

// =============================================================================
// Error Conversion Functions (Pure Functions)
// =============================================================================

/// Converts a service error to an HTTP status and error body.
///
/// | Service Error | HTTP Status | Error Code |
/// |---------------|-------------|------------|
/// | ValidationFailed | 400 | VALIDATION_FAILED |
/// | IdMismatch | 400 | ID_MISMATCH |
/// | CustomerNotFound | 400 | CUSTOMER_DOES_NOT_EXIST |
/// | NotFound | 404 | NOT_FOUND |
/// | Repository | 500 | REPOSITORY_ERROR |
///
/// Store failures carry no details; the cause is only logged.
#[must_use]
pub fn service_error_to_api_error(error: ServiceError) -> (StatusCode, ApiError) {
    let message = error.to_string();
    match error {
        ServiceError::ValidationFailed(errors) => (
            StatusCode::BAD_REQUEST,
            ApiError::with_details(
                "VALIDATION_FAILED",
                "One or more fields are invalid",
                serde_json::json!({ "errors": errors.to_field_map() }),
            ),
        ),
        ServiceError::IdMismatch {
            path_id, body_id, ..
        } => (
            StatusCode::BAD_REQUEST,
            ApiError::with_details(
                "ID_MISMATCH",
                message,
                serde_json::json!({
                    "path_id": path_id,
                    "body_id": body_id
                }),
            ),
        ),
        ServiceError::CustomerNotFound(customer_id) => (
            StatusCode::BAD_REQUEST,
            ApiError::with_details(
                "CUSTOMER_DOES_NOT_EXIST",
                message,
                serde_json::json!({ "customer_id": customer_id.value() }),
            ),
        ),
        ServiceError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            ApiError::with_details(
                "NOT_FOUND",
                message,
                serde_json::json!({
                    "entity": entity.as_str(),
                    "id": id
                }),
            ),
        ),
        ServiceError::Repository(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::new("REPOSITORY_ERROR", "The request could not be completed"),
        ),
    }
}

/// Converts a non-integer path id to a 400 response.
#[must_use]
pub fn identifier_error_to_api_error(
    entity: EntityKind,
    error: &IdentifierError,
) -> (StatusCode, ApiError) {
    let code = match entity {
        EntityKind::Customer => "INVALID_CUSTOMER_ID",
        EntityKind::Account => "INVALID_ACCOUNT_ID",
    };
    (
        StatusCode::BAD_REQUEST,
        ApiError::with_details(
            code,
            format!("The provided {} ID is not an integer", entity.as_str().to_lowercase()),
            serde_json::json!({ "reason": error.to_string() }),
        ),
    )
}

/// Converts a rejected JSON body, keeping axum's status code.
#[must_use]
pub fn json_rejection_to_api_error(rejection: &JsonRejection) -> (StatusCode, ApiError) {
    (
        rejection.status(),
        ApiError::new("INVALID_REQUEST_BODY", rejection.body_text()),
    )
}
