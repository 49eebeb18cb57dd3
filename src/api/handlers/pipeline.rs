//! Small pure steps shared by the handlers.
//!
//! Each step turns one piece of raw request data into a typed value or an
//! `ApiErrorResponse`, so handlers read as a chain of `?`.

use axum::Json;
use axum::extract::rejection::JsonRejection;

use crate::api::middleware::error_handler::{
    ApiErrorResponse, identifier_error_to_api_error, json_rejection_to_api_error,
};
use crate::application::errors::{EntityKind, ServiceError};
use crate::domain::value_objects::{AccountId, CustomerId, IdentifierError};

// =============================================================================
// Path ID Parsing
// =============================================================================

/// Parses a customer id path segment.
///
/// # Errors
///
/// Returns a 400 `INVALID_CUSTOMER_ID` response unless the segment is a
/// 32-bit integer, and a 404 `NOT_FOUND` response when that integer is not
/// positive.
pub fn parse_customer_id_for_api(id_string: &str) -> Result<CustomerId, ApiErrorResponse> {
    CustomerId::parse(id_string).map_err(|error| path_id_error(EntityKind::Customer, &error))
}

/// Parses an account id path segment.
///
/// # Errors
///
/// Returns a 400 `INVALID_ACCOUNT_ID` response unless the segment is a
/// 32-bit integer, and a 404 `NOT_FOUND` response when that integer is not
/// positive.
pub fn parse_account_id_for_api(id_string: &str) -> Result<AccountId, ApiErrorResponse> {
    AccountId::parse(id_string).map_err(|error| path_id_error(EntityKind::Account, &error))
}

/// No entity is ever stored under a non-positive id.
fn path_id_error(entity: EntityKind, error: &IdentifierError) -> ApiErrorResponse {
    match error {
        IdentifierError::NotPositive(id) => {
            tracing::debug!(entity = %entity, id, "Non-positive path id");
            ApiErrorResponse::from(ServiceError::NotFound { entity, id: *id })
        }
        IdentifierError::InvalidFormat(_) => {
            let (status, api_error) = identifier_error_to_api_error(entity, error);
            ApiErrorResponse::new(status, api_error)
        }
    }
}

// =============================================================================
// Body Extraction
// =============================================================================

/// Unwraps an extracted JSON body.
///
/// # Errors
///
/// Returns an `INVALID_REQUEST_BODY` response with axum's status for the
/// rejection (400 for malformed JSON, 415 for a missing content type, 422 for
/// mistyped fields).
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiErrorResponse> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        tracing::debug!(rejection = %rejection.body_text(), "Rejected request body");
        let (status, api_error) = json_rejection_to_api_error(&rejection);
        ApiErrorResponse::new(status, api_error)
    })
}

/// Location of a newly created resource.
#[must_use]
pub fn resource_location(collection: &str, id: i32) -> String {
    format!("/api/{collection}/{id}")
}
