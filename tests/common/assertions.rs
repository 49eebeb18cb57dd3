//! Custom assertion helpers for integration tests.

use super::client::{ApiError, ApiResult};
use axum::http::StatusCode;

pub fn assert_api_error<T: std::fmt::Debug>(
    result: &ApiResult<T>,
    expected_code: &str,
    expected_status: StatusCode,
) {
    match result {
        Err(ApiError::Api { status, code, .. }) => {
            assert_eq!(
                *status, expected_status,
                "Expected status {expected_status}, got {status}"
            );
            assert_eq!(
                code, expected_code,
                "Expected error code '{expected_code}', got '{code}'"
            );
        }
        Ok(v) => {
            panic!("Expected API error '{expected_code}', got success: {v:?}");
        }
    }
}

/// Asserts a `VALIDATION_FAILED` response that names every field in `fields`.
pub fn assert_validation_failed<T: std::fmt::Debug>(result: &ApiResult<T>, fields: &[&str]) {
    assert_api_error(result, "VALIDATION_FAILED", StatusCode::BAD_REQUEST);
    let Err(ApiError::Api {
        details: Some(details),
        ..
    }) = result
    else {
        panic!("Validation error without details: {result:?}");
    };
    for field in fields {
        assert!(
            details["errors"][field].is_array(),
            "Expected an error for '{field}', got {details}"
        );
    }
}

pub fn assert_success<T: std::fmt::Debug>(result: &ApiResult<T>) {
    assert!(result.is_ok(), "Expected success, got error: {result:?}");
}

/// Parses an RFC 3339 timestamp from a response body.
pub fn parse_time(value: &str) -> chrono::DateTime<chrono::FixedOffset> {
    chrono::DateTime::parse_from_rfc3339(value).expect("Not an RFC 3339 timestamp")
}
