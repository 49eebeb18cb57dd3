//! Middleware components for the API layer.

pub mod error_handler;

pub use error_handler::{ApiError, ApiErrorResponse, service_error_to_api_error};
