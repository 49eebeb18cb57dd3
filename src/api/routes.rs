//! Route configuration.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | /api/customers | `list_customers` |
//! | POST | /api/customers | `create_customer` |
//! | GET | /api/customers/{id} | `get_customer` |
//! | PUT | /api/customers/{id} | `update_customer` |
//! | DELETE | /api/customers/{id} | `delete_customer` |
//! | GET | /api/customers/{id}/accounts | `get_customer_accounts` |
//! | GET | /api/customers/{id}/total-balance | `get_customer_total_balance` |
//! | GET | /api/accounts | `list_accounts` |
//! | POST | /api/accounts | `create_account` |
//! | GET | /api/accounts/{id} | `get_account` |
//! | PUT | /api/accounts/{id} | `update_account` |
//! | DELETE | /api/accounts/{id} | `delete_account` |
//! | GET | /health | `health_check` |

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::api::handlers::{
    create_account, create_customer, delete_account, delete_customer, get_account, get_customer,
    get_customer_accounts, get_customer_total_balance, list_accounts, list_customers,
    update_account, update_customer,
};
use crate::infrastructure::AppDependencies;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status ("healthy").
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// GET /health - Health check endpoint.
///
/// # Example Response
///
/// ```json
/// {
///     "status": "healthy",
///     "version": "0.1.0"
/// }
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check(
    State(_dependencies): State<AppDependencies>,
) -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    (StatusCode::OK, Json(response))
}

/// Creates the router with every API route.
///
/// # Example
///
/// ```rust,ignore
/// use account_app::api::create_router;
///
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
/// axum::serve(listener, create_router(dependencies)).await?;
/// ```
pub fn create_router(dependencies: AppDependencies) -> Router {
    Router::new()
        // Customer routes
        .route("/api/customers", get(list_customers).post(create_customer))
        .route(
            "/api/customers/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .route("/api/customers/{id}/accounts", get(get_customer_accounts))
        .route(
            "/api/customers/{id}/total-balance",
            get(get_customer_total_balance),
        )
        // Account routes
        .route("/api/accounts", get(list_accounts).post(create_account))
        .route(
            "/api/accounts/{id}",
            get(get_account).put(update_account).delete(delete_account),
        )
        // Health check
        .route("/health", get(health_check))
        .with_state(dependencies)
}
