//! In-process API client for integration tests.
//!
//! Requests go through the real router with `tower::ServiceExt::oneshot`,
//! backed by an `InMemoryStore`.

use std::sync::Arc;

use account_app::api::create_router;
use account_app::infrastructure::{AppConfig, AppDependencies, InMemoryStore};
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tower::ServiceExt;

pub use account_app::api::dto::{AccountResponse, CustomerResponse, TotalBalanceResponse};
pub use account_app::api::routes::HealthResponse;

#[derive(Clone)]
pub struct AccountApiClient {
    router: Router,
}

impl AccountApiClient {
    /// A client over the seed data: three customers and account 1.
    pub fn seeded() -> Self {
        let store = InMemoryStore::seeded().expect("Failed to seed store");
        Self::with_store(store)
    }

    /// A client over an empty store.
    pub fn empty() -> Self {
        Self::with_store(InMemoryStore::new())
    }

    fn with_store(store: InMemoryStore) -> Self {
        let dependencies = AppDependencies::in_memory(AppConfig::default(), Arc::new(store));
        Self {
            router: create_router(dependencies),
        }
    }

    // Health check
    pub async fn health(&self) -> ApiResult<HealthResponse> {
        self.get("/health").await
    }

    // Customer operations
    pub async fn list_customers(&self) -> ApiResult<Vec<CustomerResponse>> {
        self.get("/api/customers").await
    }

    pub async fn get_customer(&self, customer_id: i32) -> ApiResult<CustomerResponse> {
        self.get(&format!("/api/customers/{customer_id}")).await
    }

    pub async fn create_customer(
        &self,
        request: &CustomerRequest,
    ) -> ApiResult<Created<CustomerResponse>> {
        self.post("/api/customers", request).await
    }

    pub async fn update_customer(&self, customer_id: i32, request: &CustomerRequest) -> ApiResult<()> {
        self.put(&format!("/api/customers/{customer_id}"), request)
            .await
    }

    pub async fn delete_customer(&self, customer_id: i32) -> ApiResult<()> {
        self.delete(&format!("/api/customers/{customer_id}")).await
    }

    pub async fn get_customer_accounts(&self, customer_id: i32) -> ApiResult<Vec<AccountResponse>> {
        self.get(&format!("/api/customers/{customer_id}/accounts"))
            .await
    }

    pub async fn get_total_balance(&self, customer_id: i32) -> ApiResult<TotalBalanceResponse> {
        self.get(&format!("/api/customers/{customer_id}/total-balance"))
            .await
    }

    // Account operations
    pub async fn list_accounts(&self) -> ApiResult<Vec<AccountResponse>> {
        self.get("/api/accounts").await
    }

    pub async fn get_account(&self, account_id: i32) -> ApiResult<AccountResponse> {
        self.get(&format!("/api/accounts/{account_id}")).await
    }

    pub async fn create_account(&self, request: &AccountRequest) -> ApiResult<Created<AccountResponse>> {
        self.post("/api/accounts", request).await
    }

    pub async fn update_account(&self, account_id: i32, request: &AccountRequest) -> ApiResult<()> {
        self.put(&format!("/api/accounts/{account_id}"), request)
            .await
    }

    pub async fn delete_account(&self, account_id: i32) -> ApiResult<()> {
        self.delete(&format!("/api/accounts/{account_id}")).await
    }

    /// Sends a request with a raw body, for malformed input.
    pub async fn send_raw(&self, method: Method, path: &str, body: &str) -> RawResponse {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");
        self.send(request).await
    }

    // Internal helpers
    async fn send(&self, request: Request<Body>) -> RawResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");
        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes()
            .to_vec();
        RawResponse {
            status,
            location,
            body,
        }
    }

    async fn request<R: Serialize>(&self, method: Method, path: &str, body: Option<&R>) -> RawResponse {
        let builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(body).expect("Failed to serialize"))),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");
        self.send(request).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request::<()>(Method::GET, path, None)
            .await
            .parse()
    }

    async fn post<T: DeserializeOwned, R: Serialize>(&self, path: &str, body: &R) -> ApiResult<Created<T>> {
        let response = self.request(Method::POST, path, Some(body)).await;
        let location = response.location.clone();
        response.parse().map(|body| Created {
            location: location.unwrap_or_default(),
            body,
        })
    }

    async fn put<R: Serialize>(&self, path: &str, body: &R) -> ApiResult<()> {
        self.request(Method::PUT, path, Some(body))
            .await
            .no_content()
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        self.request::<()>(Method::DELETE, path, None)
            .await
            .no_content()
    }
}

/// Status, `Location` header and body of a response.
#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("Body is not JSON")
    }

    fn parse<T: DeserializeOwned>(self) -> ApiResult<T> {
        if self.status.is_success() {
            Ok(serde_json::from_slice(&self.body).expect("Unexpected success body"))
        } else {
            Err(self.into_error())
        }
    }

    fn no_content(self) -> ApiResult<()> {
        if self.status == StatusCode::NO_CONTENT {
            assert!(self.body.is_empty(), "204 response carried a body");
            Ok(())
        } else {
            Err(self.into_error())
        }
    }

    fn into_error(self) -> ApiError {
        let error_body: ApiErrorBody =
            serde_json::from_slice(&self.body).expect("Error body is not an ApiError");
        ApiError::Api {
            status: self.status,
            code: error_body.code,
            details: error_body.details,
        }
    }
}

/// A `201 Created` response.
#[derive(Debug)]
pub struct Created<T> {
    pub location: String,
    pub body: T,
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    Api {
        status: StatusCode,
        code: String,
        details: Option<serde_json::Value>,
    },
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: String,
    details: Option<serde_json::Value>,
}

// DTO types for tests

#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<String>,
}
