//! Customer HTTP handlers.
//!
//! - `GET /api/customers` - List customers
//! - `GET /api/customers/{id}` - Get a customer
//! - `POST /api/customers` - Create a customer
//! - `PUT /api/customers/{id}` - Update a customer
//! - `DELETE /api/customers/{id}` - Delete a customer and its accounts
//! - `GET /api/customers/{id}/accounts` - List the customer's accounts
//! - `GET /api/customers/{id}/total-balance` - Sum of the customer's balances
//!
//! Handlers follow the same pipeline:
//!
//! ```text
//! Request → Parse → Transform → Execute → Transform → Response
//! ```

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::{HeaderName, LOCATION};

use crate::api::dto::requests::{CustomerCreateRequest, CustomerUpdateRequest};
use crate::api::dto::responses::{AccountResponse, CustomerResponse, TotalBalanceResponse};
use crate::api::dto::transformers::{
    account_to_response, create_customer_command, customer_to_response,
    total_balance_to_response, update_customer_command,
};
use crate::api::handlers::pipeline::{json_body, parse_customer_id_for_api, resource_location};
use crate::api::middleware::error_handler::ApiErrorResponse;
use crate::application::services::{account as account_service, customer as customer_service};
use crate::infrastructure::AppDependencies;

/// GET /api/customers - List all customers ordered by id.
///
/// # Errors
///
/// Returns a 500 response if the store fails.
pub async fn list_customers(
    State(dependencies): State<AppDependencies>,
) -> Result<Json<Vec<CustomerResponse>>, ApiErrorResponse> {
    let customers = customer_service::list_customers(dependencies.customers()).await?;
    Ok(Json(customers.iter().map(customer_to_response).collect()))
}

/// GET /api/customers/{id} - Get one customer.
///
/// # Errors
///
/// - `400 Bad Request` - The id is not a positive integer
/// - `404 Not Found` - No such customer
pub async fn get_customer(
    State(dependencies): State<AppDependencies>,
    Path(id): Path<String>,
) -> Result<Json<CustomerResponse>, ApiErrorResponse> {
    let customer_id = parse_customer_id_for_api(&id)?;
    let customer = customer_service::get_customer(dependencies.customers(), customer_id).await?;
    Ok(Json(customer_to_response(&customer)))
}

/// POST /api/customers - Create a customer.
///
/// # Request Body
///
/// ```json
/// {
///     "first_name": "Anna",
///     "last_name": "Eriksson",
///     "phone_number": "0749274942"
/// }
/// ```
///
/// # Response
///
/// - `201 Created` - With a `Location` header and the created customer
///
/// # Errors
///
/// - `400 Bad Request` - `VALIDATION_FAILED` with the field errors
pub async fn create_customer(
    State(dependencies): State<AppDependencies>,
    payload: Result<Json<CustomerCreateRequest>, JsonRejection>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<CustomerResponse>), ApiErrorResponse> {
    let command = create_customer_command(json_body(payload)?);

    let customer = customer_service::create_customer(dependencies.customers(), &command).await?;

    Ok((
        StatusCode::CREATED,
        [(LOCATION, resource_location("customers", customer.id.value()))],
        Json(customer_to_response(&customer)),
    ))
}

/// PUT /api/customers/{id} - Update a customer.
///
/// The body must repeat the path id in `customer_id`. Absent or blank fields
/// keep their stored value.
///
/// # Errors
///
/// - `400 Bad Request` - `ID_MISMATCH` or `VALIDATION_FAILED`
/// - `404 Not Found` - No such customer
pub async fn update_customer(
    State(dependencies): State<AppDependencies>,
    Path(id): Path<String>,
    payload: Result<Json<CustomerUpdateRequest>, JsonRejection>,
) -> Result<StatusCode, ApiErrorResponse> {
    let customer_id = parse_customer_id_for_api(&id)?;
    let command = update_customer_command(json_body(payload)?);

    customer_service::update_customer(dependencies.customers(), customer_id, &command).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/customers/{id} - Delete a customer together with its accounts.
///
/// # Errors
///
/// - `404 Not Found` - No such customer
pub async fn delete_customer(
    State(dependencies): State<AppDependencies>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiErrorResponse> {
    let customer_id = parse_customer_id_for_api(&id)?;

    customer_service::delete_customer(dependencies.customers(), customer_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/customers/{id}/accounts - The customer's accounts, oldest first.
///
/// # Errors
///
/// - `404 Not Found` - No such customer
pub async fn get_customer_accounts(
    State(dependencies): State<AppDependencies>,
    Path(id): Path<String>,
) -> Result<Json<Vec<AccountResponse>>, ApiErrorResponse> {
    let customer_id = parse_customer_id_for_api(&id)?;

    let accounts =
        account_service::list_accounts_for_customer(dependencies.customers(), customer_id).await?;

    Ok(Json(accounts.iter().map(account_to_response).collect()))
}

/// GET /api/customers/{id}/total-balance - Sum of the customer's balances.
///
/// # Example Response
///
/// ```json
/// {
///     "customer_id": 1,
///     "total_balance": "3000.00"
/// }
/// ```
///
/// # Errors
///
/// - `404 Not Found` - No such customer
pub async fn get_customer_total_balance(
    State(dependencies): State<AppDependencies>,
    Path(id): Path<String>,
) -> Result<Json<TotalBalanceResponse>, ApiErrorResponse> {
    let customer_id = parse_customer_id_for_api(&id)?;

    let total =
        account_service::total_balance_for_customer(dependencies.customers(), customer_id).await?;

    Ok(Json(total_balance_to_response(customer_id, total)))
}
