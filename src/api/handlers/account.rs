//! Account HTTP handlers.
//!
//! - `GET /api/accounts` - List accounts
//! - `GET /api/accounts/{id}` - Get an account
//! - `POST /api/accounts` - Open an account for an existing customer
//! - `PUT /api/accounts/{id}` - Change status and/or balance
//! - `DELETE /api/accounts/{id}` - Delete an account
//!
//! The request time is read here, at the IO boundary, and handed to the
//! services.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::{HeaderName, LOCATION};

use crate::api::dto::requests::{AccountCreateRequest, AccountUpdateRequest};
use crate::api::dto::responses::AccountResponse;
use crate::api::dto::transformers::{
    account_to_response, create_account_command, update_account_command,
};
use crate::api::handlers::pipeline::{json_body, parse_account_id_for_api, resource_location};
use crate::api::middleware::error_handler::ApiErrorResponse;
use crate::application::services::account as account_service;
use crate::domain::value_objects::Timestamp;
use crate::infrastructure::AppDependencies;

/// GET /api/accounts - List all accounts ordered by id.
///
/// # Errors
///
/// Returns a 500 response if the store fails.
pub async fn list_accounts(
    State(dependencies): State<AppDependencies>,
) -> Result<Json<Vec<AccountResponse>>, ApiErrorResponse> {
    let accounts = account_service::list_accounts(dependencies.accounts()).await?;
    Ok(Json(accounts.iter().map(account_to_response).collect()))
}

/// GET /api/accounts/{id} - Get one account.
///
/// # Errors
///
/// - `400 Bad Request` - The id is not a positive integer
/// - `404 Not Found` - No such account
pub async fn get_account(
    State(dependencies): State<AppDependencies>,
    Path(id): Path<String>,
) -> Result<Json<AccountResponse>, ApiErrorResponse> {
    let account_id = parse_account_id_for_api(&id)?;
    let account = account_service::get_account(dependencies.accounts(), account_id).await?;
    Ok(Json(account_to_response(&account)))
}

/// POST /api/accounts - Open an account.
///
/// # Request Body
///
/// ```json
/// {
///     "customer_id": 1,
///     "balance": "1000.00"
/// }
/// ```
///
/// # Response
///
/// - `201 Created` - With a `Location` header and the new account, which is
///   `Active` and has a zero balance when none was given
///
/// # Errors
///
/// - `400 Bad Request` - `VALIDATION_FAILED` or `CUSTOMER_DOES_NOT_EXIST`
pub async fn create_account(
    State(dependencies): State<AppDependencies>,
    payload: Result<Json<AccountCreateRequest>, JsonRejection>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<AccountResponse>), ApiErrorResponse> {
    let command = create_account_command(json_body(payload)?);

    let account = account_service::create_account(
        dependencies.customers(),
        dependencies.accounts(),
        &command,
        Timestamp::now(),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        [(LOCATION, resource_location("accounts", account.id.value()))],
        Json(account_to_response(&account)),
    ))
}

/// PUT /api/accounts/{id} - Change an account's status and/or balance.
///
/// The body must repeat the path id in `account_id`.
///
/// # Errors
///
/// - `400 Bad Request` - `ID_MISMATCH` or `VALIDATION_FAILED`
/// - `404 Not Found` - No such account
pub async fn update_account(
    State(dependencies): State<AppDependencies>,
    Path(id): Path<String>,
    payload: Result<Json<AccountUpdateRequest>, JsonRejection>,
) -> Result<StatusCode, ApiErrorResponse> {
    let account_id = parse_account_id_for_api(&id)?;
    let command = update_account_command(json_body(payload)?);

    account_service::update_account(
        dependencies.accounts(),
        account_id,
        &command,
        Timestamp::now(),
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/accounts/{id} - Delete an account.
///
/// # Errors
///
/// - `404 Not Found` - No such account
pub async fn delete_account(
    State(dependencies): State<AppDependencies>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiErrorResponse> {
    let account_id = parse_account_id_for_api(&id)?;

    account_service::delete_account(dependencies.accounts(), account_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
