//! Integration tests for the /api/accounts endpoints.

use crate::common::*;
use axum::http::{Method, StatusCode};
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn seeded_account_is_returned() {
    let client = AccountApiClient::seeded();

    let account = client.get_account(1).await.unwrap();

    assert_eq!(account.customer_id, 1);
    assert_eq!(account.status, 0);
    assert_eq!(account.balance, "1000.00");
    assert_eq!(account.creation_timestamp, "2025-04-13T00:00:00Z");
    assert_eq!(account.updated_timestamp, None);
}

#[rstest]
#[case(Some("2000.5"), "2000.50")]
#[case(Some("0.005"), "0.01")]
#[case(None, "0.00")]
#[tokio::test]
async fn create_account_is_active_with_given_or_zero_balance(
    #[case] balance: Option<&str>,
    #[case] expected: &str,
) {
    let client = AccountApiClient::seeded();

    let result = client
        .create_account(&AccountFactory::create_request(2, balance))
        .await;

    assert_success(&result);
    let created = result.unwrap();
    assert_eq!(created.body.account_id, 2);
    assert_eq!(created.location, "/api/accounts/2");
    assert_eq!(created.body.customer_id, 2);
    assert_eq!(created.body.status, 0);
    assert_eq!(created.body.balance, expected);
    assert_eq!(created.body.updated_timestamp, None);
    assert_eq!(client.get_account(2).await.unwrap(), created.body);
}

#[rstest]
#[tokio::test]
async fn create_for_unknown_customer_is_rejected_and_persists_nothing() {
    let client = AccountApiClient::seeded();

    let result = client
        .create_account(&AccountFactory::create_request(99, Some("10")))
        .await;

    assert_api_error(&result, "CUSTOMER_DOES_NOT_EXIST", StatusCode::BAD_REQUEST);
    assert_eq!(client.list_accounts().await.unwrap().len(), 1);
}

#[rstest]
#[case(AccountRequest::default(), &["customer_id"])]
#[case(AccountFactory::create_request(1, Some("-5")), &["balance"])]
#[case(AccountFactory::create_request(1, Some("ten")), &["balance"])]
#[case(AccountFactory::create_request(1, Some("12345678901234567")), &["balance"])]
#[case(AccountFactory::create_request(-1, Some("abc")), &["customer_id", "balance"])]
#[tokio::test]
async fn create_with_malformed_fields_fails_validation(
    #[case] request: AccountRequest,
    #[case] fields: &[&str],
) {
    let client = AccountApiClient::seeded();

    let result = client.create_account(&request).await;

    assert_validation_failed(&result, fields);
}

#[rstest]
#[case(r#"{"customer_id": 2, "balance": 1000.00}"#, "1000.00")]
#[case(r#"{"customer_id": 2, "balance": 250}"#, "250.00")]
#[case(r#"{"customer_id": 2, "balance": 0.005}"#, "0.01")]
#[tokio::test]
async fn create_accepts_numeric_balance(#[case] body: &str, #[case] expected: &str) {
    let client = AccountApiClient::seeded();

    let response = client.send_raw(Method::POST, "/api/accounts", body).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.json()["balance"], expected);
}

#[rstest]
#[case(r#"{"customer_id": 2, "balance": -5}"#)]
#[case(r#"{"customer_id": 2, "balance": 1e20}"#)]
#[tokio::test]
async fn create_with_out_of_range_numeric_balance_fails_validation(#[case] body: &str) {
    let client = AccountApiClient::seeded();

    let response = client.send_raw(Method::POST, "/api/accounts", body).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let json = response.json();
    assert_eq!(json["code"], "VALIDATION_FAILED");
    assert!(json["details"]["errors"]["balance"].is_array());
}

#[rstest]
#[tokio::test]
async fn status_beyond_i32_fails_validation() {
    let client = AccountApiClient::seeded();
    let before = client.get_account(1).await.unwrap();

    let response = client
        .send_raw(
            Method::PUT,
            "/api/accounts/1",
            r#"{"account_id": 1, "status": 4294967296}"#,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let json = response.json();
    assert_eq!(json["code"], "VALIDATION_FAILED");
    assert!(json["details"]["errors"]["status"].is_array());
    assert_eq!(client.get_account(1).await.unwrap(), before);
}

#[rstest]
#[tokio::test]
async fn textual_status_is_rejected_as_malformed_body() {
    let client = AccountApiClient::seeded();

    let response = client
        .send_raw(
            Method::PUT,
            "/api/accounts/1",
            r#"{"account_id": 1, "status": "Frozen"}"#,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json()["code"], "INVALID_REQUEST_BODY");
}

// =============================================================================
// Update
// =============================================================================

#[rstest]
#[tokio::test]
async fn balance_only_update_keeps_status_and_sets_update_time() {
    let client = AccountApiClient::seeded();
    client
        .update_account(1, &AccountFactory::update_request(1, Some(1), None))
        .await
        .unwrap();
    let frozen = client.get_account(1).await.unwrap();

    client
        .update_account(1, &AccountFactory::update_request(1, None, Some("250")))
        .await
        .unwrap();

    let updated = client.get_account(1).await.unwrap();
    assert_eq!(updated.status, 1);
    assert_eq!(updated.balance, "250.00");
    assert!(
        parse_time(updated.updated_timestamp.as_deref().unwrap())
            >= parse_time(frozen.updated_timestamp.as_deref().unwrap())
    );
    assert_eq!(updated.creation_timestamp, frozen.creation_timestamp);
}

#[rstest]
#[tokio::test]
async fn closed_account_can_be_reactivated() {
    let client = AccountApiClient::seeded();

    for status in [2, 0] {
        client
            .update_account(1, &AccountFactory::update_request(1, Some(status), None))
            .await
            .unwrap();
    }

    assert_eq!(client.get_account(1).await.unwrap().status, 0);
}

#[rstest]
#[case(99)]
#[case(-1)]
#[case(3)]
#[tokio::test]
async fn out_of_range_status_fails_and_leaves_account_unchanged(#[case] status: i32) {
    let client = AccountApiClient::seeded();
    let before = client.get_account(1).await.unwrap();

    let result = client
        .update_account(1, &AccountFactory::update_request(1, Some(status), None))
        .await;

    assert_validation_failed(&result, &["status"]);
    assert_eq!(client.get_account(1).await.unwrap(), before);
}

#[rstest]
#[tokio::test]
async fn update_with_mismatched_body_id_is_rejected() {
    let client = AccountApiClient::seeded();

    let result = client
        .update_account(1, &AccountFactory::update_request(2, Some(99), None))
        .await;

    assert_api_error(&result, "ID_MISMATCH", StatusCode::BAD_REQUEST);
}

#[rstest]
#[tokio::test]
async fn update_of_unknown_account_is_404() {
    let client = AccountApiClient::seeded();

    let result = client
        .update_account(5, &AccountFactory::update_request(5, Some(1), None))
        .await;

    assert_api_error(&result, "NOT_FOUND", StatusCode::NOT_FOUND);
}

// =============================================================================
// Delete
// =============================================================================

#[rstest]
#[tokio::test]
async fn delete_account_then_again_is_404() {
    let client = AccountApiClient::seeded();

    assert_success(&client.delete_account(1).await);

    assert_api_error(&client.delete_account(1).await, "NOT_FOUND", StatusCode::NOT_FOUND);
    assert_api_error(&client.get_account(1).await, "NOT_FOUND", StatusCode::NOT_FOUND);
}

#[rstest]
#[case(0)]
#[case(-1)]
#[tokio::test]
async fn deleting_non_positive_account_id_is_404(#[case] id: i32) {
    let client = AccountApiClient::seeded();

    assert_api_error(&client.delete_account(id).await, "NOT_FOUND", StatusCode::NOT_FOUND);
    assert_eq!(client.list_accounts().await.unwrap().len(), 1);
}

#[rstest]
#[tokio::test]
async fn invalid_account_path_id_is_400() {
    let client = AccountApiClient::seeded();

    let response = client.send_raw(Method::DELETE, "/api/accounts/x1", "").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["code"], "INVALID_ACCOUNT_ID");
}
