//! Integration tests for the /api/customers endpoints.

use crate::common::*;
use axum::http::{Method, StatusCode};
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn create_customer_assigns_first_id_and_location() {
    let client = AccountApiClient::empty();

    let result = client.create_customer(&CustomerFactory::anna_eriksson()).await;

    assert_success(&result);
    let created = result.unwrap();
    assert_eq!(created.body.customer_id, 1);
    assert_eq!(created.location, "/api/customers/1");
}

#[rstest]
#[tokio::test]
async fn created_customer_round_trips_through_get() {
    let client = AccountApiClient::empty();
    let created = client
        .create_customer(&CustomerFactory::anna_eriksson())
        .await
        .unwrap();

    let fetched = client.get_customer(created.body.customer_id).await.unwrap();

    assert_eq!(fetched, created.body);
    assert_eq!(fetched.first_name, "Anna");
    assert_eq!(fetched.last_name, "Eriksson");
    assert_eq!(fetched.phone_number, "0749274942");
}

#[rstest]
#[tokio::test]
async fn list_returns_seeded_customers_in_id_order() {
    let client = AccountApiClient::seeded();

    let customers = client.list_customers().await.unwrap();

    let names: Vec<(i32, &str)> = customers
        .iter()
        .map(|customer| (customer.customer_id, customer.last_name.as_str()))
        .collect();
    assert_eq!(
        names,
        vec![(1, "Johansson"), (2, "Testsson"), (3, "Eriksson")]
    );
}

#[rstest]
#[tokio::test]
async fn list_of_empty_store_is_empty_array() {
    let client = AccountApiClient::empty();

    assert!(client.list_customers().await.unwrap().is_empty());
}

#[rstest]
#[tokio::test]
async fn get_unknown_customer_is_404() {
    let client = AccountApiClient::seeded();

    let result = client.get_customer(42).await;

    assert_api_error(&result, "NOT_FOUND", StatusCode::NOT_FOUND);
}

#[rstest]
#[case("abc")]
#[case("1.5")]
#[case("99999999999")]
#[tokio::test]
async fn textual_path_id_is_400(#[case] id: &str) {
    let client = AccountApiClient::seeded();

    let response = client
        .send_raw(Method::GET, &format!("/api/customers/{id}"), "")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["code"], "INVALID_CUSTOMER_ID");
}

#[rstest]
#[case(Method::GET, 0)]
#[case(Method::GET, -1)]
#[case(Method::DELETE, 0)]
#[case(Method::DELETE, -1)]
#[tokio::test]
async fn non_positive_path_id_is_404(#[case] method: Method, #[case] id: i32) {
    let client = AccountApiClient::seeded();

    let response = client
        .send_raw(method, &format!("/api/customers/{id}"), "")
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["code"], "NOT_FOUND");
    assert_eq!(client.list_customers().await.unwrap().len(), 3);
}

#[rstest]
#[tokio::test]
async fn non_positive_id_on_nested_routes_is_404() {
    let client = AccountApiClient::seeded();

    assert_api_error(&client.get_customer_accounts(0).await, "NOT_FOUND", StatusCode::NOT_FOUND);
    assert_api_error(&client.get_total_balance(-2).await, "NOT_FOUND", StatusCode::NOT_FOUND);
}

// =============================================================================
// Validation
// =============================================================================

#[rstest]
#[tokio::test]
async fn create_with_no_fields_reports_every_required_field() {
    let client = AccountApiClient::empty();

    let result = client.create_customer(&CustomerRequest::default()).await;

    assert_validation_failed(&result, &["first_name", "last_name", "phone_number"]);
    assert!(client.list_customers().await.unwrap().is_empty());
}

#[rstest]
#[case("A", "Eriksson", "0749274942", "first_name")]
#[case("Anna", "Eriksson!", "0749274942", "last_name")]
#[case("Anna", "Eriksson", "phone", "phone_number")]
#[case("Anna", "Eriksson", "07-49--27", "phone_number")]
#[tokio::test]
async fn create_with_malformed_field_is_rejected(
    #[case] first_name: &str,
    #[case] last_name: &str,
    #[case] phone_number: &str,
    #[case] field: &str,
) {
    let client = AccountApiClient::empty();
    let request = CustomerFactory::create_request(first_name, last_name, phone_number);

    let result = client.create_customer(&request).await;

    assert_validation_failed(&result, &[field]);
}

#[rstest]
#[tokio::test]
async fn create_accepts_names_with_punctuation_and_formatted_phone() {
    let client = AccountApiClient::empty();
    let request = CustomerFactory::create_request("Mary-Ann", "O'Brien Jr", "+46 (0)70-123 45 67");

    let result = client.create_customer(&request).await;

    assert_success(&result);
}

#[rstest]
#[tokio::test]
async fn create_rejects_name_longer_than_fifty_characters() {
    let client = AccountApiClient::empty();
    let request = CustomerFactory::create_request(&"a".repeat(51), "Eriksson", "0749274942");

    let result = client.create_customer(&request).await;

    assert_validation_failed(&result, &["first_name"]);
}

#[rstest]
#[tokio::test]
async fn malformed_json_body_is_rejected() {
    let client = AccountApiClient::empty();

    let response = client
        .send_raw(Method::POST, "/api/customers", r#"{"first_name": "Anna""#)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["code"], "INVALID_REQUEST_BODY");
}

// =============================================================================
// Update
// =============================================================================

#[rstest]
#[tokio::test]
async fn update_with_only_first_name_keeps_other_fields() {
    let client = AccountApiClient::seeded();
    let request = CustomerRequest {
        first_name: Some("Maria".to_string()),
        ..CustomerFactory::update_request(1)
    };

    let result = client.update_customer(1, &request).await;

    assert_success(&result);
    let updated = client.get_customer(1).await.unwrap();
    assert_eq!(updated.first_name, "Maria");
    assert_eq!(updated.last_name, "Johansson");
    assert_eq!(updated.phone_number, "0712345672");
}

#[rstest]
#[tokio::test]
async fn update_with_blank_fields_changes_nothing() {
    let client = AccountApiClient::seeded();
    let before = client.get_customer(2).await.unwrap();
    let request = CustomerRequest {
        first_name: Some(String::new()),
        last_name: Some("   ".to_string()),
        ..CustomerFactory::update_request(2)
    };

    client.update_customer(2, &request).await.unwrap();

    assert_eq!(client.get_customer(2).await.unwrap(), before);
}

#[rstest]
#[tokio::test]
async fn update_with_mismatched_body_id_is_rejected_regardless_of_fields() {
    let client = AccountApiClient::seeded();
    let request = CustomerRequest {
        first_name: Some("?".to_string()),
        ..CustomerFactory::update_request(2)
    };

    let result = client.update_customer(1, &request).await;

    assert_api_error(&result, "ID_MISMATCH", StatusCode::BAD_REQUEST);
}

#[rstest]
#[case(None)]
#[case(Some(0))]
#[tokio::test]
async fn update_without_body_id_fails_validation(#[case] customer_id: Option<i32>) {
    let client = AccountApiClient::seeded();
    let request = CustomerRequest {
        customer_id,
        first_name: Some("Maria".to_string()),
        ..CustomerRequest::default()
    };

    let result = client.update_customer(1, &request).await;

    assert_validation_failed(&result, &["customer_id"]);
}

#[rstest]
#[tokio::test]
async fn update_of_unknown_customer_is_404() {
    let client = AccountApiClient::seeded();
    let request = CustomerRequest {
        first_name: Some("Maria".to_string()),
        ..CustomerFactory::update_request(9)
    };

    let result = client.update_customer(9, &request).await;

    assert_api_error(&result, "NOT_FOUND", StatusCode::NOT_FOUND);
}

// =============================================================================
// Delete
// =============================================================================

#[rstest]
#[tokio::test]
async fn delete_then_get_is_404() {
    let client = AccountApiClient::seeded();

    assert_success(&client.delete_customer(2).await);

    assert_api_error(&client.get_customer(2).await, "NOT_FOUND", StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn deleting_missing_customer_is_always_404() {
    let client = AccountApiClient::seeded();

    for _ in 0..2 {
        let result = client.delete_customer(77).await;
        assert_api_error(&result, "NOT_FOUND", StatusCode::NOT_FOUND);
    }
}
