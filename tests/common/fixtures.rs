//! Test data factories for integration tests.

use super::client::{AccountRequest, CustomerRequest};

pub struct CustomerFactory;

impl CustomerFactory {
    pub fn create_request(first_name: &str, last_name: &str, phone_number: &str) -> CustomerRequest {
        CustomerRequest {
            customer_id: None,
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
            phone_number: Some(phone_number.to_string()),
        }
    }

    pub fn anna_eriksson() -> CustomerRequest {
        Self::create_request("Anna", "Eriksson", "0749274942")
    }

    /// An update that only repeats the id.
    pub fn update_request(customer_id: i32) -> CustomerRequest {
        CustomerRequest {
            customer_id: Some(customer_id),
            ..CustomerRequest::default()
        }
    }
}

pub struct AccountFactory;

impl AccountFactory {
    pub fn create_request(customer_id: i32, balance: Option<&str>) -> AccountRequest {
        AccountRequest {
            customer_id: Some(customer_id),
            balance: balance.map(str::to_string),
            ..AccountRequest::default()
        }
    }

    pub fn update_request(account_id: i32, status: Option<i32>, balance: Option<&str>) -> AccountRequest {
        AccountRequest {
            account_id: Some(account_id),
            status,
            balance: balance.map(str::to_string),
            ..AccountRequest::default()
        }
    }
}
