//! Pure conversions between DTOs and application types.

use rust_decimal::Decimal;

use crate::api::dto::requests::{
    AccountCreateRequest, AccountUpdateRequest, AmountInput, CustomerCreateRequest,
    CustomerUpdateRequest,
};
use crate::api::dto::responses::{AccountResponse, CustomerResponse, TotalBalanceResponse};
use crate::application::commands::{CreateAccount, CreateCustomer, UpdateAccount, UpdateCustomer};
use crate::domain::account::Account;
use crate::domain::customer::Customer;
use crate::domain::value_objects::CustomerId;

// =============================================================================
// Requests
// =============================================================================

#[must_use]
pub fn create_customer_command(request: CustomerCreateRequest) -> CreateCustomer {
    CreateCustomer {
        first_name: request.first_name,
        last_name: request.last_name,
        phone_number: request.phone_number,
    }
}

#[must_use]
pub fn update_customer_command(request: CustomerUpdateRequest) -> UpdateCustomer {
    UpdateCustomer {
        customer_id: request.customer_id,
        first_name: request.first_name,
        last_name: request.last_name,
        phone_number: request.phone_number,
    }
}

#[must_use]
pub fn create_account_command(request: AccountCreateRequest) -> CreateAccount {
    CreateAccount {
        customer_id: request.customer_id,
        balance: request.balance.map(AmountInput::into_text),
    }
}

#[must_use]
pub fn update_account_command(request: AccountUpdateRequest) -> UpdateAccount {
    UpdateAccount {
        account_id: request.account_id,
        status: request.status,
        balance: request.balance.map(AmountInput::into_text),
    }
}

// =============================================================================
// Responses
// =============================================================================

/// Converts a customer to its response DTO.
#[must_use]
pub fn customer_to_response(customer: &Customer) -> CustomerResponse {
    CustomerResponse {
        customer_id: customer.id.value(),
        first_name: customer.first_name.clone(),
        last_name: customer.last_name.clone(),
        phone_number: customer.phone_number.clone(),
    }
}

/// Converts an account to its response DTO.
///
/// The status is written as its integer code and the balance with two
/// fractional digits.
#[must_use]
pub fn account_to_response(account: &Account) -> AccountResponse {
    AccountResponse {
        account_id: account.id.value(),
        customer_id: account.customer_id.value(),
        creation_timestamp: account.creation_timestamp.to_string(),
        updated_timestamp: account.updated_timestamp.map(|timestamp| timestamp.to_string()),
        status: account.status.code(),
        balance: account.balance.to_string(),
    }
}

/// Builds the total balance DTO, always with two fractional digits.
#[must_use]
pub fn total_balance_to_response(customer_id: CustomerId, total: Decimal) -> TotalBalanceResponse {
    let mut total = total;
    total.rescale(2);
    TotalBalanceResponse {
        customer_id: customer_id.value(),
        total_balance: total.to_string(),
    }
}
