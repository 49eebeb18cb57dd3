//! Data Transfer Objects for the API layer.
//!
//! DTOs are kept separate from the domain types; the conversions in
//! [`transformers`] are pure functions.

pub mod requests;
pub mod responses;
pub mod transformers;

pub use requests::{
    AccountCreateRequest, AccountUpdateRequest, AmountInput, CustomerCreateRequest,
    CustomerUpdateRequest,
};
pub use responses::{AccountResponse, CustomerResponse, TotalBalanceResponse};
pub use transformers::{
    account_to_response, create_account_command, create_customer_command, customer_to_response,
    total_balance_to_response, update_account_command, update_customer_command,
};
