//! HTTP handlers.
//!
//! Handlers parse path ids and bodies with the steps in [`pipeline`], call a
//! service operation and convert the result to a response DTO. Service errors
//! become responses through `From<ServiceError> for ApiErrorResponse`.

pub mod account;
pub mod customer;
pub mod pipeline;

pub use account::{create_account, delete_account, get_account, list_accounts, update_account};
pub use customer::{
    create_customer, delete_customer, get_customer, get_customer_accounts,
    get_customer_total_balance, list_customers, update_customer,
};
