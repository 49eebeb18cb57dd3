//! Unvalidated inputs of the create and update operations.
//!
//! Every field is optional so a missing value can be reported as a field
//! error by the validators rather than rejected earlier. Ids are raw
//! integers and balances raw strings for the same reason.

/// Input for creating a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateCustomer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
}

/// Input for updating a customer.
///
/// `customer_id` must repeat the id of the customer being updated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateCustomer {
    pub customer_id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
}

/// Input for creating an account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateAccount {
    pub customer_id: Option<i32>,
    pub balance: Option<String>,
}

/// Input for updating an account.
///
/// `account_id` must repeat the id of the account being updated. `status` is
/// the raw integer code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateAccount {
    pub account_id: Option<i32>,
    pub status: Option<i64>,
    pub balance: Option<String>,
}
