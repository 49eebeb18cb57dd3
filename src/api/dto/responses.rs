//! Response DTOs.
//!
//! Balances are decimal strings with two fractional digits and timestamps
//! are RFC 3339 strings.

use serde::{Deserialize, Serialize};

/// A customer.
///
/// # Example JSON
///
/// ```json
/// {
///     "customer_id": 1,
///     "first_name": "Anna",
///     "last_name": "Johansson",
///     "phone_number": "0712345672"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub customer_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

/// An account.
///
/// # Example JSON
///
/// ```json
/// {
///     "account_id": 1,
///     "customer_id": 1,
///     "creation_timestamp": "2025-04-13T00:00:00Z",
///     "updated_timestamp": null,
///     "status": 0,
///     "balance": "1000.00"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountResponse {
    pub account_id: i32,
    pub customer_id: i32,
    pub creation_timestamp: String,
    /// `null` until the account is first updated.
    pub updated_timestamp: Option<String>,
    /// `0` Active, `1` Frozen, `2` Closed.
    pub status: i32,
    pub balance: String,
}

/// Sum of a customer's account balances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalBalanceResponse {
    pub customer_id: i32,
    pub total_balance: String,
}
