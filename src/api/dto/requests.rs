//! Request DTOs.
//!
//! Every field is optional so that a missing value surfaces as a field error
//! from validation instead of a deserialization failure. Balances may be sent
//! as decimal strings or as JSON numbers; both are handed to validation as
//! text.

use serde::Deserialize;

/// A balance as it appears on the wire.
///
/// Strings are kept verbatim so a non-numeric value is reported by
/// validation rather than rejected as a malformed body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Text(String),
    Number(serde_json::Number),
}

impl AmountInput {
    /// Returns the amount in its textual form.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

/// Request body of `POST /api/customers`.
///
/// # Example JSON
///
/// ```json
/// {
///     "first_name": "Anna",
///     "last_name": "Eriksson",
///     "phone_number": "0749274942"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CustomerCreateRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
}

/// Request body of `PUT /api/customers/{id}`.
///
/// `customer_id` must repeat the id in the path. Absent or blank name and
/// phone fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CustomerUpdateRequest {
    pub customer_id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
}

/// Request body of `POST /api/accounts`.
///
/// # Example JSON
///
/// ```json
/// {
///     "customer_id": 1,
///     "balance": "1000.00"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AccountCreateRequest {
    pub customer_id: Option<i32>,
    pub balance: Option<AmountInput>,
}

/// Request body of `PUT /api/accounts/{id}`.
///
/// `status` is the integer code: `0` Active, `1` Frozen, `2` Closed. It is
/// read as an `i64` so that any out-of-range integer reaches validation.
///
/// # Example JSON
///
/// ```json
/// {
///     "account_id": 1,
///     "status": 1
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AccountUpdateRequest {
    pub account_id: Option<i32>,
    pub status: Option<i64>,
    pub balance: Option<AmountInput>,
}
