//! Value objects for the account domain.
//!
//! Value objects have no identity of their own; they are defined by their
//! values and can only be constructed in a valid state.
//!
//! - [`CustomerId`] / [`AccountId`] - store-generated positive integer keys
//! - [`Balance`] - non-negative `NUMERIC(18,2)` amount
//! - [`Timestamp`] - UTC point in time

mod account_id;
mod balance;
mod customer_id;
mod identifier_error;
mod timestamp;

pub use account_id::AccountId;
pub use balance::{BALANCE_INTEGER_DIGITS, BALANCE_SCALE, Balance, BalanceError};
pub use customer_id::CustomerId;
pub use identifier_error::IdentifierError;
pub use timestamp::Timestamp;
