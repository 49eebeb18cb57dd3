//! Errors raised by the identifier smart constructors.

use thiserror::Error;

/// Validation errors for [`CustomerId`](super::CustomerId) and
/// [`AccountId`](super::AccountId).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// The provided string is not an integer that fits in 32 bits.
    #[error("Invalid identifier format: {0}")]
    InvalidFormat(String),
    /// The identifier is zero or negative.
    #[error("Identifier must be positive, got {0}")]
    NotPositive(i32),
}
