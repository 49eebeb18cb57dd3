//! Customer ID value object.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::IdentifierError;

/// A unique identifier for a customer.
///
/// Like [`AccountId`](super::AccountId), it wraps a positive integer
/// generated by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CustomerId(i32);

impl CustomerId {
    /// Creates a `CustomerId` from a raw integer.
    ///
    /// # Errors
    ///
    /// Returns `IdentifierError::NotPositive` if `value` is zero or negative.
    pub const fn create(value: i32) -> Result<Self, IdentifierError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(IdentifierError::NotPositive(value))
        }
    }

    /// Parses a `CustomerId` from its decimal string form.
    ///
    /// # Errors
    ///
    /// Returns `IdentifierError::InvalidFormat` if the string is not an
    /// integer, or `IdentifierError::NotPositive` if it is not positive.
    pub fn parse(value: &str) -> Result<Self, IdentifierError> {
        let raw = value
            .trim()
            .parse::<i32>()
            .map_err(|_| IdentifierError::InvalidFormat(value.to_string()))?;
        Self::create(raw)
    }

    /// Returns the underlying integer.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl FromStr for CustomerId {
    type Err = IdentifierError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl From<CustomerId> for i32 {
    fn from(id: CustomerId) -> Self {
        id.0
    }
}
