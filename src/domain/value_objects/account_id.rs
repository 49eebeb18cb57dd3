//! Account ID value object.
//!
//! Accounts are keyed by a positive 32-bit integer generated by the store
//! on insertion (an identity column in PostgreSQL).

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::IdentifierError;

/// A unique identifier for a bank account.
///
/// `AccountId` is only ever assigned by the persistence layer. Values coming
/// from the outside (path segments, request bodies) go through
/// [`AccountId::create`] or [`AccountId::parse`], which reject zero and
/// negative numbers.
///
/// # Examples
///
/// ```rust
/// use account_app::domain::value_objects::AccountId;
///
/// let id = AccountId::parse("42").unwrap();
/// assert_eq!(id.value(), 42);
///
/// assert!(AccountId::parse("abc").is_err());
/// assert!(AccountId::create(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct AccountId(i32);

impl AccountId {
    /// Creates an `AccountId` from a raw integer.
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

    /// Parses an `AccountId` from its decimal string form.
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

impl FromStr for AccountId {
    type Err = IdentifierError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl From<AccountId> for i32 {
    fn from(id: AccountId) -> Self {
        id.0
    }
}
