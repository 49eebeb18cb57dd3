//! Account entity for the account domain.
//!
//! An `Account` always belongs to exactly one customer. Its creation time is
//! fixed when it is first stored, and its update time stays empty until the
//! first successful update.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::domain::value_objects::{AccountId, Balance, CustomerId, Timestamp};

/// The status of a bank account.
///
/// The numeric codes are what clients send and receive, so they must never
/// be renumbered. Any status may be changed to any other; no transition
/// graph is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AccountStatus {
    /// The account is active.
    Active,
    /// The account is frozen.
    Frozen,
    /// The account is closed.
    Closed,
}

/// Error for integers that do not name an [`AccountStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unknown account status code: {0}")]
pub struct UnknownStatusCode(pub i32);

impl AccountStatus {
    /// Every status, in code order.
    pub const ALL: [Self; 3] = [Self::Active, Self::Frozen, Self::Closed];

    /// Returns the integer code used on the wire and in storage.
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::Active => 0,
            Self::Frozen => 1,
            Self::Closed => 2,
        }
    }

    /// Looks a status up by its integer code.
    ///
    /// # Errors
    ///
    /// Returns `UnknownStatusCode` if `code` is not 0, 1 or 2.
    pub const fn from_code(code: i32) -> Result<Self, UnknownStatusCode> {
        match code {
            0 => Ok(Self::Active),
            1 => Ok(Self::Frozen),
            2 => Ok(Self::Closed),
            other => Err(UnknownStatusCode(other)),
        }
    }

    /// Returns `true` if the account status is `Active`.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl TryFrom<i32> for AccountStatus {
    type Error = UnknownStatusCode;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<AccountStatus> for i32 {
    fn from(status: AccountStatus) -> Self {
        status.code()
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(formatter, "Active"),
            Self::Frozen => write!(formatter, "Frozen"),
            Self::Closed => write!(formatter, "Closed"),
        }
    }
}

/// A stored bank account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    /// Store-generated identifier.
    pub id: AccountId,
    /// Owning customer.
    pub customer_id: CustomerId,
    /// When the account was created. Never changes.
    pub creation_timestamp: Timestamp,
    /// When the account was last updated, `None` until the first update.
    pub updated_timestamp: Option<Timestamp>,
    /// Current status.
    pub status: AccountStatus,
    /// Current balance, never negative.
    pub balance: Balance,
}

impl Account {
    /// Returns the most recent time the account was written.
    #[must_use]
    pub fn last_modified(&self) -> Timestamp {
        self.updated_timestamp.unwrap_or(self.creation_timestamp)
    }
}

/// An account that has not been stored yet and so has no identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub customer_id: CustomerId,
    pub creation_timestamp: Timestamp,
    pub status: AccountStatus,
    pub balance: Balance,
}

impl NewAccount {
    /// Attaches the identifier assigned by the store.
    #[must_use]
    pub fn with_id(self, id: AccountId) -> Account {
        Account {
            id,
            customer_id: self.customer_id,
            creation_timestamp: self.creation_timestamp,
            updated_timestamp: None,
            status: self.status,
            balance: self.balance,
        }
    }
}
