//! Balance value object.
//!
//! An account balance is a non-negative fixed-point amount stored as
//! `NUMERIC(18,2)`: at most 16 integer digits and exactly two fractional
//! digits.

use std::fmt;
use std::iter::Sum;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use thiserror::Error;

/// Number of fractional digits kept for a balance.
pub const BALANCE_SCALE: u32 = 2;

/// Maximum number of digits before the decimal point (`NUMERIC(18,2)`).
pub const BALANCE_INTEGER_DIGITS: u32 = 16;

/// Errors that can occur when constructing a [`Balance`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalanceError {
    /// The input string is not a decimal number.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    /// The amount is below zero.
    #[error("Balance cannot be negative")]
    Negative,
    /// The amount does not fit in `NUMERIC(18,2)`.
    #[error("Balance must have at most {BALANCE_INTEGER_DIGITS} digits before the decimal point")]
    TooLarge,
}

/// A non-negative account balance with two decimal places.
///
/// Amounts are rounded half away from zero to two decimal places on
/// construction, the way the database column would round them.
///
/// # Examples
///
/// ```rust
/// use account_app::domain::value_objects::Balance;
///
/// let balance = Balance::parse("1000.005").unwrap();
/// assert_eq!(balance.to_string(), "1000.01");
///
/// assert!(Balance::parse("-1").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Balance(Decimal);

impl Balance {
    /// Validates and rounds a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns `BalanceError::Negative` for amounts below zero and
    /// `BalanceError::TooLarge` when the integer part exceeds 16 digits.
    pub fn create(amount: Decimal) -> Result<Self, BalanceError> {
        if amount < Decimal::ZERO {
            return Err(BalanceError::Negative);
        }
        if amount.is_zero() {
            return Ok(Self::zero());
        }

        let mut rounded =
            amount.round_dp_with_strategy(BALANCE_SCALE, RoundingStrategy::MidpointAwayFromZero);
        if rounded.trunc() >= Self::upper_bound() {
            return Err(BalanceError::TooLarge);
        }

        rounded.rescale(BALANCE_SCALE);
        Ok(Self(rounded))
    }

    /// Parses a balance from its decimal string form.
    ///
    /// Scientific notation (`1e3`) is accepted as well, since that is how
    /// very large or very small JSON numbers are written out.
    ///
    /// # Errors
    ///
    /// Returns `BalanceError::InvalidAmount` if the string is not a decimal,
    /// plus any error of [`Balance::create`].
    pub fn parse(value: &str) -> Result<Self, BalanceError> {
        let text = value.trim();
        let amount = Decimal::from_str(text)
            .or_else(|_| Decimal::from_scientific(text))
            .map_err(|_| BalanceError::InvalidAmount(value.to_string()))?;
        Self::create(amount)
    }

    /// The zero balance.
    #[must_use]
    pub fn zero() -> Self {
        Self(Decimal::new(0, BALANCE_SCALE))
    }

    /// Returns the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    fn upper_bound() -> Decimal {
        Decimal::from(10_i64.pow(BALANCE_INTEGER_DIGITS))
    }
}

impl Default for Balance {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for Balance {
    type Err = BalanceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Summing balances yields a plain `Decimal` because a total across many
/// accounts may exceed the per-account column bound.
impl<'a> Sum<&'a Balance> for Decimal {
    fn sum<I: Iterator<Item = &'a Balance>>(iter: I) -> Self {
        iter.fold(Decimal::new(0, BALANCE_SCALE), |total, balance| {
            total + balance.0
        })
    }
}
