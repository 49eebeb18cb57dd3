//! Field-level validators.
//!
//! Each validator checks one raw input value and returns a `Validated`
//! carrying either the typed value or the field errors it found. The field
//! name is passed in so the same rule can back several request fields.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::account::AccountStatus;
use crate::domain::validation::Validated;
use crate::domain::value_objects::{BALANCE_INTEGER_DIGITS, Balance, BalanceError, CustomerId};

/// Maximum length of a first or last name, in characters.
pub const MAX_NAME_LENGTH: usize = 50;

pub const REQUIRED_MESSAGE: &str = "is required";

/// Starts and ends with an alphanumeric character; the interior may also
/// contain `.`, `,`, `'`, `-`, `_` and spaces.
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9.,'\-_ ]*[a-zA-Z0-9]$").expect("Invalid name regex pattern")
});

/// Optional `+`, digit groups (optionally parenthesised) separated by at most
/// one space, `-` or `.`, and an optional `x`/`ext`/`ext.` extension.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?(?:\(\d+\)|\d+)(?:[ .\-]?(?:\(\d+\)|\d+))*(?: ?(?:x|ext\.?) ?\d+)?$")
        .expect("Invalid phone regex pattern")
});

/// Treats `None` and whitespace-only strings alike.
pub(crate) fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|text| !text.trim().is_empty())
}

/// Validates a first or last name.
///
/// Length and pattern are checked independently, so an over-long name with a
/// bad character reports both problems.
///
/// # Examples
///
/// ```rust
/// use account_app::application::validation::validate_name;
///
/// assert!(validate_name("first_name", "Anna").is_valid());
/// assert!(validate_name("first_name", "-Anna").is_invalid());
/// ```
#[must_use]
pub fn validate_name(field: &str, value: &str) -> Validated<String> {
    let length = if value.chars().count() > MAX_NAME_LENGTH {
        Validated::invalid(
            field,
            format!("must be at most {MAX_NAME_LENGTH} characters"),
        )
    } else {
        Validated::valid(())
    };

    let shape = if NAME_PATTERN.is_match(value) {
        Validated::valid(())
    } else {
        Validated::invalid(
            field,
            "must start and end with a letter or digit and contain only letters, digits, spaces and . , ' - _",
        )
    };

    length.map2(shape, |(), ()| value.to_string())
}

/// Validates a phone number's shape.
#[must_use]
pub fn validate_phone_number(field: &str, value: &str) -> Validated<String> {
    if PHONE_PATTERN.is_match(value) {
        Validated::valid(value.to_string())
    } else {
        Validated::invalid(field, "is not a valid phone number")
    }
}

/// Validates a required string field, then applies `rule` to it.
///
/// Missing and whitespace-only values are both reported as required.
pub fn validate_required<F>(field: &str, value: Option<&String>, rule: F) -> Validated<String>
where
    F: FnOnce(&str, &str) -> Validated<String>,
{
    non_blank(value).map_or_else(
        || Validated::invalid(field, REQUIRED_MESSAGE),
        |text| rule(field, text),
    )
}

/// Validates a balance given as a decimal string.
///
/// # Examples
///
/// ```rust
/// use account_app::application::validation::validate_balance;
///
/// assert!(validate_balance("balance", "1000.00").is_valid());
/// assert!(validate_balance("balance", "-5").is_invalid());
/// ```
#[must_use]
pub fn validate_balance(field: &str, value: &str) -> Validated<Balance> {
    match Balance::parse(value) {
        Ok(balance) => Validated::valid(balance),
        Err(BalanceError::InvalidAmount(_)) => {
            Validated::invalid(field, "must be a decimal number")
        }
        Err(BalanceError::Negative) => Validated::invalid(field, "Balance cannot be negative"),
        Err(BalanceError::TooLarge) => Validated::invalid(
            field,
            format!("must have at most {BALANCE_INTEGER_DIGITS} digits before the decimal point"),
        ),
    }
}

/// Validates a raw account status code.
///
/// Any integer outside the known codes is rejected, including values that do
/// not fit in an `i32`.
#[must_use]
pub fn validate_status(field: &str, code: i64) -> Validated<AccountStatus> {
    i32::try_from(code)
        .ok()
        .and_then(|code| AccountStatus::from_code(code).ok())
        .map_or_else(
            || {
                Validated::invalid(
                    field,
                    "must be one of 0 (Active), 1 (Frozen) or 2 (Closed)",
                )
            },
            Validated::valid,
        )
}

/// Validates a required customer reference.
///
/// `None` and `0` both count as missing.
#[must_use]
pub fn validate_customer_reference(field: &str, value: Option<i32>) -> Validated<CustomerId> {
    match value {
        None | Some(0) => Validated::invalid(field, REQUIRED_MESSAGE),
        Some(raw) => CustomerId::create(raw).map_or_else(
            |_| Validated::invalid(field, "must be a positive integer"),
            Validated::valid,
        ),
    }
}

/// Validates the id repeated in an update body.
///
/// A missing or zero id is a required-field error. A differing id is not
/// reported here; the caller checks it first.
#[must_use]
pub fn validate_repeated_id(field: &str, value: Option<i32>) -> Validated<()> {
    match value {
        None | Some(0) => Validated::invalid(field, REQUIRED_MESSAGE),
        Some(_) => Validated::valid(()),
    }
}

/// Returns the body id when it is present and differs from the addressed id.
#[must_use]
pub const fn mismatched_id(path_id: i32, body_id: Option<i32>) -> Option<i32> {
    match body_id {
        Some(body_id) if body_id != 0 && body_id != path_id => Some(body_id),
        _ => None,
    }
}
