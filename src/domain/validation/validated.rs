//! Validated type for parallel error accumulation.
//!
//! Unlike `Result`, `Validated` accumulates all errors when combining
//! validations with `map2`, `map3` and `map4`, so a request with three bad
//! fields reports all three.
//!
//! # Examples
//!
//! ```rust
//! use account_app::domain::validation::Validated;
//!
//! let first: Validated<i32> = Validated::valid(1);
//! let second: Validated<i32> = Validated::valid(2);
//! assert_eq!(first.map2(second, |a, b| a + b), Validated::valid(3));
//!
//! let first: Validated<i32> = Validated::invalid("first_name", "is required");
//! let second: Validated<i32> = Validated::invalid("last_name", "is required");
//! let result = first.map2(second, |a, b| a + b);
//! assert_eq!(result.errors().len(), 2);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// A single field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Name of the offending field, as it appears on the wire.
    pub field: String,
    /// Human-readable error message.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// A collection of validation errors in the order they were found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Creates a new collection with a single error.
    #[must_use]
    pub fn single(error: ValidationError) -> Self {
        Self(vec![error])
    }

    /// Returns the number of errors.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no errors.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the errors.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Combines two error collections.
    #[must_use]
    pub fn combine(mut self, mut other: Self) -> Self {
        self.0.append(&mut other.0);
        self
    }

    /// Returns true if any error refers to `field`.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|error| error.field == field)
    }

    /// Groups the messages by field name.
    ///
    /// Fields are ordered alphabetically; messages keep their original order.
    #[must_use]
    pub fn to_field_map(&self) -> BTreeMap<String, Vec<String>> {
        self.0
            .iter()
            .fold(BTreeMap::new(), |mut map, error| {
                map.entry(error.field.clone())
                    .or_insert_with(Vec::new)
                    .push(error.message.clone());
                map
            })
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(formatter, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A validation result that accumulates errors.
///
/// `Validated<A>` is either:
/// - `Valid(A)` - a successful validation with a value
/// - `Invalid(ValidationErrors)` - a failed validation with accumulated errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validated<A> {
    /// A successful validation result.
    Valid(A),
    /// A failed validation with accumulated errors.
    Invalid(ValidationErrors),
}

impl<A> Validated<A> {
    /// Creates a valid result.
    #[must_use]
    pub const fn valid(value: A) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid result with a single field error.
    #[must_use]
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid(ValidationErrors::single(ValidationError::new(field, message)))
    }

    /// Returns true if this is a valid result.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns true if this is an invalid result.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Returns the errors if this is invalid, or an empty collection if valid.
    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        static EMPTY: ValidationErrors = ValidationErrors(Vec::new());
        match self {
            Self::Valid(_) => &EMPTY,
            Self::Invalid(errors) => errors,
        }
    }

    /// Converts to a Result.
    ///
    /// # Errors
    ///
    /// Returns `Err(ValidationErrors)` if this is an invalid result.
    pub fn to_result(self) -> Result<A, ValidationErrors> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors),
        }
    }

    /// Transforms the valid value.
    pub fn map<B, F>(self, function: F) -> Validated<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Valid(value) => Validated::Valid(function(value)),
            Self::Invalid(errors) => Validated::Invalid(errors),
        }
    }

    /// Combines two validations, accumulating errors from both.
    pub fn map2<B, C, F>(self, other: Validated<B>, function: F) -> Validated<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Valid(a), Validated::Valid(b)) => Validated::Valid(function(a, b)),
            (Self::Invalid(e1), Validated::Invalid(e2)) => Validated::Invalid(e1.combine(e2)),
            (Self::Invalid(errors), Validated::Valid(_))
            | (Self::Valid(_), Validated::Invalid(errors)) => Validated::Invalid(errors),
        }
    }

    /// Combines three validations, accumulating errors from all of them.
    pub fn map3<B, C, D, F>(
        self,
        second: Validated<B>,
        third: Validated<C>,
        function: F,
    ) -> Validated<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.map2(second, |a, b| (a, b))
            .map2(third, |(a, b), c| function(a, b, c))
    }

    /// Combines four validations, accumulating errors from all of them.
    pub fn map4<B, C, D, E, F>(
        self,
        second: Validated<B>,
        third: Validated<C>,
        fourth: Validated<D>,
        function: F,
    ) -> Validated<E>
    where
        F: FnOnce(A, B, C, D) -> E,
    {
        self.map3(second, third, |a, b, c| (a, b, c))
            .map2(fourth, |(a, b, c), d| function(a, b, c, d))
    }
}

impl<A> From<Result<A, ValidationError>> for Validated<A> {
    fn from(result: Result<A, ValidationError>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(error) => Self::Invalid(ValidationErrors::single(error)),
        }
    }
}

impl<A> Validated<Option<A>> {
    /// Lifts `Option<Validated<A>>` into `Validated<Option<A>>`; an absent
    /// value is valid.
    pub fn transpose(value: Option<Validated<A>>) -> Self {
        value.map_or(Self::Valid(None), |validated| validated.map(Some))
    }
}
