//! Error taxonomy of the entity service operations.
//!
//! Every failure an operation can report is one of these variants. None of
//! them is retried; each is returned to the caller as-is and leaves the store
//! untouched.

use std::fmt;

use thiserror::Error;

use crate::domain::validation::ValidationErrors;
use crate::domain::value_objects::{AccountId, CustomerId};
use crate::infrastructure::RepositoryError;

/// The kind of entity an operation addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Customer,
    Account,
}

impl EntityKind {
    /// Returns the name used in error payloads.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Account => "Account",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Errors returned by the customer and account services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// One or more fields of the request are malformed.
    #[error("Validation failed: {0}")]
    ValidationFailed(ValidationErrors),

    /// The id in the request body disagrees with the addressed id.
    #[error("{entity} ID mismatch: path id {path_id}, body id {body_id}")]
    IdMismatch {
        entity: EntityKind,
        path_id: i32,
        body_id: i32,
    },

    /// The addressed entity does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: EntityKind, id: i32 },

    /// An account refers to a customer that does not exist.
    #[error("Customer does not exist: {0}")]
    CustomerNotFound(CustomerId),

    /// The store failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    /// Builds a `NotFound` for a customer.
    #[must_use]
    pub const fn customer_not_found(id: CustomerId) -> Self {
        Self::NotFound {
            entity: EntityKind::Customer,
            id: id.value(),
        }
    }

    /// Builds a `NotFound` for an account.
    #[must_use]
    pub const fn account_not_found(id: AccountId) -> Self {
        Self::NotFound {
            entity: EntityKind::Account,
            id: id.value(),
        }
    }

    /// Returns `true` for failures caused by the caller rather than the store.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        !matches!(self, Self::Repository(_))
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        Self::ValidationFailed(errors)
    }
}
