//! Repository abstractions for customers and accounts.
//!
//! The services only talk to storage through these traits, so the same
//! operations run against PostgreSQL in production and against
//! [`InMemoryStore`](super::InMemoryStore) in tests and in database-less
//! mode.
//!
//! # Example
//!
//! ```rust,ignore
//! use account_app::infrastructure::CustomerRepository;
//!
//! async fn names(store: &dyn CustomerRepository) -> Vec<String> {
//!     store
//!         .list_all()
//!         .await
//!         .map(|customers| customers.into_iter().map(|customer| customer.first_name).collect())
//!         .unwrap_or_default()
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::account::{Account, NewAccount};
use crate::domain::customer::{Customer, CustomerAccounts, NewCustomer};
use crate::domain::value_objects::{AccountId, CustomerId};

/// Errors that can occur when reading or writing the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// A referenced row does not exist (PostgreSQL `23503`).
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),
    /// A database operation failed.
    #[error("Database error: {0}")]
    Database(String),
    /// A stored row could not be turned back into an entity.
    #[error("Corrupt row: {0}")]
    CorruptRow(String),
}

/// Storage operations for customers.
///
/// Lists are returned ordered by id.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Returns every customer.
    async fn list_all(&self) -> Result<Vec<Customer>, RepositoryError>;

    /// Looks a customer up by id.
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError>;

    /// Stores a new customer and returns it with its generated id.
    async fn add(&self, customer: NewCustomer) -> Result<Customer, RepositoryError>;

    /// Overwrites a stored customer. Returns `false` if it no longer exists.
    async fn save(&self, customer: &Customer) -> Result<bool, RepositoryError>;

    /// Deletes a customer and all of its accounts. Returns `false` if it did
    /// not exist.
    async fn remove(&self, id: CustomerId) -> Result<bool, RepositoryError>;

    /// Loads a customer together with its accounts, ordered by creation time.
    async fn find_with_accounts(
        &self,
        id: CustomerId,
    ) -> Result<Option<CustomerAccounts>, RepositoryError>;
}

/// Storage operations for accounts.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Returns every account, ordered by id.
    async fn list_all(&self) -> Result<Vec<Account>, RepositoryError>;

    /// Looks an account up by id.
    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, RepositoryError>;

    /// Stores a new account and returns it with its generated id.
    ///
    /// Fails with `RepositoryError::ForeignKeyViolation` if the owning
    /// customer does not exist.
    async fn add(&self, account: NewAccount) -> Result<Account, RepositoryError>;

    /// Overwrites a stored account. Returns `false` if it no longer exists.
    async fn save(&self, account: &Account) -> Result<bool, RepositoryError>;

    /// Deletes an account. Returns `false` if it did not exist.
    async fn remove(&self, id: AccountId) -> Result<bool, RepositoryError>;
}
