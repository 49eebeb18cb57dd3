//! Dependency container shared by every request handler.
//!
//! # Example
//!
//! ```rust,ignore
//! use account_app::infrastructure::{AppConfig, AppDependencies, InMemoryStore};
//! use std::sync::Arc;
//!
//! let dependencies = AppDependencies::in_memory(AppConfig::default(), Arc::new(InMemoryStore::new()));
//! ```

use std::sync::Arc;

use super::config::AppConfig;
use super::in_memory::InMemoryStore;
use super::postgres::PostgresStore;
use super::repository::{AccountRepository, CustomerRepository};

/// Application dependency container.
///
/// Both repositories sit behind trait objects, so the same handlers serve
/// PostgreSQL and in-memory storage. Cloning is cheap.
#[derive(Clone)]
pub struct AppDependencies {
    config: AppConfig,
    customers: Arc<dyn CustomerRepository>,
    accounts: Arc<dyn AccountRepository>,
}

impl AppDependencies {
    /// Creates a container from explicit repository implementations.
    #[must_use]
    pub fn new(
        config: AppConfig,
        customers: Arc<dyn CustomerRepository>,
        accounts: Arc<dyn AccountRepository>,
    ) -> Self {
        Self {
            config,
            customers,
            accounts,
        }
    }

    /// Serves both repositories from one in-memory store.
    #[must_use]
    pub fn in_memory(config: AppConfig, store: Arc<InMemoryStore>) -> Self {
        Self::new(config, store.clone(), store)
    }

    /// Serves both repositories from one PostgreSQL pool.
    #[must_use]
    pub fn postgres(config: AppConfig, store: PostgresStore) -> Self {
        let store = Arc::new(store);
        Self::new(config, store.clone(), store)
    }

    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the customer repository.
    #[must_use]
    pub fn customers(&self) -> &dyn CustomerRepository {
        self.customers.as_ref()
    }

    /// Returns the account repository.
    #[must_use]
    pub fn accounts(&self) -> &dyn AccountRepository {
        self.accounts.as_ref()
    }
}

impl std::fmt::Debug for AppDependencies {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("AppDependencies")
            .field("config", &self.config)
            .field("customers", &"<dyn CustomerRepository>")
            .field("accounts", &"<dyn AccountRepository>")
            .finish()
    }
}
