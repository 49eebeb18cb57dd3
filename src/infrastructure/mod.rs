//! Infrastructure layer.
//!
//! - `config` - Settings loaded from environment variables
//! - `repository` - Storage traits used by the services
//! - `postgres` - PostgreSQL implementation of the storage traits
//! - `in_memory` - In-process implementation for tests and database-less runs
//! - `dependencies` - Container handed to the HTTP handlers

mod config;
mod dependencies;
mod in_memory;
mod postgres;
mod repository;

pub use config::{AppConfig, ConfigError, DatabaseConfig, LogFormat};
pub use dependencies::AppDependencies;
pub use in_memory::InMemoryStore;
pub use postgres::PostgresStore;
pub use repository::{AccountRepository, CustomerRepository, RepositoryError};
