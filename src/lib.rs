//! Account management service.
//!
//! A back-office HTTP API for bank customers and their accounts: create,
//! read, update and delete both, list a customer's accounts and total their
//! balances.
//!
//! # Architecture
//!
//! The crate follows the Onion Architecture:
//!
//! - **Domain Layer**: Entities, identifiers, balances and the `Validated` type
//! - **Application Layer**: Commands, validation, mapping and service operations
//! - **Infrastructure Layer**: Configuration and the PostgreSQL / in-memory stores
//! - **API Layer**: HTTP handlers, DTOs, error mapping

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
