//! Domain layer for the account application.
//!
//! The domain layer holds the entities and value objects and is independent
//! of HTTP and storage concerns.
//!
//! # Structure
//!
//! - [`value_objects`] - identifiers, balances and timestamps
//! - [`customer`] - `Customer` and the `CustomerAccounts` view
//! - [`account`] - `Account` and `AccountStatus`
//! - [`validation`] - error-accumulating validation primitives

pub mod account;
pub mod customer;
pub mod validation;
pub mod value_objects;

pub use account::*;
pub use customer::*;
pub use value_objects::*;
