//! Entity service operations.
//!
//! Each operation validates its input, maps it onto an entity and talks to
//! the store through the repository traits. They know nothing about HTTP.
//!
//! - [`customer`] - list, get, create, update and delete customers
//! - [`account`] - the same for accounts, plus the per-customer reads

pub mod account;
pub mod customer;

pub use account::*;
pub use customer::*;
