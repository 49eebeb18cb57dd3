//! Customer entity and the customer-with-accounts view.
//!
//! A customer is the owner of zero or more accounts. Deleting a customer
//! deletes its accounts as well.

pub mod aggregate;

pub use aggregate::*;
