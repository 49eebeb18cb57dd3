//! Account entity and related types.
//!
//! - [`aggregate`] - `Account`, `NewAccount` and `AccountStatus`

pub mod aggregate;

pub use aggregate::*;
