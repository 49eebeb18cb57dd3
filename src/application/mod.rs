//! Application layer.
//!
//! - **Commands**: Unvalidated inputs of the create and update operations
//! - **Validation**: Field rules combined with the `Validated` applicative
//! - **Mapping**: Pure conversion of validated input into entities
//! - **Services**: The operations invoked by the HTTP layer
//! - **Errors**: The failures those operations report

pub mod commands;
pub mod errors;
pub mod mapping;
pub mod services;
pub mod validation;

pub use commands::*;
pub use errors::{EntityKind, ServiceError};
pub use services::*;
pub use validation::*;
