//! Validation of create and update commands.
//!
//! Validators are pure functions. Field validators return `Validated` values
//! that are combined with `map2`/`map3`/`map4`, so a command with several bad
//! fields reports all of them at once.
//!
//! # Examples
//!
//! ```rust
//! use account_app::application::commands::CreateCustomer;
//! use account_app::application::validation::validate_create_customer;
//!
//! let command = CreateCustomer {
//!     first_name: Some("Anna".to_string()),
//!     last_name: None,
//!     phone_number: Some("not a number".to_string()),
//! };
//!
//! let result = validate_create_customer(&command);
//! assert_eq!(result.errors().len(), 2);
//! ```

mod commands;
mod fields;

pub use commands::{
    AccountDraft, AccountPatch, CustomerDraft, CustomerPatch, validate_create_account,
    validate_create_customer, validate_update_account, validate_update_customer,
};
pub use fields::{
    MAX_NAME_LENGTH, REQUIRED_MESSAGE, mismatched_id, validate_balance,
    validate_customer_reference, validate_name, validate_phone_number, validate_repeated_id,
    validate_required, validate_status,
};
