//! Validators for whole create and update commands.
//!
//! Create commands are checked field by field with every error accumulated.
//! Update commands first compare the body id with the addressed id; a
//! mismatch is reported on its own, before any field is looked at.

use crate::application::commands::{CreateAccount, CreateCustomer, UpdateAccount, UpdateCustomer};
use crate::application::errors::{EntityKind, ServiceError};
use crate::domain::account::AccountStatus;
use crate::domain::validation::Validated;
use crate::domain::value_objects::{AccountId, Balance, CustomerId};

use super::fields::{
    mismatched_id, non_blank, validate_balance, validate_customer_reference, validate_name,
    validate_phone_number, validate_repeated_id, validate_required, validate_status,
};

/// A create-customer command that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDraft {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

/// The fields an update-customer command will overwrite.
///
/// `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
}

/// A create-account command that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountDraft {
    pub customer_id: CustomerId,
    pub balance: Option<Balance>,
}

/// The fields an update-account command will overwrite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountPatch {
    pub status: Option<AccountStatus>,
    pub balance: Option<Balance>,
}

/// Validates a create-customer command.
///
/// All three fields are required.
#[must_use]
pub fn validate_create_customer(command: &CreateCustomer) -> Validated<CustomerDraft> {
    validate_required("first_name", command.first_name.as_ref(), validate_name).map3(
        validate_required("last_name", command.last_name.as_ref(), validate_name),
        validate_required(
            "phone_number",
            command.phone_number.as_ref(),
            validate_phone_number,
        ),
        |first_name, last_name, phone_number| CustomerDraft {
            first_name,
            last_name,
            phone_number,
        },
    )
}

/// Validates an update-customer command addressed to `customer_id`.
///
/// Blank fields are treated as absent.
///
/// # Errors
///
/// Returns `ServiceError::IdMismatch` when the body id differs from
/// `customer_id`, otherwise `ServiceError::ValidationFailed` with every field
/// error.
pub fn validate_update_customer(
    customer_id: CustomerId,
    command: &UpdateCustomer,
) -> Result<CustomerPatch, ServiceError> {
    if let Some(body_id) = mismatched_id(customer_id.value(), command.customer_id) {
        return Err(ServiceError::IdMismatch {
            entity: EntityKind::Customer,
            path_id: customer_id.value(),
            body_id,
        });
    }

    let optional = |field: &str, value: Option<&String>, rule: fn(&str, &str) -> Validated<String>| {
        Validated::transpose(non_blank(value).map(|text| rule(field, text)))
    };

    validate_repeated_id("customer_id", command.customer_id)
        .map4(
            optional("first_name", command.first_name.as_ref(), validate_name),
            optional("last_name", command.last_name.as_ref(), validate_name),
            optional(
                "phone_number",
                command.phone_number.as_ref(),
                validate_phone_number,
            ),
            |(), first_name, last_name, phone_number| CustomerPatch {
                first_name,
                last_name,
                phone_number,
            },
        )
        .to_result()
        .map_err(ServiceError::ValidationFailed)
}

/// Validates a create-account command.
///
/// `customer_id` is required; `balance` is optional. Whether the customer
/// exists is not checked here.
#[must_use]
pub fn validate_create_account(command: &CreateAccount) -> Validated<AccountDraft> {
    validate_customer_reference("customer_id", command.customer_id).map2(
        Validated::transpose(
            command
                .balance
                .as_deref()
                .map(|balance| validate_balance("balance", balance)),
        ),
        |customer_id, balance| AccountDraft {
            customer_id,
            balance,
        },
    )
}

/// Validates an update-account command addressed to `account_id`.
///
/// # Errors
///
/// Returns `ServiceError::IdMismatch` when the body id differs from
/// `account_id`, otherwise `ServiceError::ValidationFailed` with every field
/// error.
pub fn validate_update_account(
    account_id: AccountId,
    command: &UpdateAccount,
) -> Result<AccountPatch, ServiceError> {
    if let Some(body_id) = mismatched_id(account_id.value(), command.account_id) {
        return Err(ServiceError::IdMismatch {
            entity: EntityKind::Account,
            path_id: account_id.value(),
            body_id,
        });
    }

    validate_repeated_id("account_id", command.account_id)
        .map3(
            Validated::transpose(command.status.map(|code| validate_status("status", code))),
            Validated::transpose(
                command
                    .balance
                    .as_deref()
                    .map(|balance| validate_balance("balance", balance)),
            ),
            |(), status, balance| AccountPatch { status, balance },
        )
        .to_result()
        .map_err(ServiceError::ValidationFailed)
}
