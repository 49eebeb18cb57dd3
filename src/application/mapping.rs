//! Mapping from validated commands to entities.
//!
//! These functions are pure: the current time is passed in by the caller.
//! Updates are explicit field-by-field merges where only present fields
//! overwrite the stored value.

use crate::application::validation::{AccountDraft, AccountPatch, CustomerDraft, CustomerPatch};
use crate::domain::account::{Account, AccountStatus, NewAccount};
use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::value_objects::{Balance, Timestamp};

/// Builds a new customer from a validated draft. Fields are copied verbatim.
#[must_use]
pub fn new_customer(draft: CustomerDraft) -> NewCustomer {
    NewCustomer {
        first_name: draft.first_name,
        last_name: draft.last_name,
        phone_number: draft.phone_number,
    }
}

/// Applies a validated patch to a stored customer.
#[must_use]
pub fn apply_customer_patch(customer: Customer, patch: CustomerPatch) -> Customer {
    Customer {
        first_name: patch.first_name.unwrap_or(customer.first_name),
        last_name: patch.last_name.unwrap_or(customer.last_name),
        phone_number: patch.phone_number.unwrap_or(customer.phone_number),
        ..customer
    }
}

/// Builds a new account from a validated draft.
///
/// The account always starts `Active` with no update time, and with a zero
/// balance when none was given.
#[must_use]
pub fn new_account(draft: AccountDraft, now: Timestamp) -> NewAccount {
    NewAccount {
        customer_id: draft.customer_id,
        creation_timestamp: now,
        status: AccountStatus::Active,
        balance: draft.balance.unwrap_or_else(Balance::zero),
    }
}

/// Applies a validated patch to a stored account.
///
/// The update time is refreshed even when the patch changes nothing, and
/// never moves backwards past the previous write.
#[must_use]
pub fn apply_account_patch(account: Account, patch: AccountPatch, now: Timestamp) -> Account {
    let updated_timestamp = Some(now.at_least(account.last_modified()));
    Account {
        status: patch.status.unwrap_or(account.status),
        balance: patch.balance.unwrap_or(account.balance),
        updated_timestamp,
        ..account
    }
}
