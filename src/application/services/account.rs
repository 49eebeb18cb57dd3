//! Account operations, including the two reads that go through a customer.
//!
//! The current time is passed in by the caller so every operation stays
//! deterministic under test.

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::application::commands::{CreateAccount, UpdateAccount};
use crate::application::errors::ServiceError;
use crate::application::mapping::{apply_account_patch, new_account};
use crate::application::validation::{validate_create_account, validate_update_account};
use crate::domain::account::Account;
use crate::domain::customer::CustomerAccounts;
use crate::domain::value_objects::{AccountId, CustomerId, Timestamp};
use crate::infrastructure::{AccountRepository, CustomerRepository, RepositoryError};

/// Returns every account, ordered by id.
///
/// # Errors
///
/// Returns `ServiceError::Repository` if the store fails.
pub async fn list_accounts(
    accounts: &dyn AccountRepository,
) -> Result<Vec<Account>, ServiceError> {
    Ok(accounts.list_all().await?)
}

/// Returns one account.
///
/// # Errors
///
/// Returns `ServiceError::NotFound` if no account has this id.
pub async fn get_account(
    accounts: &dyn AccountRepository,
    id: AccountId,
) -> Result<Account, ServiceError> {
    accounts
        .find_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::account_not_found(id))
}

/// Validates and opens a new account for an existing customer.
///
/// Shape validation runs first, then the owner is looked up, then the
/// account is stored. A customer deleted between the lookup and the insert
/// is reported the same way as a missing one.
///
/// # Errors
///
/// Returns `ServiceError::ValidationFailed` for malformed input and
/// `ServiceError::CustomerNotFound` if the owner does not exist.
pub async fn create_account(
    customers: &dyn CustomerRepository,
    accounts: &dyn AccountRepository,
    command: &CreateAccount,
    now: Timestamp,
) -> Result<Account, ServiceError> {
    let draft = validate_create_account(command).to_result().map_err(|errors| {
        debug!(errors = %errors, "Rejected account creation");
        ServiceError::ValidationFailed(errors)
    })?;

    let customer_id = draft.customer_id;
    if customers.find_by_id(customer_id).await?.is_none() {
        debug!(customer_id = %customer_id, "Account creation for unknown customer");
        return Err(ServiceError::CustomerNotFound(customer_id));
    }

    let account = accounts
        .add(new_account(draft, now))
        .await
        .map_err(|error| match error {
            RepositoryError::ForeignKeyViolation(_) => {
                warn!(customer_id = %customer_id, "Customer removed while opening account");
                ServiceError::CustomerNotFound(customer_id)
            }
            other => ServiceError::Repository(other),
        })?;

    info!(
        account_id = %account.id,
        customer_id = %customer_id,
        balance = %account.balance,
        "Account created"
    );
    Ok(account)
}

/// Applies the status and balance present in `command` to account `id`.
///
/// # Errors
///
/// Returns `ServiceError::IdMismatch` or `ServiceError::ValidationFailed`
/// before touching the store, and `ServiceError::NotFound` if the account
/// does not exist.
pub async fn update_account(
    accounts: &dyn AccountRepository,
    id: AccountId,
    command: &UpdateAccount,
    now: Timestamp,
) -> Result<(), ServiceError> {
    let patch = validate_update_account(id, command).inspect_err(|error| {
        debug!(account_id = %id, error = %error, "Rejected account update");
    })?;

    let stored = get_account(accounts, id).await?;
    let updated = apply_account_patch(stored, patch, now);
    if !accounts.save(&updated).await? {
        return Err(ServiceError::account_not_found(id));
    }

    info!(
        account_id = %id,
        status = %updated.status,
        balance = %updated.balance,
        "Account updated"
    );
    Ok(())
}

/// Deletes account `id`.
///
/// # Errors
///
/// Returns `ServiceError::NotFound` if the account does not exist.
pub async fn delete_account(
    accounts: &dyn AccountRepository,
    id: AccountId,
) -> Result<(), ServiceError> {
    if accounts.remove(id).await? {
        info!(account_id = %id, "Account deleted");
        Ok(())
    } else {
        Err(ServiceError::account_not_found(id))
    }
}

async fn customer_accounts(
    customers: &dyn CustomerRepository,
    id: CustomerId,
) -> Result<CustomerAccounts, ServiceError> {
    customers
        .find_with_accounts(id)
        .await?
        .ok_or_else(|| ServiceError::customer_not_found(id))
}

/// Returns the accounts of customer `id`, oldest first.
///
/// # Errors
///
/// Returns `ServiceError::NotFound` if the customer does not exist. A
/// customer without accounts yields an empty list.
pub async fn list_accounts_for_customer(
    customers: &dyn CustomerRepository,
    id: CustomerId,
) -> Result<Vec<Account>, ServiceError> {
    Ok(customer_accounts(customers, id).await?.accounts)
}

/// Returns the sum of the balances of customer `id`'s accounts.
///
/// # Errors
///
/// Returns `ServiceError::NotFound` if the customer does not exist. A
/// customer without accounts has a total of `0.00`.
pub async fn total_balance_for_customer(
    customers: &dyn CustomerRepository,
    id: CustomerId,
) -> Result<Decimal, ServiceError> {
    Ok(customer_accounts(customers, id).await?.total_balance())
}
