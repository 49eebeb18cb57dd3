//! Customer operations.

use tracing::{debug, info};

use crate::application::commands::{CreateCustomer, UpdateCustomer};
use crate::application::errors::ServiceError;
use crate::application::mapping::{apply_customer_patch, new_customer};
use crate::application::validation::{validate_create_customer, validate_update_customer};
use crate::domain::customer::Customer;
use crate::domain::value_objects::CustomerId;
use crate::infrastructure::CustomerRepository;

/// Returns every customer, ordered by id.
///
/// # Errors
///
/// Returns `ServiceError::Repository` if the store fails.
pub async fn list_customers(
    customers: &dyn CustomerRepository,
) -> Result<Vec<Customer>, ServiceError> {
    Ok(customers.list_all().await?)
}

/// Returns one customer.
///
/// # Errors
///
/// Returns `ServiceError::NotFound` if no customer has this id.
pub async fn get_customer(
    customers: &dyn CustomerRepository,
    id: CustomerId,
) -> Result<Customer, ServiceError> {
    customers
        .find_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::customer_not_found(id))
}

/// Validates and stores a new customer.
///
/// # Errors
///
/// Returns `ServiceError::ValidationFailed` with every field error; nothing
/// is stored in that case.
pub async fn create_customer(
    customers: &dyn CustomerRepository,
    command: &CreateCustomer,
) -> Result<Customer, ServiceError> {
    let draft = validate_create_customer(command).to_result().map_err(|errors| {
        debug!(errors = %errors, "Rejected customer creation");
        ServiceError::ValidationFailed(errors)
    })?;

    let customer = customers.add(new_customer(draft)).await?;
    info!(customer_id = %customer.id, "Customer created");
    Ok(customer)
}

/// Overwrites the fields present in `command` on customer `id`.
///
/// # Errors
///
/// Returns `ServiceError::IdMismatch` or `ServiceError::ValidationFailed`
/// before touching the store, and `ServiceError::NotFound` if the customer
/// does not exist.
pub async fn update_customer(
    customers: &dyn CustomerRepository,
    id: CustomerId,
    command: &UpdateCustomer,
) -> Result<(), ServiceError> {
    let patch = validate_update_customer(id, command).inspect_err(|error| {
        debug!(customer_id = %id, error = %error, "Rejected customer update");
    })?;

    let stored = get_customer(customers, id).await?;
    if !customers.save(&apply_customer_patch(stored, patch)).await? {
        return Err(ServiceError::customer_not_found(id));
    }

    info!(customer_id = %id, "Customer updated");
    Ok(())
}

/// Deletes customer `id` together with all of its accounts.
///
/// # Errors
///
/// Returns `ServiceError::NotFound` if the customer does not exist.
pub async fn delete_customer(
    customers: &dyn CustomerRepository,
    id: CustomerId,
) -> Result<(), ServiceError> {
    if customers.remove(id).await? {
        info!(customer_id = %id, "Customer deleted");
        Ok(())
    } else {
        Err(ServiceError::customer_not_found(id))
    }
}
