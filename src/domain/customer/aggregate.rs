//! Customer entity and the customer-with-accounts read view.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::account::Account;
use crate::domain::value_objects::CustomerId;

/// A stored customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

/// A customer that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

impl NewCustomer {
    /// Attaches the identifier assigned by the store.
    #[must_use]
    pub fn with_id(self, id: CustomerId) -> Customer {
        Customer {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            phone_number: self.phone_number,
        }
    }
}

/// A customer loaded together with every account it owns.
///
/// `accounts` holds exactly the accounts whose `customer_id` is the
/// customer's id, ordered by creation time (ties broken by id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerAccounts {
    pub customer: Customer,
    pub accounts: Vec<Account>,
}

impl CustomerAccounts {
    /// Builds the view, putting the accounts in creation order.
    #[must_use]
    pub fn new(customer: Customer, mut accounts: Vec<Account>) -> Self {
        accounts.sort_by_key(|account| (account.creation_timestamp, account.id));
        Self { customer, accounts }
    }

    /// Sum of every account balance; zero when the customer has no accounts.
    #[must_use]
    pub fn total_balance(&self) -> Decimal {
        self.accounts.iter().map(|account| &account.balance).sum()
    }
}
