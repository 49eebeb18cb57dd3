//! In-memory implementation of the repositories.
//!
//! Used by the test suites and when the service starts without a
//! `DATABASE_URL`. It mirrors the PostgreSQL schema's behaviour: ids are
//! generated sequentially, an account must reference an existing customer,
//! and deleting a customer deletes its accounts.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::account::{Account, AccountStatus, NewAccount};
use crate::domain::customer::{Customer, CustomerAccounts, NewCustomer};
use crate::domain::value_objects::{AccountId, Balance, CustomerId, Timestamp};

use super::repository::{AccountRepository, CustomerRepository, RepositoryError};

#[derive(Debug)]
struct State {
    customers: BTreeMap<CustomerId, Customer>,
    accounts: BTreeMap<AccountId, Account>,
    next_customer_id: i32,
    next_account_id: i32,
}

impl State {
    const fn empty() -> Self {
        Self {
            customers: BTreeMap::new(),
            accounts: BTreeMap::new(),
            next_customer_id: 1,
            next_account_id: 1,
        }
    }

    fn allocate_customer_id(&mut self) -> Result<CustomerId, RepositoryError> {
        let id = CustomerId::create(self.next_customer_id)
            .map_err(|error| RepositoryError::Database(error.to_string()))?;
        self.next_customer_id = self
            .next_customer_id
            .checked_add(1)
            .ok_or_else(|| RepositoryError::Database("customer id sequence exhausted".to_string()))?;
        Ok(id)
    }

    fn allocate_account_id(&mut self) -> Result<AccountId, RepositoryError> {
        let id = AccountId::create(self.next_account_id)
            .map_err(|error| RepositoryError::Database(error.to_string()))?;
        self.next_account_id = self
            .next_account_id
            .checked_add(1)
            .ok_or_else(|| RepositoryError::Database("account id sequence exhausted".to_string()))?;
        Ok(id)
    }

    fn insert_customer(&mut self, customer: NewCustomer) -> Result<Customer, RepositoryError> {
        let stored = customer.with_id(self.allocate_customer_id()?);
        self.customers.insert(stored.id, stored.clone());
        Ok(stored)
    }

    fn insert_account(&mut self, account: NewAccount) -> Result<Account, RepositoryError> {
        if !self.customers.contains_key(&account.customer_id) {
            return Err(RepositoryError::ForeignKeyViolation(format!(
                "customer {} does not exist",
                account.customer_id
            )));
        }
        let stored = account.with_id(self.allocate_account_id()?);
        self.accounts.insert(stored.id, stored.clone());
        Ok(stored)
    }
}

/// Thread-safe in-memory store implementing both repository traits.
#[derive(Debug)]
pub struct InMemoryStore {
    state: RwLock<State>,
}

impl InMemoryStore {
    /// Creates an empty store; the first customer and account both get id 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State::empty()),
        }
    }

    /// Creates a store holding the initial data set: three customers and one
    /// active account of 1000.00 owned by the first customer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the seed rows cannot be built.
    pub fn seeded() -> Result<Self, RepositoryError> {
        let mut state = State::empty();

        for (first_name, last_name, phone_number) in [
            ("Anna", "Johansson", "0712345672"),
            ("Test", "Testsson", "0723123453"),
            ("Anton", "Eriksson", "0732442942"),
        ] {
            state.insert_customer(NewCustomer {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                phone_number: phone_number.to_string(),
            })?;
        }

        let creation_timestamp = Timestamp::parse("2025-04-13T00:00:00Z")
            .ok_or_else(|| RepositoryError::CorruptRow("seed timestamp".to_string()))?;
        let balance =
            Balance::parse("1000.00").map_err(|error| RepositoryError::CorruptRow(error.to_string()))?;
        let owner = CustomerId::create(1)
            .map_err(|error| RepositoryError::CorruptRow(error.to_string()))?;
        state.insert_account(NewAccount {
            customer_id: owner,
            creation_timestamp,
            status: AccountStatus::Active,
            balance,
        })?;

        Ok(Self {
            state: RwLock::new(state),
        })
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state.customers.values().cloned().collect())
    }

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state.customers.get(&id).cloned())
    }

    async fn add(&self, customer: NewCustomer) -> Result<Customer, RepositoryError> {
        let mut state = self.state.write().await;
        state.insert_customer(customer)
    }

    async fn save(&self, customer: &Customer) -> Result<bool, RepositoryError> {
        let mut state = self.state.write().await;
        let Some(stored) = state.customers.get_mut(&customer.id) else {
            return Ok(false);
        };
        *stored = customer.clone();
        Ok(true)
    }

    async fn remove(&self, id: CustomerId) -> Result<bool, RepositoryError> {
        let mut state = self.state.write().await;
        if state.customers.remove(&id).is_none() {
            return Ok(false);
        }
        state.accounts.retain(|_, account| account.customer_id != id);
        Ok(true)
    }

    async fn find_with_accounts(
        &self,
        id: CustomerId,
    ) -> Result<Option<CustomerAccounts>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state.customers.get(&id).map(|customer| {
            let accounts = state
                .accounts
                .values()
                .filter(|account| account.customer_id == id)
                .cloned()
                .collect();
            CustomerAccounts::new(customer.clone(), accounts)
        }))
    }
}

#[async_trait]
impl AccountRepository for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<Account>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state.accounts.values().cloned().collect())
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state.accounts.get(&id).cloned())
    }

    async fn add(&self, account: NewAccount) -> Result<Account, RepositoryError> {
        let mut state = self.state.write().await;
        state.insert_account(account)
    }

    async fn save(&self, account: &Account) -> Result<bool, RepositoryError> {
        let mut state = self.state.write().await;
        let Some(stored) = state.accounts.get_mut(&account.id) else {
            return Ok(false);
        };
        *stored = account.clone();
        Ok(true)
    }

    async fn remove(&self, id: AccountId) -> Result<bool, RepositoryError> {
        let mut state = self.state.write().await;
        Ok(state.accounts.remove(&id).is_some())
    }
}
