//! PostgreSQL implementation of the repositories.
//!
//! Queries are checked at runtime (`sqlx::query_as`) and rows are mapped
//! through `FromRow` records, then converted into domain entities. Schema
//! and seed data live in `migrations/`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::postgres::PgPoolOptions;
use sqlx::{FromRow, PgPool};

use async_trait::async_trait;

use crate::domain::account::{Account, AccountStatus, NewAccount};
use crate::domain::customer::{Customer, CustomerAccounts, NewCustomer};
use crate::domain::value_objects::{AccountId, Balance, CustomerId, Timestamp};

use super::config::DatabaseConfig;
use super::repository::{AccountRepository, CustomerRepository, RepositoryError};

const CUSTOMER_COLUMNS: &str = "customer_id, first_name, last_name, phone_number";
const ACCOUNT_COLUMNS: &str =
    "account_id, customer_id, creation_timestamp, updated_timestamp, status, balance";

// =============================================================================
// Row records
// =============================================================================

#[derive(Debug, FromRow)]
struct CustomerRecord {
    customer_id: i32,
    first_name: String,
    last_name: String,
    phone_number: String,
}

impl TryFrom<CustomerRecord> for Customer {
    type Error = RepositoryError;

    fn try_from(record: CustomerRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CustomerId::create(record.customer_id)
                .map_err(|error| RepositoryError::CorruptRow(error.to_string()))?,
            first_name: record.first_name,
            last_name: record.last_name,
            phone_number: record.phone_number,
        })
    }
}

#[derive(Debug, FromRow)]
struct AccountRecord {
    account_id: i32,
    customer_id: i32,
    creation_timestamp: DateTime<Utc>,
    updated_timestamp: Option<DateTime<Utc>>,
    status: i32,
    balance: Decimal,
}

impl TryFrom<AccountRecord> for Account {
    type Error = RepositoryError;

    fn try_from(record: AccountRecord) -> Result<Self, Self::Error> {
        let corrupt = |error: &dyn std::fmt::Display| {
            RepositoryError::CorruptRow(format!("account {}: {error}", record.account_id))
        };

        Ok(Self {
            id: AccountId::create(record.account_id).map_err(|error| corrupt(&error))?,
            customer_id: CustomerId::create(record.customer_id).map_err(|error| corrupt(&error))?,
            creation_timestamp: Timestamp::from_datetime(record.creation_timestamp),
            updated_timestamp: record.updated_timestamp.map(Timestamp::from_datetime),
            status: AccountStatus::from_code(record.status).map_err(|error| corrupt(&error))?,
            balance: Balance::create(record.balance).map_err(|error| corrupt(&error))?,
        })
    }
}

fn database_error(error: sqlx::Error) -> RepositoryError {
    match &error {
        sqlx::Error::Database(database) if database.is_foreign_key_violation() => {
            RepositoryError::ForeignKeyViolation(database.message().to_string())
        }
        _ => RepositoryError::Database(error.to_string()),
    }
}

fn convert_all<R, T>(records: Vec<R>) -> Result<Vec<T>, RepositoryError>
where
    T: TryFrom<R, Error = RepositoryError>,
{
    records.into_iter().map(T::try_from).collect()
}

// =============================================================================
// PostgresStore
// =============================================================================

/// PostgreSQL-backed store implementing both repository traits.
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Wraps an existing connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool using `config`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the database is unreachable.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, RepositoryError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout)
            .connect(&config.url)
            .await
            .map_err(|error| {
                RepositoryError::Database(format!(
                    "failed to create PostgreSQL connection pool: {error}"
                ))
            })?;
        Ok(Self::new(pool))
    }

    /// Applies the embedded migrations.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a migration fails.
    pub async fn run_migrations(&self) -> Result<(), RepositoryError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|error| RepositoryError::Database(format!("migration failed: {error}")))
    }

    /// Returns a reference to the underlying connection pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn accounts_of(&self, id: CustomerId) -> Result<Vec<Account>, RepositoryError> {
        let records: Vec<AccountRecord> = sqlx::query_as(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM account WHERE customer_id = $1 \
             ORDER BY creation_timestamp ASC, account_id ASC"
        ))
        .bind(id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        convert_all(records)
    }
}

impl std::fmt::Debug for PostgresStore {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PostgresStore")
            .field("pool_size", &self.pool.size())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CustomerRepository for PostgresStore {
    async fn list_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let records: Vec<CustomerRecord> = sqlx::query_as(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customer ORDER BY customer_id ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        convert_all(records)
    }

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        let record: Option<CustomerRecord> = sqlx::query_as(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customer WHERE customer_id = $1"
        ))
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        record.map(Customer::try_from).transpose()
    }

    async fn add(&self, customer: NewCustomer) -> Result<Customer, RepositoryError> {
        let record: CustomerRecord = sqlx::query_as(&format!(
            "INSERT INTO customer (first_name, last_name, phone_number) \
             VALUES ($1, $2, $3) RETURNING {CUSTOMER_COLUMNS}"
        ))
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.phone_number)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Customer::try_from(record)
    }

    async fn save(&self, customer: &Customer) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            "UPDATE customer SET first_name = $2, last_name = $3, phone_number = $4 \
             WHERE customer_id = $1",
        )
        .bind(customer.id.value())
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.phone_number)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove(&self, id: CustomerId) -> Result<bool, RepositoryError> {
        // Accounts go with it through ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM customer WHERE customer_id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_with_accounts(
        &self,
        id: CustomerId,
    ) -> Result<Option<CustomerAccounts>, RepositoryError> {
        let Some(customer) = CustomerRepository::find_by_id(self, id).await? else {
            return Ok(None);
        };
        let accounts = self.accounts_of(id).await?;
        Ok(Some(CustomerAccounts::new(customer, accounts)))
    }
}

#[async_trait]
impl AccountRepository for PostgresStore {
    async fn list_all(&self) -> Result<Vec<Account>, RepositoryError> {
        let records: Vec<AccountRecord> = sqlx::query_as(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM account ORDER BY account_id ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        convert_all(records)
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, RepositoryError> {
        let record: Option<AccountRecord> = sqlx::query_as(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM account WHERE account_id = $1"
        ))
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        record.map(Account::try_from).transpose()
    }

    async fn add(&self, account: NewAccount) -> Result<Account, RepositoryError> {
        let record: AccountRecord = sqlx::query_as(&format!(
            "INSERT INTO account (customer_id, creation_timestamp, updated_timestamp, status, balance) \
             VALUES ($1, $2, NULL, $3, $4) RETURNING {ACCOUNT_COLUMNS}"
        ))
        .bind(account.customer_id.value())
        .bind(*account.creation_timestamp.as_datetime())
        .bind(account.status.code())
        .bind(account.balance.amount())
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Account::try_from(record)
    }

    async fn save(&self, account: &Account) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            "UPDATE account SET updated_timestamp = $2, status = $3, balance = $4 \
             WHERE account_id = $1",
        )
        .bind(account.id.value())
        .bind(account.updated_timestamp.map(DateTime::<Utc>::from))
        .bind(account.status.code())
        .bind(account.balance.amount())
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove(&self, id: AccountId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM account WHERE account_id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(result.rows_affected() > 0)
    }
}
