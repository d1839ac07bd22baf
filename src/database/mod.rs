mod customer;
mod memory;

pub use customer::CustomerDatabase;
pub use memory::InMemoryCustomerRepository;

use async_trait::async_trait;
use sqlx::{migrate::MigrateError, PgPool};
use std::error::Error as StdError;
use thiserror::Error;

use crate::models::Customer;

/// Persistence contract consumed by the HTTP layer
///
/// Records should be saved through [`Customer::save`], which stamps the
/// creation date of records that haven't been persisted yet.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Customer>, StoreError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, StoreError>;
    /// Inserts the record when it has no `id`, otherwise overwrites the
    /// editable fields of the stored record
    async fn save(&self, customer: Customer) -> Result<Customer, StoreError>;
    /// Unknown ids are ignored
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not execute statement")]
    Access(#[source] sqlx::Error),

    #[error("could not map the stored customer record: {0}")]
    Unexpected(#[source] sqlx::Error),

    #[error("duplicate key value violates unique constraint on '{column}': {value} already exists")]
    UniqueViolation { column: &'static str, value: String },
}

impl StoreError {
    /// True for failures that aren't about reaching or executing against the
    /// store, e.g. a row that no longer matches the expected schema
    pub fn is_unexpected(&self) -> bool {
        matches!(self, Self::Unexpected(_))
    }

    /// The error followed by its most specific cause, `error:cause`
    pub fn detail(&self) -> String {
        format!("{}:{}", self, most_specific_cause(self))
    }
}

/// Walks the `source` chain down to the innermost error, or returns the error
/// itself when it has no source
fn most_specific_cause(error: &(dyn StdError + 'static)) -> String {
    let mut cause = error;
    while let Some(source) = cause.source() {
        cause = source;
    }
    cause.to_string()
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> StoreError {
        use sqlx::Error::*;

        match e {
            ColumnDecode { .. }
            | ColumnNotFound(_)
            | ColumnIndexOutOfBounds { .. }
            | Decode(_)
            | TypeNotFound { .. } => StoreError::Unexpected(e),
            _ => StoreError::Access(e),
        }
    }
}

#[tracing::instrument(skip(pool))]
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
