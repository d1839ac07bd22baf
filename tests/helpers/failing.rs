use async_trait::async_trait;

use clientes::{
    database::{CustomerRepository, InMemoryCustomerRepository, StoreError},
    models::Customer,
};

/// Which calls of a [`FailingRepository`] fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fail {
    /// Every call can't reach the store
    Everything,
    /// Only `save` can't reach the store
    Saves,
    /// `find_by_id` hits a record it can't decode
    UnexpectedLookups,
}

/// An in-memory store that fails on demand
pub struct FailingRepository {
    inner: InMemoryCustomerRepository,
    fail: Fail,
}

impl FailingRepository {
    pub fn new(fail: Fail) -> Self {
        Self {
            inner: InMemoryCustomerRepository::new(),
            fail,
        }
    }

    /// Stores a record, bypassing the configured failures
    pub async fn seed(&self, customer: Customer) -> Customer {
        customer.save(&self.inner).await.expect("failed to seed store")
    }

    fn unreachable() -> StoreError {
        StoreError::Access(sqlx::Error::PoolTimedOut)
    }
}

#[async_trait]
impl CustomerRepository for FailingRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, StoreError> {
        match self.fail {
            Fail::Everything => Err(Self::unreachable()),
            _ => self.inner.find_all().await,
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, StoreError> {
        match self.fail {
            Fail::Everything => Err(Self::unreachable()),
            Fail::UnexpectedLookups => Err(StoreError::Unexpected(sqlx::Error::ColumnNotFound(
                String::from("email"),
            ))),
            Fail::Saves => self.inner.find_by_id(id).await,
        }
    }

    async fn save(&self, customer: Customer) -> Result<Customer, StoreError> {
        match self.fail {
            Fail::Everything | Fail::Saves => Err(Self::unreachable()),
            Fail::UnexpectedLookups => self.inner.save(customer).await,
        }
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        match self.fail {
            Fail::Everything => Err(Self::unreachable()),
            _ => self.inner.delete(id).await,
        }
    }
}
