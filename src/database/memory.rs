use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{
    database::{CustomerRepository, StoreError},
    models::Customer,
};

/// Customer store kept in process memory
///
/// Mirrors the guarantees of the Postgres table: ids are handed out in
/// increasing order and never reused, emails are unique and an update never
/// touches the stored `created_at`.
#[derive(Debug, Default)]
pub struct InMemoryCustomerRepository {
    state: Mutex<State>,
}

#[derive(Debug, Default)]
struct State {
    last_id: i64,
    customers: BTreeMap<i64, Customer>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl State {
    fn check_unique_email(&self, customer: &Customer) -> Result<(), StoreError> {
        let taken = self
            .customers
            .values()
            .any(|existing| existing.email == customer.email && existing.id != customer.id);
        if taken {
            return Err(StoreError::UniqueViolation {
                column: "email",
                value: customer.email.clone(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    #[tracing::instrument(skip(self), fields(repository = "customer_memory"))]
    async fn find_all(&self) -> Result<Vec<Customer>, StoreError> {
        Ok(self.state().customers.values().cloned().collect())
    }

    #[tracing::instrument(skip(self), fields(repository = "customer_memory"))]
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, StoreError> {
        Ok(self.state().customers.get(&id).cloned())
    }

    #[tracing::instrument(skip(self), fields(repository = "customer_memory"))]
    async fn save(&self, mut customer: Customer) -> Result<Customer, StoreError> {
        let mut state = self.state();
        state.check_unique_email(&customer)?;

        match customer.id {
            None => {
                state.last_id += 1;
                let id = state.last_id;
                customer.id = Some(id);
                state.customers.insert(id, customer.clone());
                Ok(customer)
            }
            Some(id) => {
                let stored = state
                    .customers
                    .get_mut(&id)
                    .ok_or(StoreError::Access(sqlx::Error::RowNotFound))?;
                stored.first_name = customer.first_name;
                stored.last_name = customer.last_name;
                stored.email = customer.email;
                Ok(stored.clone())
            }
        }
    }

    #[tracing::instrument(skip(self), fields(repository = "customer_memory"))]
    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        self.state().customers.remove(&id);
        Ok(())
    }
}
