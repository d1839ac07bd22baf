use async_trait::async_trait;
use sqlx::{query, query_as, PgPool};

use crate::{
    database::{CustomerRepository, StoreError},
    models::Customer,
};

/// Postgres backed customer store
#[derive(Debug, Clone)]
pub struct CustomerDatabase {
    pool: PgPool,
}

impl CustomerDatabase {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for CustomerDatabase {
    #[tracing::instrument(skip(self), fields(repository = "customer"))]
    async fn find_all(&self) -> Result<Vec<Customer>, StoreError> {
        let customers = query_as::<_, Customer>(
            r#"
            SELECT id, first_name, last_name, email, created_at
            FROM customers
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(customers)
    }

    #[tracing::instrument(skip(self), fields(repository = "customer"))]
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, StoreError> {
        let customer = query_as::<_, Customer>(
            r#"
            SELECT id, first_name, last_name, email, created_at
            FROM customers WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(customer)
    }

    #[tracing::instrument(skip(self), fields(repository = "customer"))]
    async fn save(&self, customer: Customer) -> Result<Customer, StoreError> {
        let saved = match customer.id {
            None => {
                query_as::<_, Customer>(
                    r#"
                    INSERT INTO customers ( first_name, last_name, email, created_at )
                    VALUES ( $1, $2, $3, $4 )
                    RETURNING id, first_name, last_name, email, created_at
                    "#,
                )
                .bind(&customer.first_name)
                .bind(&customer.last_name)
                .bind(&customer.email)
                .bind(customer.created_at)
                .fetch_one(&self.pool)
                .await?
            }
            // updates never write `created_at`
            Some(id) => {
                query_as::<_, Customer>(
                    r#"
                    UPDATE customers
                    SET first_name = $1, last_name = $2, email = $3
                    WHERE id = $4
                    RETURNING id, first_name, last_name, email, created_at
                    "#,
                )
                .bind(&customer.first_name)
                .bind(&customer.last_name)
                .bind(&customer.email)
                .bind(id)
                .fetch_one(&self.pool)
                .await?
            }
        };
        Ok(saved)
    }

    #[tracing::instrument(skip(self), fields(repository = "customer"))]
    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        query(
            r#"
            DELETE FROM customers WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
