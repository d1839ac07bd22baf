use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::{CustomerRepository, StoreError};

/// A customer record as stored and as returned over the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Customer {
    pub id: Option<i64>,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "createAt")]
    pub created_at: Option<NaiveDate>,
}

/// Request body for creating or updating a customer
///
/// Every field is optional here so that a missing field surfaces as a
/// validation error rather than a parse error. Client supplied `id` and
/// `createAt` values are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerPayload {
    #[serde(rename = "nombre")]
    pub first_name: Option<String>,
    #[serde(rename = "apellido")]
    pub last_name: Option<String>,
    pub email: Option<String>,
}

/// The editable fields of a customer, once they've passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Customer {
    pub fn new(fields: CustomerFields) -> Self {
        Self {
            id: None,
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            created_at: None,
        }
    }

    /// Overwrites the editable fields, `id` and `created_at` are left alone
    pub fn apply(&mut self, fields: CustomerFields) {
        self.first_name = fields.first_name;
        self.last_name = fields.last_name;
        self.email = fields.email;
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    #[tracing::instrument(skip(repository), fields(model = "Customer"))]
    pub async fn find_all(repository: &dyn CustomerRepository) -> Result<Vec<Self>, StoreError> {
        repository.find_all().await
    }

    #[tracing::instrument(skip(repository), fields(model = "Customer"))]
    pub async fn find_by_id(
        id: i64,
        repository: &dyn CustomerRepository,
    ) -> Result<Option<Self>, StoreError> {
        repository.find_by_id(id).await
    }

    /// Persists the record, stamping today's date on records that have never
    /// been stored before
    #[tracing::instrument(skip(repository), fields(model = "Customer"))]
    pub async fn save(mut self, repository: &dyn CustomerRepository) -> Result<Self, StoreError> {
        if self.is_new() {
            self.created_at = Some(Local::now().date_naive());
        }
        repository.save(self).await
    }

    #[tracing::instrument(skip(repository), fields(model = "Customer"))]
    pub async fn delete(id: i64, repository: &dyn CustomerRepository) -> Result<(), StoreError> {
        repository.delete(id).await
    }
}
