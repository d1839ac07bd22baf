use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::sync::Arc;
use uuid::Uuid;

use clientes::{
    configuration::DatabaseSettings,
    database::{run_migrations, CustomerDatabase},
};

use crate::helpers::{spawn_app_with, TestApp};

/// Creates a fresh, uniquely named database and runs the migrations on it
pub async fn configure_database(config: &DatabaseSettings) -> PgPool {
    let mut connection = PgConnection::connect_with(&config.without_db())
        .await
        .expect("failed to connect to database");
    connection
        .execute(&*format!(r#"CREATE DATABASE "{}";"#, config.database_name))
        .await
        .expect("failed to create database");

    let pool = PgPool::connect_with(config.with_db())
        .await
        .expect("failed to connect to database");
    run_migrations(&pool)
        .await
        .expect("failed to run database migrations");
    pool
}

pub async fn spawn_postgres_app() -> (TestApp, PgPool) {
    let mut configuration = clientes::get_configuration().expect("failed to read configuration");
    configuration.set_database_name(Uuid::new_v4().to_string());

    let pool = configure_database(&configuration.database).await;
    let app = spawn_app_with(Arc::new(CustomerDatabase::new(pool.clone()))).await;
    (app, pool)
}
