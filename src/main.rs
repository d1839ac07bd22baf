use clientes::{
    build_app,
    configuration::StoreBackend,
    database::{run_migrations, CustomerDatabase, CustomerRepository, InMemoryCustomerRepository},
    get_configuration,
    telemetry::{generate_subscriber, init_subscriber},
};
use sqlx::postgres::PgPoolOptions;
use std::net::TcpListener;
use std::sync::Arc;
use tracing::warn;

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    let subscriber = generate_subscriber(
        String::from("clientes"),
        String::from("info"),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("failed to read configuration");

    let repository: Arc<dyn CustomerRepository> = match configuration.database.backend {
        StoreBackend::Postgres => {
            let connection = PgPoolOptions::new()
                .acquire_timeout(std::time::Duration::from_secs(2))
                .connect_with(configuration.database.with_db())
                .await
                .expect("failed to connect to database");
            run_migrations(&connection)
                .await
                .expect("failed to run database migrations");
            Arc::new(CustomerDatabase::new(connection))
        }
        StoreBackend::Memory => {
            warn!("using the in-memory customer store, records are lost on shutdown");
            Arc::new(InMemoryCustomerRepository::new())
        }
    };

    let addr = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(addr)?;

    build_app(listener, repository, &configuration.application)?.await
}
