use reqwest::{Client, Response};
use serde_json::Value;
use std::fmt::Display;
use std::net::TcpListener;
use std::sync::Arc;

use clientes::{
    configuration::ApplicationSettings,
    database::{CustomerRepository, InMemoryCustomerRepository},
};

use crate::helpers::TRACING;

pub const ALLOWED_ORIGIN: &str = "http://localhost:4200";

pub struct TestApp {
    pub address: String,
    pub client: Client,
}

/// Spawns the app on a random port, backed by an empty in-memory store
pub async fn spawn_app() -> TestApp {
    spawn_app_with(Arc::new(InMemoryCustomerRepository::new())).await
}

pub async fn spawn_app_with(repository: Arc<dyn CustomerRepository>) -> TestApp {
    lazy_static::initialize(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    let settings = ApplicationSettings {
        port,
        host: String::from("127.0.0.1"),
        allowed_origin: String::from(ALLOWED_ORIGIN),
    };
    let server =
        clientes::build_app(listener, repository, &settings).expect("failed to bind address");

    let _ = tokio::spawn(server);
    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        client: Client::new(),
    }
}

impl TestApp {
    pub fn clientes_url(&self) -> String {
        format!("{}/api/clientes", self.address)
    }

    pub fn cliente_url(&self, id: impl Display) -> String {
        format!("{}/api/clientes/{}", self.address, id)
    }

    pub async fn list_clientes(&self) -> Response {
        self.client
            .get(&self.clientes_url())
            .send()
            .await
            .expect("failed to execute request")
    }

    pub async fn get_cliente(&self, id: impl Display) -> Response {
        self.client
            .get(&self.cliente_url(id))
            .send()
            .await
            .expect("failed to execute request")
    }

    pub async fn post_cliente(&self, body: &Value) -> Response {
        self.client
            .post(&self.clientes_url())
            .json(body)
            .send()
            .await
            .expect("failed to execute request")
    }

    pub async fn put_cliente(&self, id: impl Display, body: &Value) -> Response {
        self.client
            .put(&self.cliente_url(id))
            .json(body)
            .send()
            .await
            .expect("failed to execute request")
    }

    pub async fn delete_cliente(&self, id: impl Display) -> Response {
        self.client
            .delete(&self.cliente_url(id))
            .send()
            .await
            .expect("failed to execute request")
    }

    /// Creates a customer and returns the `cliente` object from the response
    pub async fn create_cliente(&self, body: &Value) -> Value {
        let response = self.post_cliente(body).await;
        assert_eq!(response.status().as_u16(), 201);
        let body = response.json::<Value>().await.expect("invalid json body");
        body["cliente"].clone()
    }
}
