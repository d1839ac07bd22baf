#![allow(dead_code)]
mod app;
mod database;
mod failing;

pub use app::{spawn_app, spawn_app_with, TestApp, ALLOWED_ORIGIN};
pub use database::{configure_database, spawn_postgres_app};
pub use failing::{Fail, FailingRepository};

use lazy_static::lazy_static;
use serde_json::{json, Value};

use clientes::telemetry::{generate_subscriber, init_subscriber};

lazy_static! {
    /// To ensure logs are only outputted in tests when required, by default
    /// tests run with no logs being captured
    ///
    /// In order to set logs to be captured during tests run them with:
    /// `TEST_LOG=true cargo test | bunyan`
    pub static ref TRACING: () = {
        let name = String::from("test");
        let filter = String::from("debug");
        if std::env::var("TEST_LOG").is_ok() {
            init_subscriber(generate_subscriber(name, filter, std::io::stdout));
        } else {
            init_subscriber(generate_subscriber(name, filter, std::io::sink));
        }
    };

    pub static ref DEFAULT_CLIENTE: Value = {
        json!({
            "nombre": "Juan",
            "apellido": "Perez",
            "email": "juan@x.com"
        })
    };
}

/// Today's date the way `createAt` is rendered
pub fn today() -> String {
    chrono::Local::now().date_naive().to_string()
}
