use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::{database::StoreError, validators::FieldViolation};

/// The store operation that was in flight when the store failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    Query,
    Insert,
    Update,
    Delete,
}

impl StoreOperation {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Query => "Ocurrio un error al consultar la base de datos.",
            Self::Insert => "Ocurrio un error al persistir la data en la base de datos.",
            Self::Update => "Ocurrio un error al actualizar el cliente en la base de datos.",
            Self::Delete => "Ocurrio un error al eliminar el cliente en la base de datos.",
        }
    }
}

const INTERNAL_ERROR_MESSAGE: &str = "Ocurrio un error interno en el servidor.";

#[derive(Debug, Error)]
pub enum ClientesError {
    #[error("Request failed validation")]
    Validation(Vec<FieldViolation>),

    #[error("Provided data was malformed: {0}")]
    MalformedBody(String),

    #[error("El cliente con el ID:{0} No existe en la base de datos.")]
    NotFound(i64),

    #[error("{}", .operation.message())]
    Store {
        operation: StoreOperation,
        #[source]
        source: StoreError,
    },

    #[error("{}", INTERNAL_ERROR_MESSAGE)]
    Internal(String),
}

impl ClientesError {
    pub fn store(operation: StoreOperation, source: StoreError) -> Self {
        error!(err = ?source, ?operation, "customer store error occurred");
        Self::Store { operation, source }
    }

    pub fn internal(source: StoreError) -> Self {
        error!(err = ?source, "unexpected error occurred");
        Self::Internal(source.to_string())
    }
}

#[derive(Debug, Serialize)]
struct Errors {
    errors: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    message: &'a str,
}

#[derive(Debug, Serialize)]
struct Failure<'a> {
    message: &'a str,
    error: &'a str,
}

impl ResponseError for ClientesError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store { .. } | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        match self {
            Self::Validation(violations) => response.json(Errors {
                errors: violations.iter().map(ToString::to_string).collect(),
            }),
            Self::MalformedBody(error) => response.json(Errors {
                errors: vec![error.clone()],
            }),
            Self::NotFound(_) => response.json(Message {
                message: &self.to_string(),
            }),
            Self::Store { operation, source } => response.json(Failure {
                message: operation.message(),
                error: &source.detail(),
            }),
            Self::Internal(error) => response.json(Failure {
                message: INTERNAL_ERROR_MESSAGE,
                error,
            }),
        }
    }
}
