use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::{
    database::CustomerRepository,
    models::{Customer, CustomerPayload},
    validators::validate_customer,
    ClientesError, Result, StoreOperation,
};

#[derive(Debug, Serialize)]
struct ListEnvelope {
    message: &'static str,
    clientes: Vec<Customer>,
}

#[derive(Debug, Serialize)]
struct CreatedEnvelope {
    message: &'static str,
    cliente: Customer,
}

#[derive(Debug, Serialize)]
struct UpdatedEnvelope {
    message: &'static str,
    cliente_updated: Customer,
}

#[derive(Debug, Serialize)]
struct Confirmation {
    message: String,
}

/// `GET /api/clientes`
#[tracing::instrument(name = "list_clientes", skip(repository))]
pub async fn list_clientes(
    repository: web::Data<dyn CustomerRepository>,
) -> Result<HttpResponse> {
    let clientes = Customer::find_all(repository.get_ref())
        .await
        .map_err(|e| ClientesError::store(StoreOperation::Query, e))?;

    Ok(HttpResponse::Ok().json(ListEnvelope {
        message: "Consulta realizada de manera exitosa",
        clientes,
    }))
}

/// `GET /api/clientes/{id}`
///
/// Unlike every other route the record is returned bare, without an envelope.
#[tracing::instrument(name = "get_cliente", skip(repository))]
pub async fn get_cliente(
    id: web::Path<i64>,
    repository: web::Data<dyn CustomerRepository>,
) -> Result<HttpResponse> {
    let id = id.into_inner();
    let cliente = Customer::find_by_id(id, repository.get_ref())
        .await
        .map_err(|e| {
            if e.is_unexpected() {
                ClientesError::internal(e)
            } else {
                ClientesError::store(StoreOperation::Query, e)
            }
        })?
        .ok_or(ClientesError::NotFound(id))?;

    Ok(HttpResponse::Ok().json(cliente))
}

/// `POST /api/clientes`
#[tracing::instrument(name = "create_cliente", skip(payload, repository))]
pub async fn create_cliente(
    payload: web::Json<CustomerPayload>,
    repository: web::Data<dyn CustomerRepository>,
) -> Result<HttpResponse> {
    let fields = validate_customer(payload.into_inner()).map_err(ClientesError::Validation)?;

    let cliente = Customer::new(fields)
        .save(repository.get_ref())
        .await
        .map_err(|e| ClientesError::store(StoreOperation::Insert, e))?;

    Ok(HttpResponse::Created().json(CreatedEnvelope {
        message: "El cliente se ha creado con exito",
        cliente,
    }))
}

/// `PUT /api/clientes/{id}`
///
/// Only `nombre`, `apellido` and `email` are taken from the body. Answers
/// `201 Created` on success, the same as creation.
#[tracing::instrument(name = "update_cliente", skip(payload, repository))]
pub async fn update_cliente(
    id: web::Path<i64>,
    payload: web::Json<CustomerPayload>,
    repository: web::Data<dyn CustomerRepository>,
) -> Result<HttpResponse> {
    let id = id.into_inner();
    let fields = validate_customer(payload.into_inner()).map_err(ClientesError::Validation)?;

    let mut cliente = Customer::find_by_id(id, repository.get_ref())
        .await
        .map_err(|e| ClientesError::store(StoreOperation::Update, e))?
        .ok_or(ClientesError::NotFound(id))?;
    cliente.apply(fields);

    let cliente_updated = cliente
        .save(repository.get_ref())
        .await
        .map_err(|e| ClientesError::store(StoreOperation::Update, e))?;

    Ok(HttpResponse::Created().json(UpdatedEnvelope {
        message: "Cliente actualizado de manera correcta en la base de datos!",
        cliente_updated,
    }))
}

/// `DELETE /api/clientes/{id}`
///
/// Deleting an id that doesn't exist still reports success.
#[tracing::instrument(name = "delete_cliente", skip(repository))]
pub async fn delete_cliente(
    id: web::Path<i64>,
    repository: web::Data<dyn CustomerRepository>,
) -> Result<HttpResponse> {
    let id = id.into_inner();
    Customer::delete(id, repository.get_ref())
        .await
        .map_err(|e| ClientesError::store(StoreOperation::Delete, e))?;

    Ok(HttpResponse::Ok().json(Confirmation {
        message: format!(
            "Cliente con el ID {} ha sido eliminado de manera existosa!",
            id
        ),
    }))
}
