use actix_cors::Cors;
use actix_web::{
    dev::Server,
    error::{JsonPayloadError, PathError},
    http::header::{ACCEPT, CONTENT_TYPE},
    web, App, HttpRequest, HttpServer,
};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use crate::{
    configuration::ApplicationSettings, database::CustomerRepository, routes::*, ClientesError,
};

const CORS_MAX_AGE_SECONDS: usize = 3600;

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ClientesError::MalformedBody(err.to_string()).into()
}

fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    ClientesError::MalformedBody(format!("El campo 'id':{}", err)).into()
}

pub fn build_app(
    listener: TcpListener,
    repository: Arc<dyn CustomerRepository>,
    settings: &ApplicationSettings,
) -> Result<Server, std::io::Error> {
    let repository = web::Data::from(repository);
    let allowed_origin = settings.allowed_origin.clone();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(
                Cors::default()
                    .allowed_origin(&allowed_origin)
                    .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
                    .allowed_headers(vec![ACCEPT, CONTENT_TYPE])
                    .max_age(CORS_MAX_AGE_SECONDS),
            )
            .app_data(repository.clone())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .route("/health_check", web::get().to(health_check))
            .service(
                web::scope("/api")
                    .service(
                        web::resource("/clientes")
                            .route(web::get().to(list_clientes))
                            .route(web::post().to(create_cliente)),
                    )
                    .service(
                        web::resource("/clientes/{id}")
                            .route(web::get().to(get_cliente))
                            .route(web::put().to(update_cliente))
                            .route(web::delete().to(delete_cliente)),
                    ),
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}
