//! HTTP handlers and route configuration.

mod health;
mod notes;

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, web};

use crate::middleware::error::AppError;

/// A body that is not declared as JSON never reaches a handler, so it fails like any
/// other request the store cannot serve. Undecodable JSON is the caller's fault.
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    match err {
        JsonPayloadError::ContentType => AppError::Internal(err.to_string()).into(),
        _ => AppError::BadRequest(err.to_string()).into(),
    }
}

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    // A non-numeric id is rejected as the store would reject it
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::Internal(err.to_string()).into()),
    )
    .service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            // Registered before `/notes/{id}` so "search" is never taken for an id
            .route("/notes/search", web::get().to(notes::search_notes))
            .service(
                web::resource("/notes")
                    .route(web::get().to(notes::list_notes))
                    .route(web::post().to(notes::create_note)),
            )
            .service(
                web::resource("/notes/{id}")
                    .route(web::put().to(notes::update_note))
                    .route(web::delete().to(notes::delete_note)),
            ),
    );
}
