//! Cross-origin policy: any origin may call the API.

use actix_cors::Cors;
use actix_web::http::header;

/// Build the CORS middleware. Preflight requests are answered here.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
}
