//! Health check endpoint.

use actix_web::HttpResponse;
use notes_shared::HealthResponse;

/// GET /api/health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::ok())
}
