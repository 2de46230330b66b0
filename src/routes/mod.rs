//! HTTP route handlers for the Libreria API.
//!
//! - `libros`: CRUD operations over the `libro` table
//! - `health`: liveness and readiness probes

use axum::{
    routing::{get, put},
    Router,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs;
use crate::state::AppState;

pub mod health;
pub mod libros;

/// Assemble the application router: API routes plus the documentation
/// endpoints (Swagger UI at `/api-docs`, raw document at `/api-docs-json`).
/// Middleware layers are applied by the caller.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/readyz", get(health::readyz))
        .route("/libro", get(libros::list_libros).post(libros::create_libro))
        .route(
            "/libro/{idLibro}",
            put(libros::update_libro).delete(libros::delete_libro),
        )
        .with_state(state)
        .merge(SwaggerUi::new("/api-docs").url("/api-docs-json", docs::openapi()))
}
