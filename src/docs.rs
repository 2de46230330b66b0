//! OpenAPI document for the Libreria API.
//!
//! The UI is mounted at `/api-docs`, the raw JSON at `/api-docs-json`; both
//! are wired up in [`crate::routes::router`].

use utoipa::OpenApi;

use crate::types::{ErrorBody, Libro, LibroInput, Mensaje};

#[derive(OpenApi)]
#[openapi(
    info(title = "API Libreria", version = "1.0.0"),
    servers((url = "http://localhost:3000", description = "Servidor local")),
    paths(
        crate::routes::libros::list_libros,
        crate::routes::libros::create_libro,
        crate::routes::libros::update_libro,
        crate::routes::libros::delete_libro,
        crate::routes::health::healthz,
        crate::routes::health::readyz,
    ),
    components(schemas(Libro, LibroInput, Mensaje, ErrorBody)),
    tags(
        (name = "libros", description = "Operaciones CRUD sobre la tabla libro"),
        (name = "salud", description = "Sondas de disponibilidad del servicio")
    )
)]
pub struct ApiDoc;

/// The served document: the derive output with the repository README as the
/// long-form description, so the docs page doubles as the project manual.
pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.description = Some(include_str!("../README.md").to_owned());
    doc
}
