use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the `libro` table.
///
/// Wire keys match the Spanish column names of the table; the Rust fields
/// are snake_case and mapped via `serde`/`sqlx` renames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Libro {
    /// Server-generated primary key. Unique and immutable once assigned.
    #[serde(rename = "idLibro")]
    #[sqlx(rename = "idLibro")]
    pub id: i32,
    #[serde(rename = "Nombre")]
    #[sqlx(rename = "Nombre")]
    pub nombre: String,
    #[serde(rename = "Genero")]
    #[sqlx(rename = "Genero")]
    pub genero: String,
    #[serde(rename = "SubGenero")]
    #[sqlx(rename = "SubGenero")]
    pub sub_genero: String,
    #[serde(rename = "Autor")]
    #[sqlx(rename = "Autor")]
    pub autor: String,
    #[serde(rename = "Idioma")]
    #[sqlx(rename = "Idioma")]
    pub idioma: String,
    #[serde(rename = "Editorial")]
    #[sqlx(rename = "Editorial")]
    pub editorial: String,
    #[serde(rename = "Año")]
    #[sqlx(rename = "Año")]
    pub anio: i32,
}

/// Request body for POST/PUT: the seven non-key fields of a book.
/// All fields are required; their content is free-form and unvalidated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LibroInput {
    #[serde(rename = "Nombre")]
    pub nombre: String,
    #[serde(rename = "Genero")]
    pub genero: String,
    #[serde(rename = "SubGenero")]
    pub sub_genero: String,
    #[serde(rename = "Autor")]
    pub autor: String,
    #[serde(rename = "Idioma")]
    pub idioma: String,
    #[serde(rename = "Editorial")]
    pub editorial: String,
    #[serde(rename = "Año")]
    pub anio: i32,
}

impl Libro {
    /// Attach the identifier assigned by the database to an accepted input.
    pub fn from_input(id: i32, input: LibroInput) -> Self {
        Self {
            id,
            nombre: input.nombre,
            genero: input.genero,
            sub_genero: input.sub_genero,
            autor: input.autor,
            idioma: input.idioma,
            editorial: input.editorial,
            anio: input.anio,
        }
    }
}

/// Confirmation body for update/delete operations.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Mensaje {
    pub message: String,
}

impl Mensaje {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Failure body: a single human-readable message.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}
