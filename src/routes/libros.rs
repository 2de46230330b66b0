use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    state::AppState,
    types::{Libro, LibroInput, Mensaje},
};

const SELECT_COLUMNS: &str =
    "SELECT idLibro, Nombre, Genero, SubGenero, Autor, Idioma, Editorial, `Año` FROM libro";

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Raw query value; parsed to an integer before it reaches the driver.
    #[serde(rename = "idLibro")]
    pub id_libro: Option<String>,
}

/// List the whole catalog, or look a single book up by `idLibro`.
#[utoipa::path(
    get,
    path = "/libro",
    tag = "libros",
    params(
        ("idLibro" = Option<i32>, Query, description = "Identificador del libro a consultar")
    ),
    responses(
        (status = 200, description = "Libros encontrados", body = [Libro]),
        (status = 400, description = "idLibro no es un entero", body = crate::types::ErrorBody),
        (status = 404, description = "Libro no encontrado", body = crate::types::ErrorBody),
        (status = 500, description = "Error en la consulta a la base de datos", body = crate::types::ErrorBody)
    )
)]
pub async fn list_libros(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Libro>>> {
    let libros = match params.id_libro {
        None => sqlx::query_as::<_, Libro>(SELECT_COLUMNS).fetch_all(&state.db).await?,
        Some(raw) => {
            // The identifier is bound as a statement parameter, never spliced
            // into the SQL text.
            let id: i32 = raw.trim().parse().map_err(|_| {
                AppError::InvalidInput(format!("idLibro no es un entero: {}", raw))
            })?;
            let libros = sqlx::query_as::<_, Libro>(
                "SELECT idLibro, Nombre, Genero, SubGenero, Autor, Idioma, Editorial, `Año` \
                 FROM libro WHERE idLibro = ?",
            )
            .bind(id)
            .fetch_all(&state.db)
            .await?;
            if libros.is_empty() {
                return Err(AppError::NotFound("Libro no encontrado".to_string()));
            }
            libros
        }
    };
    Ok(Json(libros))
}

/// Insert a new book and return the stored row, identifier included.
#[utoipa::path(
    post,
    path = "/libro",
    tag = "libros",
    request_body = LibroInput,
    responses(
        (status = 201, description = "Libro insertado", body = Libro),
        (status = 422, description = "Cuerpo de la petición inválido"),
        (status = 500, description = "Error en la consulta a la base de datos", body = crate::types::ErrorBody)
    )
)]
pub async fn create_libro(
    State(state): State<AppState>,
    Json(input): Json<LibroInput>,
) -> AppResult<impl IntoResponse> {
    let result = sqlx::query(
        "INSERT INTO libro (Nombre, Genero, SubGenero, Autor, Idioma, Editorial, `Año`) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&input.nombre)
    .bind(&input.genero)
    .bind(&input.sub_genero)
    .bind(&input.autor)
    .bind(&input.idioma)
    .bind(&input.editorial)
    .bind(input.anio)
    .execute(&state.db)
    .await?;

    let id = result.last_insert_id() as i32;
    tracing::info!(id, "libro insertado");
    Ok((StatusCode::CREATED, Json(Libro::from_input(id, input))))
}

/// Overwrite all seven fields of an existing book.
#[utoipa::path(
    put,
    path = "/libro/{idLibro}",
    tag = "libros",
    params(("idLibro" = i32, Path, description = "Identificador del libro a actualizar")),
    request_body = LibroInput,
    responses(
        (status = 200, description = "Libro actualizado", body = Mensaje),
        (status = 404, description = "No hay libro con ese identificador", body = crate::types::ErrorBody),
        (status = 422, description = "Cuerpo de la petición inválido"),
        (status = 500, description = "Error en la consulta a la base de datos", body = crate::types::ErrorBody)
    )
)]
pub async fn update_libro(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<LibroInput>,
) -> AppResult<Json<Mensaje>> {
    let result = sqlx::query(
        "UPDATE libro SET Nombre = ?, Genero = ?, SubGenero = ?, Autor = ?, \
         Idioma = ?, Editorial = ?, `Año` = ? WHERE idLibro = ?",
    )
    .bind(&input.nombre)
    .bind(&input.genero)
    .bind(&input.sub_genero)
    .bind(&input.autor)
    .bind(&input.idioma)
    .bind(&input.editorial)
    .bind(input.anio)
    .bind(id)
    .execute(&state.db)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("no se pudo actualizar".to_string()));
    }
    tracing::debug!(id, "libro actualizado");
    Ok(Json(Mensaje::new("Libro actualizado")))
}

/// Delete a book by identifier.
#[utoipa::path(
    delete,
    path = "/libro/{idLibro}",
    tag = "libros",
    params(("idLibro" = i32, Path, description = "Identificador del libro a eliminar")),
    responses(
        (status = 200, description = "Libro eliminado", body = Mensaje),
        (status = 404, description = "No hay libro con ese identificador", body = crate::types::ErrorBody),
        (status = 500, description = "Error en la consulta a la base de datos", body = crate::types::ErrorBody)
    )
)]
pub async fn delete_libro(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Mensaje>> {
    let result = sqlx::query("DELETE FROM libro WHERE idLibro = ?")
        .bind(id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Ya esta eliminado".to_string()));
    }
    tracing::debug!(id, "libro eliminado");
    Ok(Json(Mensaje::new("Libro eliminado")))
}
