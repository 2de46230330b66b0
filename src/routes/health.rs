use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::state::AppState;

/// Liveness probe - static, touches nothing.
#[utoipa::path(
    get,
    path = "/healthz",
    tag = "salud",
    responses((status = 200, description = "El proceso está vivo", body = String))
)]
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// Readiness probe: checks MySQL connectivity with timeout protection.
#[utoipa::path(
    get,
    path = "/readyz",
    tag = "salud",
    responses(
        (status = 200, description = "La base de datos responde", body = String),
        (status = 503, description = "La base de datos no responde", body = String)
    )
)]
pub async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    let query = sqlx::query("SELECT 1").fetch_one(&state.db);
    match tokio::time::timeout(std::time::Duration::from_secs(5), query).await {
        Ok(Ok(_)) => (StatusCode::OK, "ready").into_response(),
        Ok(Err(e)) => (StatusCode::SERVICE_UNAVAILABLE, format!("not ready: {}", e)).into_response(),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "not ready: timeout").into_response(),
    }
}
