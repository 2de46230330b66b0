use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};

use crate::config::DatabaseConfig;

/// Driver options assembled from configuration. Credentials are passed to
/// the driver directly, never interpolated into a URL.
pub fn connect_options(cfg: &DatabaseConfig) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&cfg.host)
        .port(cfg.port)
        .username(&cfg.user)
        .password(&cfg.password)
        .database(&cfg.name)
}

/// Open the connection pool. This establishes (and validates) a first
/// connection, so an unreachable server fails startup immediately.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<MySqlPool> {
    let pool = MySqlPoolOptions::new()
        .max_connections(cfg.max_connections)
        .connect_with(connect_options(cfg))
        .await?;
    Ok(pool)
}

/// Ensure the `libro` table exists so a fresh database can serve requests.
/// Idempotent; a schema already managed elsewhere is left untouched.
pub async fn init_db(pool: &MySqlPool) -> anyhow::Result<()> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS libro (
            idLibro INT NOT NULL AUTO_INCREMENT,
            Nombre VARCHAR(255) NOT NULL,
            Genero VARCHAR(255) NOT NULL,
            SubGenero VARCHAR(255) NOT NULL,
            Autor VARCHAR(255) NOT NULL,
            Idioma VARCHAR(255) NOT NULL,
            Editorial VARCHAR(255) NOT NULL,
            `Año` INT NOT NULL,
            PRIMARY KEY (idLibro)
        ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4"#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
