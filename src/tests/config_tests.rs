#[cfg(test)]
mod tests {
    use crate::config::{self, AppConfig};
    use std::env;
    use std::fs;
    use std::sync::Mutex;

    /// `load()` reads process-wide environment variables, so tests that touch
    /// them must not run concurrently.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_guard() -> std::sync::MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.host, "127.0.0.1");
        assert_eq!(config.database.port, 3306);
        assert_eq!(config.database.user, "root");
        assert_eq!(config.database.password, "");
        assert_eq!(config.database.name, "libreria");
        assert_eq!(config.database.max_connections, 8);
    }

    #[test]
    fn test_valid_config_does_not_error() {
        let _guard = env_guard();
        let result = config::load();
        assert!(result.is_ok());
    }

    #[test]
    fn test_invalid_server_port() {
        let _guard = env_guard();
        env::set_var("LIBRERIA__SERVER__PORT", "0");
        let result = config::load();
        env::remove_var("LIBRERIA__SERVER__PORT");

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("invalid server.port"));
    }

    #[test]
    fn test_config_from_env() {
        let _guard = env_guard();
        env::set_var("LIBRERIA__SERVER__HOST", "127.0.0.1");
        env::set_var("LIBRERIA__SERVER__PORT", "8080");
        env::set_var("LIBRERIA__DATABASE__MAX_CONNECTIONS", "16");

        let result = config::load();

        env::remove_var("LIBRERIA__SERVER__HOST");
        env::remove_var("LIBRERIA__SERVER__PORT");
        env::remove_var("LIBRERIA__DATABASE__MAX_CONNECTIONS");

        let config = result.unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.max_connections, 16);
    }

    #[test]
    fn test_db_env_overrides() {
        let _guard = env_guard();
        env::set_var("DB_HOST", "db.internal");
        env::set_var("DB_USER", "lector");
        env::set_var("DB_PASSWORD", "s3cr3t");
        env::set_var("DB_NAME", "biblioteca");
        env::set_var("DB_PORT", "3307");

        let result = config::load();

        env::remove_var("DB_HOST");
        env::remove_var("DB_USER");
        env::remove_var("DB_PASSWORD");
        env::remove_var("DB_NAME");
        env::remove_var("DB_PORT");

        let config = result.unwrap();
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.user, "lector");
        assert_eq!(config.database.password, "s3cr3t");
        assert_eq!(config.database.name, "biblioteca");
        assert_eq!(config.database.port, 3307);
    }

    #[test]
    fn test_db_env_beats_prefixed_env() {
        let _guard = env_guard();
        env::set_var("LIBRERIA__DATABASE__HOST", "prefixed.example");
        env::set_var("DB_HOST", "plain.example");

        let result = config::load();

        env::remove_var("LIBRERIA__DATABASE__HOST");
        env::remove_var("DB_HOST");

        assert_eq!(result.unwrap().database.host, "plain.example");
    }

    #[test]
    fn test_invalid_db_port() {
        let _guard = env_guard();
        env::set_var("DB_PORT", "notaport");
        let result = config::load();
        env::remove_var("DB_PORT");

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("invalid DB_PORT"));
    }

    #[test]
    fn test_config_from_file() {
        let _guard = env_guard();
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("custom.toml");
        fs::write(
            &config_path,
            r#"
[server]
host = "192.168.1.1"
port = 9000

[database]
name = "catalogo"
max_connections = 4
"#,
        )
        .unwrap();

        env::set_var("LIBRERIA_CONFIG", config_path.to_str().unwrap());
        let result = config::load();
        env::remove_var("LIBRERIA_CONFIG");

        let config = result.unwrap();
        assert_eq!(config.server.host, "192.168.1.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.database.name, "catalogo");
        assert_eq!(config.database.max_connections, 4);
        // Keys the file does not set keep their defaults
        assert_eq!(config.database.port, 3306);
    }

    #[test]
    fn test_config_priority() {
        let _guard = env_guard();
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("custom.toml");
        fs::write(
            &config_path,
            r#"
[server]
port = 7000
"#,
        )
        .unwrap();

        env::set_var("LIBRERIA_CONFIG", config_path.to_str().unwrap());
        env::set_var("LIBRERIA__SERVER__PORT", "8888");

        let result = config::load();

        env::remove_var("LIBRERIA_CONFIG");
        env::remove_var("LIBRERIA__SERVER__PORT");

        // Environment variables override file config
        assert_eq!(result.unwrap().server.port, 8888);
    }

    #[test]
    fn test_empty_database_name_is_rejected() {
        let _guard = env_guard();
        env::set_var("DB_NAME", "");
        let result = config::load();
        env::remove_var("DB_NAME");

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("database.name"));
    }

    #[test]
    fn test_zero_max_connections_is_rejected() {
        let _guard = env_guard();
        env::set_var("LIBRERIA__DATABASE__MAX_CONNECTIONS", "0");
        let result = config::load();
        env::remove_var("LIBRERIA__DATABASE__MAX_CONNECTIONS");

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("max_connections"));
    }
}
