//! Application configuration loaded from environment variables.

use std::str::FromStr;

use overflow_infra::DatabaseConfig;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs on in-memory storage.
    pub database: Option<DatabaseConfig>,
    /// Apply pending schema migrations on startup.
    pub run_migrations: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .map(|url| DatabaseConfig {
                url,
                max_connections: parsed(&lookup, "DB_MAX_CONNECTIONS").unwrap_or(20),
                min_connections: parsed(&lookup, "DB_MIN_CONNECTIONS").unwrap_or(2),
            });

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parsed(&lookup, "PORT").unwrap_or(8080),
            database,
            run_migrations: lookup("RUN_MIGRATIONS")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}

fn parsed<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key).and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_database() {
        let config = config(&[]);

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.database.is_none());
        assert!(config.run_migrations);
    }

    #[test]
    fn test_database_settings() {
        let config = config(&[
            ("DATABASE_URL", "postgres://localhost/overflow"),
            ("DB_MAX_CONNECTIONS", "50"),
            ("DB_MIN_CONNECTIONS", "not-a-number"),
            ("RUN_MIGRATIONS", "false"),
            ("PORT", "9000"),
        ]);

        let database = config.database.unwrap();
        assert_eq!(database.url, "postgres://localhost/overflow");
        assert_eq!(database.max_connections, 50);
        assert_eq!(database.min_connections, 2);
        assert!(!config.run_migrations);
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_blank_database_url_means_in_memory() {
        assert!(config(&[("DATABASE_URL", "  ")]).database.is_none());
    }
}
