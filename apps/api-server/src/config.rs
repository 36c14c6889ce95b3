//! Application configuration loaded from environment variables.

use std::env;

use pgo_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    /// Empty means any origin is allowed.
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL")
            .or_else(|_| env::var("DB_DSN"))
            .ok()
            .filter(|url| !url.is_empty())
            .map(|url| DatabaseConfig {
                url,
                max_connections: parse_var("DB_MAX_CONNECTIONS").unwrap_or(10),
                min_connections: parse_var("DB_MIN_CONNECTIONS").unwrap_or(1),
                auto_migrate: env::var("DB_AUTO_MIGRATE")
                    .map(|v| v != "false" && v != "0")
                    .unwrap_or(true),
            });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_var("PORT").unwrap_or(3000),
            database,
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_default(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}

/// Split a comma-separated origin list. `*` clears the list.
fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect();

    if origins.iter().any(|o| o == "*") {
        return Vec::new();
    }
    origins
}
