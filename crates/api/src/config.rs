use std::net::IpAddr;

use axum::http::HeaderValue;
use roster_db::DbConfig;

/// A configuration variable was set to a value that could not be parsed.
#[derive(Debug, thiserror::Error)]
#[error("{var} must be a valid {expected}, got {value:?}")]
pub struct ConfigError {
    pub var: &'static str,
    pub expected: &'static str,
    pub value: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from the comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long to wait for pooled connections to close on shutdown (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// SQLite connection settings.
    pub database: DbConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                 | Default                 |
    /// |-------------------------|-------------------------|
    /// | `HOST`                  | `0.0.0.0`               |
    /// | `PORT`                  | `8000`                  |
    /// | `DATABASE_URL`          | `sqlite://database.db`  |
    /// | `DB_MAX_CONNECTIONS`    | `5`                     |
    /// | `CORS_ORIGINS`          | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                    |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`                    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = parse(&var("HOST", "0.0.0.0"), "HOST", "IP address")?;
        let port = parse(&var("PORT", "8000"), "PORT", "u16")?;

        let cors_origins = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| ConfigError {
                    var: "CORS_ORIGINS",
                    expected: "header value",
                    value: origin.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout_secs = parse(
            &var("REQUEST_TIMEOUT_SECS", "30"),
            "REQUEST_TIMEOUT_SECS",
            "u64",
        )?;
        let shutdown_timeout_secs = parse(
            &var("SHUTDOWN_TIMEOUT_SECS", "30"),
            "SHUTDOWN_TIMEOUT_SECS",
            "u64",
        )?;

        let database = DbConfig {
            url: var("DATABASE_URL", "sqlite://database.db"),
            max_connections: parse(&var("DB_MAX_CONNECTIONS", "5"), "DB_MAX_CONNECTIONS", "u32")?,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            database,
        })
    }
}

fn parse<T: std::str::FromStr>(
    value: &str,
    var: &'static str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError {
        var,
        expected,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = load(&[]).unwrap();
        assert_eq!(config.host.to_string(), "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.shutdown_timeout_secs, 30);
        assert_eq!(config.database.url, "sqlite://database.db");
        assert_eq!(config.database.max_connections, 5);
    }

    #[test]
    fn overrides_are_read() {
        let config = load(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9090"),
            ("DATABASE_URL", "sqlite://data/roster.db"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
        ])
        .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.database.url, "sqlite://data/roster.db");
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn invalid_port_is_reported() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert_eq!(err.var, "PORT");
        assert_eq!(err.to_string(), "PORT must be a valid u16, got \"eighty\"");
    }

    #[test]
    fn invalid_host_is_reported() {
        let err = load(&[("HOST", "not-an-ip")]).unwrap_err();
        assert_eq!(err.var, "HOST");
    }
}
