use anyhow::{Context, Result, anyhow};
use std::str::FromStr;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DB_MIN_CONN: u32 = 1;
const DEFAULT_DB_MAX_CONN: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub run_migrations: bool,
    pub port: u16,
    pub db_min_conn: u32,
    pub db_max_conn: u32,
    pub otel_endpoint: Option<String>,
    pub dev_mode: bool,
    pub enable_file_log: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, so tests can feed values
    /// without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;

        let run_migrations = match lookup("RUN_MIGRATIONS").as_deref() {
            None | Some("true") => true,
            Some("false") => false,
            Some(other) => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let db_min_conn = parse_or(&lookup, "DB_MIN_CONN", DEFAULT_DB_MIN_CONN)?;
        let db_max_conn = parse_or(&lookup, "DB_MAX_CONN", DEFAULT_DB_MAX_CONN)?;

        if db_max_conn == 0 || db_min_conn > db_max_conn {
            return Err(anyhow!(
                "DB_MAX_CONN must be positive and >= DB_MIN_CONN, got min={} max={}",
                db_min_conn,
                db_max_conn
            ));
        }

        let otel_endpoint = lookup("OTEL_ENDPOINT").filter(|v| !v.trim().is_empty());

        let dev_mode = lookup("DEV_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);
        let enable_file_log = lookup("ENABLE_FILE_LOG")
            .map(|v| v == "true")
            .unwrap_or(false);

        Ok(Self {
            database_url,
            run_migrations,
            port,
            db_min_conn,
            db_max_conn,
            otel_endpoint,
            dev_mode,
            enable_file_log,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid integer, got '{raw}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/admin")]).unwrap();

        assert_eq!(config.port, 8000);
        assert!(config.run_migrations);
        assert_eq!(config.db_min_conn, 1);
        assert_eq!(config.db_max_conn, 5);
        assert_eq!(config.otel_endpoint, None);
        assert!(!config.dev_mode);
    }

    #[test]
    fn missing_database_url_fails() {
        let err = config_from(&[("PORT", "9000")]).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(config_from(&[("DATABASE_URL", "x"), ("PORT", "eighty")]).is_err());
        assert!(config_from(&[("DATABASE_URL", "x"), ("RUN_MIGRATIONS", "yes")]).is_err());
        assert!(
            config_from(&[("DATABASE_URL", "x"), ("DB_MIN_CONN", "9"), ("DB_MAX_CONN", "3")])
                .is_err()
        );
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = config_from(&[
            ("DATABASE_URL", "x"),
            ("PORT", "3000"),
            ("RUN_MIGRATIONS", "false"),
            ("OTEL_ENDPOINT", "http://otel-collector:4317"),
            ("DEV_MODE", "1"),
        ])
        .unwrap();

        assert_eq!(config.port, 3000);
        assert!(!config.run_migrations);
        assert_eq!(
            config.otel_endpoint.as_deref(),
            Some("http://otel-collector:4317")
        );
        assert!(config.dev_mode);
    }
}
