//! Environment configuration. Loaded once at startup; a missing database
//! URL is fatal.

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 10000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
}

impl AppConfig {
    /// Read `DATABASE_URL` (required) and `PORT` (optional, default 10000).
    pub fn from_env() -> Result<AppConfig, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidVar {
                name: "PORT",
                value: raw,
            })?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(AppConfig { database_url, port })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var tests mutate process state; keep them in one test so they
    // cannot race each other.
    #[test]
    fn from_env_reads_and_defaults() {
        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("PORT");
        assert!(AppConfig::from_env().is_err());

        std::env::set_var("DATABASE_URL", "postgres://localhost/items");
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.port, DEFAULT_PORT);

        std::env::set_var("PORT", "8080");
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.port, 8080);

        std::env::set_var("PORT", "not-a-port");
        assert!(AppConfig::from_env().is_err());
        std::env::remove_var("PORT");
        std::env::remove_var("DATABASE_URL");
    }
}
