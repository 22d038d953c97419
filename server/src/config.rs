use std::env;

use derive_more::Display;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_POOL_SIZE: u32 = 10;

#[derive(Debug, Display, PartialEq)]
pub enum ConfigError {
    #[display(fmt = "{} must be set", _0)]
    Missing(&'static str),
    #[display(fmt = "{} is invalid: {}", _0, _1)]
    Invalid(&'static str, String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub pool_size: u32,
    /// Allowed CORS origin; any origin when unset.
    pub client_host: Option<String>,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let pool_size = match lookup("DATABASE_POOL_SIZE") {
            Some(value) => match value.parse::<u32>() {
                Ok(size) if size > 0 => size,
                _ => return Err(ConfigError::Invalid("DATABASE_POOL_SIZE", value)),
            },
            None => DEFAULT_POOL_SIZE,
        };

        let run_migrations = match lookup("RUN_MIGRATIONS") {
            Some(value) => match value.to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(ConfigError::Invalid("RUN_MIGRATIONS", value)),
            },
            None => true,
        };

        let bind_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        Ok(Config {
            database_url,
            bind_address,
            pool_size,
            client_host: lookup("CLIENT_HOST").filter(|host| !host.is_empty()),
            run_migrations,
        })
    }
}
