//! Database connection settings for catalog introspection.
//! Values come from the environment, with `.env` files honored the way the
//! generated project itself loads them.

use std::env;

use crate::error::{Error, Result};

/// PostgreSQL connection details.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub port: u16,
}

impl DbConfig {
    /// Loads settings from `DB_HOST`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`
    /// and `DB_PORT` (default 5432).
    ///
    /// # Errors
    /// * `Error::ConfigError` if a required variable is missing or the port
    ///   is not a number
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let port = match env::var("DB_PORT") {
            Ok(value) => value.parse().map_err(|_| {
                Error::ConfigError(format!("DB_PORT is not a valid port number: {}", value))
            })?,
            Err(_) => 5432,
        };

        Ok(Self {
            host: require("DB_HOST")?,
            user: require("DB_USER")?,
            password: require("DB_PASSWORD")?,
            database: require("DB_NAME")?,
            port,
        })
    }

    /// Connection URL for the pool.
    pub fn connection_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.database
        )
    }
}

fn require(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::ConfigError(format!("{} is not set", name)))
}
