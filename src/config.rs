use std::env;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{0} must be a number")]
    NotANumber(&'static str),
    #[error("{key} must be between {min} and {max}")]
    OutOfRange {
        key: &'static str,
        min: i64,
        max: i64,
    },
}

/// Upper bound for token lifetime: ten years.
const MAX_JWT_EXPIRATION_HOURS: i64 = 24 * 365 * 10;

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub server_port: u16,
    pub server_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_expiration_hours: jwt_expiration_hours()?,
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::NotANumber("SERVER_PORT"))?,
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
        })
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn jwt_expiration_hours() -> Result<i64, ConfigError> {
    const KEY: &str = "JWT_EXPIRATION_HOURS";
    let hours: i64 = env::var(KEY)
        .unwrap_or_else(|_| "24".to_string())
        .parse()
        .map_err(|_| ConfigError::NotANumber(KEY))?;
    if !(1..=MAX_JWT_EXPIRATION_HOURS).contains(&hours) {
        return Err(ConfigError::OutOfRange {
            key: KEY,
            min: 1,
            max: MAX_JWT_EXPIRATION_HOURS,
        });
    }
    Ok(hours)
}
