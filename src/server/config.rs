use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_COUNTRIES_API_URL: &str = "https://restcountries.com";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    /// Allowed CORS origin, any origin when unset.
    pub frontend_url: Option<String>,
    pub countries_api_url: String,

    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bind_address = optional_var("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address,
            frontend_url: optional_var("FRONTEND_URL"),
            countries_api_url: optional_var("COUNTRIES_API_URL")
                .unwrap_or_else(|| DEFAULT_COUNTRIES_API_URL.to_string()),
            admin_email: optional_var("ADMIN_EMAIL"),
            admin_password: optional_var("ADMIN_PASSWORD"),
        })
    }
}

/// Reads an environment variable, treating empty values as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
