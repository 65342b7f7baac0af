use std::env;

use crate::error::AppError;

/// Listener settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Read `BACKEND_HOST` (default `0.0.0.0`) and `BACKEND_PORT` (default 3000).
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let raw_port = env::var("BACKEND_PORT").unwrap_or_else(|_| "3000".to_string());
        let port = raw_port.parse::<u16>().map_err(|_| {
            AppError::config(format!("BACKEND_PORT must be a valid port number, got '{raw_port}'"))
        })?;
        Ok(Self { host, port })
    }
}
