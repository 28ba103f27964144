//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;

/// Default port for the students service when `PORT` is unset
pub const STUDENTS_DEFAULT_PORT: u16 = 5000;

/// Fixed port of the contacts service
pub const CONTACTS_PORT: u16 = 3000;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

impl Config {
    /// Load the students service configuration from environment variables
    ///
    /// `PORT` selects the port (falling back to 5000 when unset or
    /// unparsable) and `HOST` the bind address.
    pub fn students_from_env() -> Self {
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.trim().parse().ok())
                    .unwrap_or(STUDENTS_DEFAULT_PORT),
                host: host_from_env(),
            },
        }
    }

    /// Load the contacts service configuration
    ///
    /// The contacts service always listens on port 3000; only `HOST` is read.
    pub fn contacts_from_env() -> Self {
        Self {
            server: ServerConfig {
                port: CONTACTS_PORT,
                host: host_from_env(),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn host_from_env() -> String {
    env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
}
