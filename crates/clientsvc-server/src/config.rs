//! Server configuration
//!
//! Environment-backed settings, loaded once at startup (a `.env` file is
//! honored when present).

use anyhow::{Context, Result};
use std::env;

const DEFAULT_ACCOUNTS_BASE_URL: &str = "http://localhost:8081";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Runtime configuration for the server binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string.
    pub database_url: String,
    /// Base URL of the external accounts service.
    pub accounts_base_url: String,
    /// Listen address for the HTTP server.
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            accounts_base_url: env::var("ACCOUNTS_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_ACCOUNTS_BASE_URL.to_string()),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}
