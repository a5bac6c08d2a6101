//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Required Variables
//!
//! - `STORAGE_PATH` - SQLite database file path
//!
//! ## Optional Variables
//!
//! - `ENV` - Deployment environment: `local`, `dev`, or `prod`
//!   (default: `local`); selects log verbosity and format
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Public base for short URLs (default: `http://localhost:3000`)
//! - `HTTP_REQUEST_TIMEOUT` - Per-request timeout in seconds (default: 4)
//! - `DB_MAX_CONNECTIONS` - Connection pool size (default: 5)
//! - `DB_BUSY_TIMEOUT` - SQLite busy timeout in seconds (default: 5)
//! - `RUST_LOG` - Log filter override
//!
//! Variables may also be supplied via a `.env` file (loaded in `main.rs`).

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// Deployment environment, selecting log verbosity and format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Env {
    Local,
    Dev,
    Prod,
}

impl Env {
    pub fn as_str(&self) -> &'static str {
        match self {
            Env::Local => "local",
            Env::Dev => "dev",
            Env::Prod => "prod",
        }
    }
}

impl FromStr for Env {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(Env::Local),
            "dev" => Ok(Env::Dev),
            "prod" => Ok(Env::Prod),
            other => anyhow::bail!("ENV must be 'local', 'dev' or 'prod', got '{}'", other),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub env: Env,
    pub storage_path: String,
    pub listen_addr: String,
    pub base_url: String,
    /// Per-request timeout in seconds, applied by the HTTP layer.
    pub request_timeout: u64,

    // ── SqlitePool settings ─────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// SQLite busy timeout in seconds (`DB_BUSY_TIMEOUT`, default: 5).
    pub db_busy_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `STORAGE_PATH` is missing or `ENV` is not a
    /// recognized environment name.
    pub fn from_env() -> Result<Self> {
        let storage_path = env::var("STORAGE_PATH").context("STORAGE_PATH must be set")?;

        let env = env::var("ENV")
            .unwrap_or_else(|_| "local".to_string())
            .parse()?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

        let request_timeout = env::var("HTTP_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(4);

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let db_busy_timeout = env::var("DB_BUSY_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            env,
            storage_path,
            listen_addr,
            base_url,
            request_timeout,
            db_max_connections,
            db_busy_timeout,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `storage_path` is empty
    /// - `listen_addr` is not in `host:port` form
    /// - `base_url` is not an HTTP(S) URL
    /// - a timeout or pool setting is zero
    pub fn validate(&self) -> Result<()> {
        if self.storage_path.is_empty() {
            anyhow::bail!("STORAGE_PATH must not be empty");
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.request_timeout == 0 {
            anyhow::bail!("HTTP_REQUEST_TIMEOUT must be greater than 0");
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        if self.db_busy_timeout == 0 {
            anyhow::bail!("DB_BUSY_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Environment: {}", self.env.as_str());
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Storage path: {}", self.storage_path);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Request timeout: {}s", self.request_timeout);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
