//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! All optional:
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:80`)
//! - `SERVER_ADDR` - The appliance's own IP, used as the host for admin
//!   assets in rendered pages. Defaults to the bound socket's address; set
//!   this when binding to a wildcard address.
//! - `VERSION_REPO` - Local git checkout of the blocking software queried
//!   for the release tag (default: `/etc/.pihole`)
//! - `VERSION_TIMEOUT_MS` - Upper bound on the version lookup subprocess
//!   (default: 300)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// The appliance's own IP for asset URLs. When `None`, the bound
    /// socket's address is used.
    pub server_addr: Option<String>,
    /// Git checkout queried for the blocker's release tag.
    pub version_repo: String,
    /// Timeout for the version lookup subprocess in milliseconds.
    pub version_timeout_ms: u64,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:80".to_string());
        let server_addr = env::var("SERVER_ADDR").ok().filter(|v| !v.is_empty());
        let version_repo =
            env::var("VERSION_REPO").unwrap_or_else(|_| "/etc/.pihole".to_string());

        let version_timeout_ms = env::var("VERSION_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(300);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            listen_addr,
            server_addr,
            version_repo,
            version_timeout_ms,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not in `host:port` form
    /// - `log_format` is not `text` or `json`
    /// - `version_timeout_ms` is out of range
    /// - `version_repo` is empty
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.version_timeout_ms < 10 || self.version_timeout_ms > 10_000 {
            anyhow::bail!(
                "VERSION_TIMEOUT_MS must be between 10 and 10000, got {}",
                self.version_timeout_ms
            );
        }

        if self.version_repo.is_empty() {
            anyhow::bail!("VERSION_REPO must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!(
            "  Server address: {}",
            self.server_addr.as_deref().unwrap_or("(from listener)")
        );
        tracing::info!("  Version repo: {}", self.version_repo);
        tracing::info!("  Version lookup timeout: {}ms", self.version_timeout_ms);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
