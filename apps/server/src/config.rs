//! Server configuration
//!
//! Values are layered, later sources overriding earlier ones:
//! 1. built-in defaults
//! 2. an optional config file (`bazaar.toml`, or the path in `BAZAAR_CONFIG`)
//! 3. environment variables such as `BAZAAR__SERVER__PORT=9000`
//!
//! A `.env` file in the working directory is loaded into the environment first.

use anyhow::Context;
use serde::Deserialize;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;
use std::time::Duration;

const ENV_PREFIX: &str = "BAZAAR";
const DEFAULT_CONFIG_FILE: &str = "bazaar";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub rate_limit: RateLimitConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins. Empty disables CORS headers.
    pub cors_origins: Vec<String>,
    pub max_request_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_origins: Vec::new(),
            max_request_body_size: 64 * 1024,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON catalog file backing the metadata supplier.
    pub path: Option<PathBuf>,
    /// How long a loaded snapshot is served before the file is read again.
    pub refresh_seconds: u64,
    /// Base URL used to build each extension's `marketplaceUrl`.
    pub marketplace_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            refresh_seconds: 300,
            marketplace_url: "https://directus.io/marketplace".to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_seconds)
    }
}

/// Per-client request limits, counted in fixed hourly and daily windows.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    pub enabled: bool,
    pub requests_per_hour: u32,
    pub requests_per_day: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            requests_per_hour: 100,
            requests_per_day: 500,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level for this crate's targets when `RUST_LOG` is unset.
    pub level: String,
    pub json: bool,
    pub file_enabled: bool,
    pub file_directory: String,
    pub file_prefix: String,
    /// One of `daily`, `hourly`, `minutely`, `never`.
    pub file_rotation: String,
    pub opentelemetry_enabled: bool,
    pub otlp_endpoint: String,
    pub otlp_timeout_seconds: u64,
    pub trace_sample_ratio: f64,
    pub service_name: String,
    pub service_version: Option<String>,
    pub deployment_environment: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file_enabled: false,
            file_directory: "logs".to_string(),
            file_prefix: "bazaar".to_string(),
            file_rotation: "daily".to_string(),
            opentelemetry_enabled: false,
            otlp_endpoint: "http://localhost:4317".to_string(),
            otlp_timeout_seconds: 10,
            trace_sample_ratio: 1.0,
            service_name: "bazaar".to_string(),
            service_version: None,
            deployment_environment: "development".to_string(),
        }
    }
}

const FILE_ROTATIONS: [&str; 4] = ["daily", "hourly", "minutely", "never"];

impl Config {
    /// Load configuration from defaults, config file and environment.
    pub fn load() -> anyhow::Result<Self> {
        // A missing .env file is fine.
        let _ = dotenvy::dotenv();

        let file = std::env::var(format!("{ENV_PREFIX}_CONFIG"))
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        let settings = config::Config::builder()
            .add_source(config::File::with_name(&file).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration sources ({file})"))?;

        settings
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("server.port must be non-zero".to_string());
        }
        if self.server.max_request_body_size == 0 {
            return Err("server.max_request_body_size must be non-zero".to_string());
        }
        if self.catalog.path.is_none() {
            return Err(format!(
                "catalog.path is required (set {ENV_PREFIX}__CATALOG__PATH)"
            ));
        }
        if self.rate_limit.enabled
            && (self.rate_limit.requests_per_hour == 0 || self.rate_limit.requests_per_day == 0)
        {
            return Err(
                "rate_limit requests_per_hour and requests_per_day must be non-zero".to_string(),
            );
        }
        if !FILE_ROTATIONS.contains(&self.logging.file_rotation.as_str()) {
            return Err(format!(
                "logging.file_rotation must be one of {}, got '{}'",
                FILE_ROTATIONS.join(", "),
                self.logging.file_rotation
            ));
        }
        if !(0.0..=1.0).contains(&self.logging.trace_sample_ratio) {
            return Err(format!(
                "logging.trace_sample_ratio must be within [0, 1], got {}",
                self.logging.trace_sample_ratio
            ));
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        (self.server.host.as_str(), self.server.port)
            .to_socket_addrs()
            .with_context(|| format!("Invalid listen address {}", self.server.host))?
            .next()
            .with_context(|| format!("No address resolved for {}", self.server.host))
    }
}
