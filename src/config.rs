//! Configuration for the extraction service.
//!
//! All runtime behaviour is controlled through [`ServerConfig`], built via
//! its [`ServerConfigBuilder`]. Keeping every knob in one struct makes it
//! trivial to share the config across handlers, log it at startup, and diff
//! two deployments to understand why their behaviour differs.
//!
//! # Design choice: builder over constructor
//! Callers set only what they care about and rely on documented defaults for
//! the rest; adding a field later does not break existing call sites.

use crate::error::ExtractError;
use serde::{Deserialize, Serialize};

/// Default maximum accepted upload size: 20 MiB.
///
/// Generous for typical documents (a 100-page text PDF is usually < 5 MiB)
/// while keeping a single request from pinning tens of megabytes of heap.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Configuration for one server instance.
///
/// Built via [`ServerConfig::builder()`] or [`ServerConfig::default()`].
///
/// # Example
/// ```rust
/// use pdf_text_api::ServerConfig;
///
/// let config = ServerConfig::builder()
///     .port(8000)
///     .allowed_origin("http://localhost:3000")
///     .extract_tables(true)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind. Default: `127.0.0.1`.
    pub host: String,

    /// TCP port to bind. Default: 8000.
    pub port: u16,

    /// Origins allowed by CORS. Default: empty.
    ///
    /// An empty list means permissive CORS (any origin) — the development
    /// posture. Production deployments list their frontend origins here so
    /// the browser refuses cross-site calls from anywhere else.
    pub allowed_origins: Vec<String>,

    /// Maximum accepted request body size in bytes.
    /// Default: [`DEFAULT_MAX_UPLOAD_BYTES`].
    pub max_upload_bytes: usize,

    /// Whether `/extract-text` also runs table detection and includes a
    /// `tables` array in the response. Default: true.
    pub extract_tables: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            allowed_origins: Vec::new(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            extract_tables: true,
        }
    }
}

impl ServerConfig {
    /// Create a new builder for `ServerConfig`.
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder {
            config: Self::default(),
        }
    }

    /// Defaults overlaid with `PDF_TEXT_API_*` environment variables.
    ///
    /// Recognised variables:
    /// * `PDF_TEXT_API_HOST` — bind interface
    /// * `PDF_TEXT_API_PORT` — bind port
    /// * `PDF_TEXT_API_ORIGINS` — comma-separated CORS allow-list
    /// * `PDF_TEXT_API_MAX_UPLOAD_BYTES` — upload size cap
    /// * `PDF_TEXT_API_TABLES` — `0`/`false`/`off` disables table extraction
    ///
    /// Unparseable values are ignored in favour of the default rather than
    /// failing startup.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("PDF_TEXT_API_HOST") {
            if !host.is_empty() {
                config.host = host;
            }
        }
        if let Ok(port) = std::env::var("PDF_TEXT_API_PORT") {
            if let Ok(port) = port.parse() {
                config.port = port;
            }
        }
        if let Ok(origins) = std::env::var("PDF_TEXT_API_ORIGINS") {
            config.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
        if let Ok(max) = std::env::var("PDF_TEXT_API_MAX_UPLOAD_BYTES") {
            if let Ok(max) = max.parse() {
                config.max_upload_bytes = max;
            }
        }
        if let Ok(tables) = std::env::var("PDF_TEXT_API_TABLES") {
            config.extract_tables = !matches!(tables.as_str(), "0" | "false" | "off");
        }

        config
    }

    /// `host:port` string suitable for a TCP bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Builder for [`ServerConfig`].
#[derive(Debug)]
pub struct ServerConfigBuilder {
    config: ServerConfig,
}

impl ServerConfigBuilder {
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Add one origin to the CORS allow-list.
    pub fn allowed_origin(mut self, origin: impl Into<String>) -> Self {
        self.config.allowed_origins.push(origin.into());
        self
    }

    /// Replace the whole CORS allow-list.
    pub fn allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.config.allowed_origins = origins;
        self
    }

    pub fn max_upload_bytes(mut self, bytes: usize) -> Self {
        self.config.max_upload_bytes = bytes;
        self
    }

    pub fn extract_tables(mut self, enabled: bool) -> Self {
        self.config.extract_tables = enabled;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ServerConfig, ExtractError> {
        let c = &self.config;
        if c.host.is_empty() {
            return Err(ExtractError::InvalidConfig("host must not be empty".into()));
        }
        if c.max_upload_bytes < 1024 {
            return Err(ExtractError::InvalidConfig(format!(
                "max_upload_bytes must be ≥ 1024, got {}",
                c.max_upload_bytes
            )));
        }
        for origin in &c.allowed_origins {
            if !origin.starts_with("http://") && !origin.starts_with("https://") {
                return Err(ExtractError::InvalidConfig(format!(
                    "origin '{origin}' must start with http:// or https://"
                )));
            }
        }
        Ok(self.config)
    }
}
