//! CLI binary for pdf-text-api.
//!
//! A thin shim over the library crate: the base config comes from
//! `ServerConfig::from_env()`, and explicit CLI flags override it.

use anyhow::{Context, Result};
use clap::Parser;
use pdf_text_api::{api, ServerConfig};
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Serve on the default address (127.0.0.1:8000), permissive CORS
  pdf-text-api

  # Bind all interfaces, restrict CORS to two frontend origins
  pdf-text-api --host 0.0.0.0 \
      --origin http://localhost:3000 --origin https://app.example.com

  # Disable table extraction (text-only responses)
  pdf-text-api --no-tables

  # Raise the upload cap to 50 MiB
  pdf-text-api --max-upload-bytes 52428800

ENVIRONMENT:
  PDF_TEXT_API_HOST, PDF_TEXT_API_PORT, PDF_TEXT_API_ORIGINS (comma-separated),
  PDF_TEXT_API_MAX_UPLOAD_BYTES and PDF_TEXT_API_TABLES (0/false/off disables)
  provide the same settings; CLI flags win when both are given.
  RUST_LOG controls log verbosity (default: info).
"#;

/// HTTP service that extracts plain text and tables from uploaded PDFs.
#[derive(Parser, Debug)]
#[command(name = "pdf-text-api", version, about, after_help = AFTER_HELP)]
struct Cli {
    /// Interface to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to bind
    #[arg(short, long)]
    port: Option<u16>,

    /// CORS origin allow-list entry (repeatable). No entries = any origin.
    #[arg(long = "origin")]
    origins: Vec<String>,

    /// Maximum accepted upload size in bytes
    #[arg(long)]
    max_upload_bytes: Option<usize>,

    /// Disable table detection; responses carry text only
    #[arg(long = "no-tables")]
    no_tables: bool,
}

impl Cli {
    /// Overlay explicit flags onto the environment-derived base config.
    fn into_config(self) -> ServerConfig {
        let mut config = ServerConfig::from_env();
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if !self.origins.is_empty() {
            config.allowed_origins = self.origins;
        }
        if let Some(max) = self.max_upload_bytes {
            config.max_upload_bytes = max;
        }
        if self.no_tables {
            config.extract_tables = false;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Cli::parse().into_config();
    // Re-run builder validation so a bad env value fails at startup with a
    // clear message rather than surfacing mid-request.
    let config = ServerConfig::builder()
        .host(config.host)
        .port(config.port)
        .allowed_origins(config.allowed_origins)
        .max_upload_bytes(config.max_upload_bytes)
        .extract_tables(config.extract_tables)
        .build()
        .context("invalid server configuration")?;

    api::serve(config).await.context("server exited with error")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_keeps_defaults() {
        let config = Cli::try_parse_from(["pdf-text-api"]).unwrap().into_config();
        assert_eq!(config.port, 8000);
        assert!(config.extract_tables);
    }

    #[test]
    fn flags_override_base_config() {
        let config = Cli::try_parse_from([
            "pdf-text-api",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
            "--origin",
            "http://localhost:3000",
            "--no-tables",
        ])
        .unwrap()
        .into_config();
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.allowed_origins, vec!["http://localhost:3000"]);
        assert!(!config.extract_tables);
    }
}
