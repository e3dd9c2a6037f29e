//! Runtime configuration: command-line flags with environment fallbacks.

use clap::Parser;
use std::{net::SocketAddr, path::PathBuf};
use thiserror::Error;
use url::Url;

/// Used for QR codes when no public URL is configured
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {field} \"{value}\": {reason}")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Parser)]
#[command(name = "edens-menu")]
#[command(about = "Menu, ordering and reservation service for Eden's Restaurant")]
pub struct Config {
    /// Interface to bind
    #[arg(long, env = "EDENS_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "EDENS_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Public origin of the site; the menu QR code points at `<site-url>/menu`
    #[arg(long, env = "EDENS_SITE_URL", default_value = DEFAULT_SITE_URL)]
    pub site_url: String,

    /// Directory holding index.html and menu.html (located automatically when unset)
    #[arg(long, env = "EDENS_ASSETS_DIR")]
    pub assets_dir: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, env = "EDENS_LOG_JSON")]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_url("site-url", &self.site_url)?;
        self.socket_addr()?;
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                field: "host",
                value: self.host.clone(),
                reason: e.to_string(),
            })
    }
}

pub fn validate_url(field: &'static str, url_str: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidValue {
        field,
        value: url_str.to_string(),
        reason,
    };

    let url = Url::parse(url_str).map_err(|e| invalid(format!("Invalid URL format: {}", e)))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(format!("Unsupported URL scheme: {}", scheme))),
    }
}
