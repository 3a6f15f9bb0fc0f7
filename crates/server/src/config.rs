//! # Server Configuration
//!
//! Resolved from CLI flags first, then environment variables (optionally
//! loaded from a `.env` file), then defaults.

use anyhow::{Context, Result};
use learning_center_core::catalog::Catalog;
use learning_center_core::showcase;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Environment override for the catalog file
pub const CATALOG_ENV: &str = "LEARNING_CENTER_CATALOG";
/// Environment override for the listening port
pub const PORT_ENV: &str = "LEARNING_CENTER_PORT";

pub const DEFAULT_PORT: u16 = 8080;

/// Flags accepted by `learning-center serve`
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long)]
    pub host: Option<IpAddr>,
    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
    /// Catalog JSON file to serve instead of the bundled one
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    /// Artificial delay of the session check, in milliseconds
    #[arg(long)]
    pub session_delay_ms: Option<u64>,
    /// Seconds between testimonial showcase advances
    #[arg(long)]
    pub showcase_secs: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub catalog_path: Option<PathBuf>,
    pub session_delay: Duration,
    pub showcase_period: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            catalog_path: None,
            session_delay: Duration::ZERO,
            showcase_period: showcase::DEFAULT_PERIOD,
        }
    }
}

impl ServerConfig {
    /// Merge CLI flags over the environment and defaults
    pub fn resolve(args: ServeArgs) -> Result<Self> {
        let defaults = Self::default();

        let port = match args.port {
            Some(port) => port,
            None => match std::env::var(PORT_ENV) {
                Ok(raw) => raw
                    .parse()
                    .with_context(|| format!("{} is not a valid port: {:?}", PORT_ENV, raw))?,
                Err(_) => defaults.port,
            },
        };

        Ok(Self {
            host: args.host.unwrap_or(defaults.host),
            port,
            catalog_path: resolve_catalog_path(args.catalog),
            session_delay: args
                .session_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.session_delay),
            showcase_period: args
                .showcase_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.showcase_period),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Load the configured catalog, or the bundled one
    pub fn load_catalog(&self) -> Result<Catalog> {
        load_catalog(self.catalog_path.as_ref())
    }
}

/// An explicit path wins over the environment override
pub fn resolve_catalog_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| std::env::var(CATALOG_ENV).ok().map(PathBuf::from))
}

pub fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("Failed to load catalog from {:?}", path)),
        None => Catalog::embedded().context("Bundled catalog is invalid"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let config = ServerConfig::resolve(ServeArgs {
            port: Some(9000),
            session_delay_ms: Some(250),
            showcase_secs: Some(10),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.session_delay, Duration::from_millis(250));
        assert_eq!(config.showcase_period, Duration::from_secs(10));
        assert_eq!(config.addr().ip(), IpAddr::V4(Ipv4Addr::LOCALHOST));
    }

    #[test]
    fn test_bundled_catalog_loads_without_path() {
        let catalog = load_catalog(None).unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_missing_catalog_file_is_an_error() {
        let path = PathBuf::from("/definitely/not/here/courses.json");
        let err = load_catalog(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to load catalog"));
    }
}
