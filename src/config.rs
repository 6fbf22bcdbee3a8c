use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::domain::filter::DEFAULT_MAX_PRICE;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// Optional JSON file replacing the embedded listings.
    pub listings_path: Option<PathBuf>,
    /// Upper price bound of a reset search.
    pub default_max_price: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            listings_path: None,
            default_max_price: DEFAULT_MAX_PRICE,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            bind_addr: match lookup("BIND_ADDR") {
                Some(v) => v.parse().context("BIND_ADDR must be host:port")?,
                None => defaults.bind_addr,
            },
            max_workers: match lookup("MAX_WORKERS") {
                Some(v) => v.parse().context("MAX_WORKERS must be a valid number")?,
                None => defaults.max_workers,
            },
            listings_path: lookup("LISTINGS_PATH")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            default_max_price: match lookup("DEFAULT_MAX_PRICE") {
                Some(v) => v
                    .parse()
                    .context("DEFAULT_MAX_PRICE must be a whole number")?,
                None => defaults.default_max_price,
            },
        })
    }
}
