use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Service configuration, loaded from an optional TOML file. Every field
/// has a default so the server boots with no file at all.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_dir: PathBuf,
    pub api_host: String,
    pub api_port: u16,
    /// Persisted cart rows older than this are reaped by the clear-cart job.
    pub cart_ttl_minutes: i64,
    /// Demo orders inserted per place-orders run.
    pub seed_order_count: u32,
    pub schedules: Schedules,
}

/// Cron expressions (with seconds field) for the three scheduled jobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Schedules {
    pub clear_cart: String,
    pub place_orders: String,
    pub update_order_status: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            api_host: "127.0.0.1".to_string(),
            api_port: 17890,
            cart_ttl_minutes: 60 * 24,
            seed_order_count: 3,
            schedules: Schedules::default(),
        }
    }
}

impl Default for Schedules {
    fn default() -> Self {
        Self {
            clear_cart: "0 0 0 * * *".to_string(),
            place_orders: "0 0 */6 * * *".to_string(),
            update_order_status: "0 30 * * * *".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("cannot read config file {}", path.display()))?;
                let config: Config = toml::from_str(&raw)
                    .with_context(|| format!("invalid config file {}", path.display()))?;
                Ok(config)
            }
            None => Ok(Config::default()),
        }
    }
}
