//! Configuration loading for Chronicare.
//! Reads chronicare.toml from the current directory or path in CHRONICARE_CONFIG env var.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

const DEFAULT_CONFIG_PATH: &str = "chronicare.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host()       -> String { "127.0.0.1".to_string() }
fn default_port()       -> u16    { 3001 }
fn default_static_dir() -> String { "crates/chronicare-web/static".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Filesystem path or http(s) URL of data.json
    #[serde(default = "default_dataset_source")]
    pub source: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_dataset_source() -> String { "data/data.json".to_string() }
fn default_timeout_secs()   -> u64    { 10 }

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            source: default_dataset_source(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl DatasetConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}


impl Config {
    /// Load configuration from chronicare.toml.
    /// Checks CHRONICARE_CONFIG env var first, then current directory. Without
    /// a file at the default location the built-in defaults are used.
    pub fn load() -> anyhow::Result<Self> {
        let explicit = std::env::var("CHRONICARE_CONFIG").ok();
        let path = explicit.clone().unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

        let mut config = if Path::new(&path).exists() {
            let content = std::fs::read_to_string(&path)?;
            Self::from_toml_str(&content)?
        } else if explicit.is_some() {
            anyhow::bail!("Config file not found: {}", path);
        } else {
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply CHRONICARE_DATASET / CHRONICARE_HOST / CHRONICARE_PORT overrides.
    pub fn apply_overrides<F>(&mut self, var: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(source) = var("CHRONICARE_DATASET").filter(|s| !s.trim().is_empty()) {
            self.dataset.source = source;
        }
        if let Some(host) = var("CHRONICARE_HOST").filter(|s| !s.trim().is_empty()) {
            self.server.host = host;
        }
        if let Some(port) = var("CHRONICARE_PORT") {
            self.server.port = port
                .trim()
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("Invalid CHRONICARE_PORT {:?}: {}", port, e))?;
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse::<SocketAddr>()
            .map_err(|e| anyhow::anyhow!("Invalid bind address {}: {}", addr, e))
    }
}
