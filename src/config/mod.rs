use anyhow::{Context, Result};
use serde::Deserialize;

/// Complete Airpulse configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AirpulseConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub broadcast: BroadcastConfig,
}

/// Listen address configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind, all interfaces by default
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Broadcast loop configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BroadcastConfig {
    /// Seconds between readings
    #[serde(default = "default_interval_seconds")]
    pub interval_seconds: u64,
}

fn default_interval_seconds() -> u64 {
    5
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            interval_seconds: default_interval_seconds(),
        }
    }
}

impl Default for AirpulseConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            broadcast: BroadcastConfig::default(),
        }
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &str) -> Result<AirpulseConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {path}"))?;
    let config: AirpulseConfig =
        toml::from_str(&contents).with_context(|| format!("failed to parse config file {path}"))?;
    Ok(config)
}

impl AirpulseConfig {
    /// Resolve configuration at startup: the file named by `AIRPULSE_CONFIG`,
    /// else `airpulse.toml` if present, else defaults. Env overrides are
    /// applied on top. Values are fixed for the lifetime of the process.
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var("AIRPULSE_CONFIG") {
            Ok(path) => load_config(&path)?,
            Err(_) => {
                if std::path::Path::new("airpulse.toml").exists() {
                    load_config("airpulse.toml")?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply env var overrides, ignoring values that fail to parse
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("AIRPULSE_PORT") {
            if let Ok(n) = v.parse::<u16>() {
                self.server.port = n;
            }
        }
        if let Ok(v) = std::env::var("AIRPULSE_BROADCAST_INTERVAL_SECONDS") {
            if let Ok(n) = v.parse::<u64>() {
                self.broadcast.interval_seconds = n;
            }
        }
    }
}
