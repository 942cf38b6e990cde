//! Configuration loading
//!
//! Settings come from a TOML file. A missing file falls back to defaults;
//! a present but malformed one is an error.

use serde::Deserialize;
use thiserror::Error;

use std::fs;
use std::io;
use std::path::Path;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub ledger: LedgerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LedgerConfig {
    /// Address credited with mining rewards; generated when absent
    pub miner_address: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingConfig {
    /// Extra file receiving a copy of every log line
    pub log_file: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Config {
    /// Parses configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must not be 0".to_string()));
        }

        if let Some(address) = &self.ledger.miner_address {
            if address.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "ledger.miner_address must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Loads the configuration at `path`, using defaults if the file does not exist
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    match fs::read_to_string(path) {
        Ok(text) => Config::from_toml(&text),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Config::default()),
        Err(err) => Err(err.into()),
    }
}

/// Generates a random 20-byte hex address for the local miner
pub fn generate_miner_address() -> String {
    let bytes: [u8; 20] = rand::random();
    hex::encode(bytes)
}
