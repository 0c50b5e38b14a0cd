mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

/// Loads configuration from the file named by `CONFIG_PATH` (default
/// `config.yaml`). The original client hardcodes its backend address, so the
/// file is optional: a missing file yields the built-in defaults.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    load_from(&config_path).await
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    match tokio::fs::read_to_string(config_path).await {
        Ok(config_str) => {
            let config: Config = serde_yaml::from_str(&config_str)?;
            if config.backend.base_url.trim().is_empty() {
                return Err(Error::config("backend.base_url must not be empty"));
            }
            Ok(config)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No config file at {}, using defaults", config_path);
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}
