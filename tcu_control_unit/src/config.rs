//! TOML configuration loading for the simulator binary.
//!
//! The file is optional: a missing config means built-in defaults, while a
//! file that exists but fails to parse or validate aborts startup.

use std::path::Path;

use tracing::info;

use tcu_common::config::{ConfigError, TcuConfig};

/// Load the simulator configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<TcuConfig, ConfigError> {
    let toml_str = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("no config file at {}, using defaults", path.display());
            return Ok(TcuConfig::default());
        }
        Err(e) => {
            return Err(ConfigError::Io {
                path: path.display().to_string(),
                reason: e.to_string(),
            });
        }
    };

    TcuConfig::from_toml(&toml_str)
}
