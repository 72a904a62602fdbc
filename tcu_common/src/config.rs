//! Simulator configuration loaded from TOML.
//!
//! All fields carry `#[serde(default = ...)]` so a partial (or empty) file
//! deserializes to sensible defaults. Semantic bounds are checked by
//! [`TcuConfig::validate`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Exit with the engine idling in Park is permitted by default.
pub const ALLOW_UNMANNED_IDLE_DEFAULT: bool = true;
/// Auto downshift at or below this RPM while in Drive.
pub const DOWNSHIFT_RPM_THRESHOLD_DEFAULT: u32 = 1200;
/// Auto upshift at or above this RPM while in Drive.
pub const UPSHIFT_RPM_THRESHOLD_DEFAULT: u32 = 3000;

/// Error type for configuration loading operations.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read {path}: {reason}")]
    Io { path: String, reason: String },

    /// TOML parsing failed.
    #[error("failed to parse configuration: {0}")]
    Parse(String),

    /// Semantic validation failed.
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

/// Top-level simulator configuration.
///
/// # TOML Example
///
/// ```toml
/// allow_unmanned_idle = false
/// downshift_rpm_threshold = 1200
/// upshift_rpm_threshold = 3000
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TcuConfig {
    /// Permit exiting the vehicle while the engine idles, as long as the
    /// transmission is in Park. When false, the engine must be stopped.
    #[serde(default = "default_allow_unmanned_idle")]
    pub allow_unmanned_idle: bool,

    /// RPM at or below which Drive mode downshifts automatically.
    #[serde(default = "default_downshift_rpm")]
    pub downshift_rpm_threshold: u32,

    /// RPM at or above which Drive mode upshifts automatically.
    #[serde(default = "default_upshift_rpm")]
    pub upshift_rpm_threshold: u32,
}

fn default_allow_unmanned_idle() -> bool {
    ALLOW_UNMANNED_IDLE_DEFAULT
}
fn default_downshift_rpm() -> u32 {
    DOWNSHIFT_RPM_THRESHOLD_DEFAULT
}
fn default_upshift_rpm() -> u32 {
    UPSHIFT_RPM_THRESHOLD_DEFAULT
}

impl Default for TcuConfig {
    fn default() -> Self {
        Self {
            allow_unmanned_idle: ALLOW_UNMANNED_IDLE_DEFAULT,
            downshift_rpm_threshold: DOWNSHIFT_RPM_THRESHOLD_DEFAULT,
            upshift_rpm_threshold: UPSHIFT_RPM_THRESHOLD_DEFAULT,
        }
    }
}

impl TcuConfig {
    /// Parse and validate a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate parameter bounds.
    ///
    /// The downshift threshold must sit strictly below the upshift
    /// threshold, otherwise the auto-shifter would oscillate on a single
    /// RPM reading.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.downshift_rpm_threshold == 0 {
            return Err(ConfigError::Validation(
                "downshift_rpm_threshold must be nonzero".to_string(),
            ));
        }
        if self.downshift_rpm_threshold >= self.upshift_rpm_threshold {
            return Err(ConfigError::Validation(format!(
                "downshift_rpm_threshold {} must be below upshift_rpm_threshold {}",
                self.downshift_rpm_threshold, self.upshift_rpm_threshold
            )));
        }
        Ok(())
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
