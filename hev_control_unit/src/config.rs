//! Application configuration loader.
//!
//! One TOML file with a `[shared]` table and an optional `[thresholds]`
//! table. Missing threshold fields fall back to the calibration defaults.
//!
//! ```toml
//! [shared]
//! log_level = "info"
//! service_name = "hev-mode-selector"
//!
//! [thresholds]
//! low_battery = 20.0
//! heavy_load = 1500.0
//! ```

use std::path::Path;

use hev::config::{ConfigError, ConfigLoader, SharedConfig};
use hev::powertrain::config::SelectorThresholds;
use serde::{Deserialize, Serialize};

use crate::controller::HybridController;

/// Complete validated configuration, ready for runtime use.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub shared: SharedConfig,
    #[serde(default)]
    pub thresholds: SelectorThresholds,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()?;
        self.thresholds.validate()
    }

    /// Build a controller calibrated with these thresholds.
    pub fn controller(&self) -> HybridController {
        HybridController::new(self.thresholds)
    }
}

/// Load and validate the application configuration from a TOML file.
pub fn load_app_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = AppConfig::load(path)?;
    config.validate()?;
    Ok(config)
}

/// Load config from a TOML string (for testing).
pub fn load_app_config_from_str(content: &str) -> Result<AppConfig, ConfigError> {
    let config = AppConfig::parse(content)?;
    config.validate()?;
    Ok(config)
}
