//! CLI configuration module.
//!
//! Handles loading and validating `config.toml`. The library itself never
//! reads configuration — the CLI loads it here and passes plain values into
//! [`crate::record::build`] and [`crate::url::delivery_url`].
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [retention]
//! days = 30                          # image lifetime in days (>= 1)
//!
//! [delivery]
//! host = "//img.newsdesk-cdn.net"    # default CDN host for built URLs
//! ```
//!
//! Config files are sparse — override just the values you want. Unknown keys
//! are rejected to catch typos early.

use crate::url::DEFAULT_HOST;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `config.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Image lifetime settings.
    pub retention: RetentionConfig,
    /// CDN delivery settings.
    pub delivery: DeliveryConfig,
}

impl AppConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.retention.days == 0 {
            return Err(ConfigError::Validation(
                "retention.days must be at least 1".into(),
            ));
        }
        if self.delivery.host.trim().is_empty() {
            return Err(ConfigError::Validation(
                "delivery.host must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Image lifetime settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RetentionConfig {
    /// Days until an ingested image expires.
    pub days: u32,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self { days: 30 }
    }
}

/// CDN delivery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeliveryConfig {
    /// Default delivery host for built URLs (protocol-relative works).
    pub host: String,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
        }
    }
}

/// Load config from `config.toml` in the given directory.
///
/// A missing file yields the stock defaults. Unknown keys and out-of-range
/// values are errors.
pub fn load_config(dir: &Path) -> Result<AppConfig, ConfigError> {
    let config_path = dir.join("config.toml");
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        AppConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and
/// explanations. Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# imgid Configuration
# ===================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Retention
# ---------------------------------------------------------------------------
[retention]
# Days until an ingested image expires (must be at least 1).
# expires_at is created_at plus exactly this many 24-hour days.
days = 30

# ---------------------------------------------------------------------------
# Delivery
# ---------------------------------------------------------------------------
[delivery]
# Default CDN host for built URLs. Protocol-relative hosts work.
host = "//img.newsdesk-cdn.net"
"##
}
