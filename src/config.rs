//! Arbiter configuration.
//!
//! [`ArbiterConfig`] covers the knobs the spec calls design constants: the
//! candidate scan width, the rescan debounce interval, and the significance
//! thresholds. It deserializes from TOML so hosts can ship a config file:
//!
//! ```toml
//! scan_width = 8
//! rescan_interval_ms = 3000
//!
//! [thresholds]
//! trigger = 0.1
//! stick_deadzone = 0.2
//! axis_deadzone = 0.2
//! ```
//!
//! Every field has a default; a missing file section means "use the default".

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::significance::SignificanceThresholds;

/// Errors from loading or validating a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tunable constants of the arbiter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArbiterConfig {
    /// Candidate device indices are `0..scan_width`.
    pub scan_width: usize,
    /// Debounce window between full rescans, in milliseconds.
    pub rescan_interval_ms: u64,
    /// Significance thresholds used by auto-switch.
    pub thresholds: SignificanceThresholds,
}

impl Default for ArbiterConfig {
    fn default() -> Self {
        Self {
            scan_width: 8,
            rescan_interval_ms: 3000,
            thresholds: SignificanceThresholds::default(),
        }
    }
}

impl ArbiterConfig {
    /// The rescan debounce window as a [`Duration`].
    pub fn rescan_interval(&self) -> Duration {
        Duration::from_millis(self.rescan_interval_ms)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: ArbiterConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Check the invariants the arbiter relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scan_width == 0 {
            return Err(ConfigError::Invalid("scan_width must be at least 1".into()));
        }
        if self.rescan_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "rescan_interval_ms must be positive".into(),
            ));
        }
        for (name, value) in [
            ("thresholds.trigger", self.thresholds.trigger),
            ("thresholds.stick_deadzone", self.thresholds.stick_deadzone),
            ("thresholds.axis_deadzone", self.thresholds.axis_deadzone),
        ] {
            if !(0.0..1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be in [0, 1), got {value}"
                )));
            }
        }
        Ok(())
    }
}
