//! Controller configuration parameters.
//!
//! There is no runtime reconfiguration and no persistence.  The defaults
//! below are the production timing; a JSON override can be baked into the
//! firmware image at build time through the `INTERSECTION_CONFIG`
//! environment variable.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::fsm::Dwell;

/// Core controller configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    // --- Timing ---
    /// Green hold in delay ticks.  Caution and flash holds derive from it.
    pub standard_wait_ticks: u32,
    /// Length of one delay tick (milliseconds)
    pub tick_period_ms: u32,

    // --- Telemetry ---
    /// Emit a telemetry event every N loop iterations (0 = never)
    pub telemetry_interval_steps: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            standard_wait_ticks: 50, // 500 ms green, scaled down from 5-10 s
            tick_period_ms: 10,
            telemetry_interval_steps: 100,
        }
    }
}

impl ControllerConfig {
    /// Reject values that would stall the loop, collapse a dwell to zero,
    /// or leave the caution dwell short of exactly half the green.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.standard_wait_ticks == 0 {
            return Err(ConfigError::ZeroStandardWait);
        }
        if self.tick_period_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        if self.standard_wait_ticks % Dwell::CAUTION_DIVISOR != 0 {
            return Err(ConfigError::OddStandardWait {
                standard_wait_ticks: self.standard_wait_ticks,
            });
        }
        if Dwell::Flash.ticks(self.standard_wait_ticks) == 0 {
            return Err(ConfigError::DwellTooShort {
                standard_wait_ticks: self.standard_wait_ticks,
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON document.  Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration baked in at build time, or the defaults.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        match option_env!("INTERSECTION_CONFIG") {
            Some(json) => Self::from_json(json),
            None => Ok(Self::default()),
        }
    }

    /// Wall-clock length of `ticks` delay ticks.
    pub fn ticks_to_ms(&self, ticks: u32) -> u64 {
        u64::from(ticks) * u64::from(self.tick_period_ms)
    }
}
