//! Simulation settings
//!
//! Persisted as JSON. Values are validated by the caller before they reach
//! the engine; the engine itself trusts them.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{COARSE_PERIOD, DEFAULT_GRID_SIZE, FINE_PERIOD};
use crate::sim::{FirefighterParams, TickParams};

/// Errors loading, saving or validating settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Cells per side (applied on reset only)
    pub grid_size: usize,
    /// RNG seed used on reset
    pub seed: u64,

    // === Stochastic processes ===
    /// Chance an empty cell grows a tree per coarse tick (0.0 - 1.0)
    pub growth_prob: f64,
    /// Chance of a lightning strike per coarse tick (0.0 - 1.0)
    pub lightning_prob: f64,

    // === Firefighter ===
    /// Coarse ticks after the first fire before the firefighter appears
    pub firefighter_delay: u64,
    /// Coarse ticks the firefighter stays (>= 1)
    pub firefighter_duration: u32,
    /// Suppression radius in cells
    pub firefighter_radius: usize,

    // === Clocks ===
    pub coarse_period_ms: u64,
    pub fine_period_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        let tick = TickParams::default();
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            seed: 0x5EED_F0E5,

            growth_prob: tick.growth_prob,
            lightning_prob: tick.lightning_prob,

            firefighter_delay: tick.firefighter.delay,
            firefighter_duration: tick.firefighter.duration,
            firefighter_radius: tick.firefighter.radius,

            coarse_period_ms: COARSE_PERIOD.as_millis() as u64,
            fine_period_ms: FINE_PERIOD.as_millis() as u64,
        }
    }
}

impl Settings {
    /// Defaults with probabilities given as whole percentages (slider values)
    pub fn from_percentages(growth_pct: u32, lightning_pct: u32) -> Self {
        Self {
            growth_prob: f64::from(growth_pct) / 100.0,
            lightning_prob: f64::from(lightning_pct) / 100.0,
            ..Self::default()
        }
    }

    /// Parameters for the next tick
    pub fn tick_params(&self) -> TickParams {
        TickParams {
            growth_prob: self.growth_prob,
            lightning_prob: self.lightning_prob,
            firefighter: FirefighterParams {
                delay: self.firefighter_delay,
                duration: self.firefighter_duration,
                radius: self.firefighter_radius,
            },
        }
    }

    pub fn coarse_period(&self) -> Duration {
        Duration::from_millis(self.coarse_period_ms)
    }

    pub fn fine_period(&self) -> Duration {
        Duration::from_millis(self.fine_period_ms)
    }

    /// Check every field is in range, reporting the first that is not
    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |field: &'static str, reason: &'static str| -> Result<(), SettingsError> {
            Err(SettingsError::Invalid { field, reason })
        };

        if self.grid_size == 0 {
            return invalid("grid_size", "must be at least 1");
        }
        if !(0.0..=1.0).contains(&self.growth_prob) {
            return invalid("growth_prob", "must be within [0, 1]");
        }
        if !(0.0..=1.0).contains(&self.lightning_prob) {
            return invalid("lightning_prob", "must be within [0, 1]");
        }
        if self.firefighter_duration == 0 {
            return invalid("firefighter_duration", "must be at least 1");
        }
        if self.coarse_period_ms == 0 {
            return invalid("coarse_period_ms", "must be positive");
        }
        if self.fine_period_ms == 0 {
            return invalid("fine_period_ms", "must be positive");
        }
        Ok(())
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Load from `path`, falling back to defaults if missing or unreadable
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::info!("Using default settings ({})", e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}
