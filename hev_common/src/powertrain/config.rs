//! Mode selector thresholds.
//!
//! All threshold fields use `#[serde(default = ...)]`, so a partial
//! `[thresholds]` table overrides only what it names. Defaults reproduce the
//! production calibration.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::consts::{PERCENT_MAX, PERCENT_MIN};

// ─── Defaults ───────────────────────────────────────────────────────

/// Below this SoC [%] electric drive is disallowed.
pub const LOW_BATTERY_DEFAULT: f64 = 20.0;
/// Reserved high-SoC threshold [%]. No rule reads it yet.
pub const HIGH_BATTERY_DEFAULT: f64 = 80.0;
/// Maximum speed for electric-only [km/h].
pub const EV_SPEED_LIMIT_DEFAULT: f64 = 50.0;
/// Above this speed the engine is preferred at moderate throttle [km/h].
pub const HIGHWAY_SPEED_DEFAULT: f64 = 80.0;
/// Vehicle mass above which max-power mode is forced [kg].
pub const HEAVY_LOAD_DEFAULT: f64 = 1500.0;
/// Uphill slope above which max-power mode is forced [deg].
pub const STEEP_HILL_DEFAULT: f64 = 5.0;
/// Downhill slope below which regen is favoured [deg].
pub const STEEP_DOWN_DEFAULT: f64 = -3.0;

/// Brake pedal above which the driver counts as braking [%].
pub const REGEN_BRAKE_MIN_DEFAULT: f64 = 10.0;
/// Speed above which the vehicle counts as moving for regen [km/h].
pub const REGEN_SPEED_MIN_DEFAULT: f64 = 5.0;
/// Regen only while SoC is below this [%].
pub const REGEN_BATTERY_MAX_DEFAULT: f64 = 90.0;
/// Throttle above which max power is demanded [%].
pub const MAX_POWER_THROTTLE_DEFAULT: f64 = 70.0;
/// Electric-only requires throttle below this [%].
pub const EV_THROTTLE_MAX_DEFAULT: f64 = 30.0;
/// Electric-only requires SoC above this [%].
pub const EV_BATTERY_MIN_DEFAULT: f64 = 30.0;
/// Electric-only requires gradient below this [deg].
pub const EV_GRADIENT_MAX_DEFAULT: f64 = 3.0;
/// Highway cruise requires throttle below this [%].
pub const HIGHWAY_THROTTLE_MAX_DEFAULT: f64 = 60.0;

// ─── Thresholds ─────────────────────────────────────────────────────

/// Calibration constants for the mode selection cascade.
///
/// Read-only after construction; the selector never mutates them.
///
/// # TOML Example
///
/// ```toml
/// [thresholds]
/// low_battery = 25.0
/// heavy_load = 1800.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectorThresholds {
    #[serde(default = "default_low_battery")]
    pub low_battery: f64,
    /// Not read by any rule.
    #[serde(default = "default_high_battery")]
    pub high_battery: f64,
    #[serde(default = "default_ev_speed_limit")]
    pub ev_speed_limit: f64,
    #[serde(default = "default_highway_speed")]
    pub highway_speed: f64,
    #[serde(default = "default_heavy_load")]
    pub heavy_load: f64,
    #[serde(default = "default_steep_hill")]
    pub steep_hill: f64,
    #[serde(default = "default_steep_down")]
    pub steep_down: f64,
    #[serde(default = "default_regen_brake_min")]
    pub regen_brake_min: f64,
    #[serde(default = "default_regen_speed_min")]
    pub regen_speed_min: f64,
    #[serde(default = "default_regen_battery_max")]
    pub regen_battery_max: f64,
    #[serde(default = "default_max_power_throttle")]
    pub max_power_throttle: f64,
    #[serde(default = "default_ev_throttle_max")]
    pub ev_throttle_max: f64,
    #[serde(default = "default_ev_battery_min")]
    pub ev_battery_min: f64,
    #[serde(default = "default_ev_gradient_max")]
    pub ev_gradient_max: f64,
    #[serde(default = "default_highway_throttle_max")]
    pub highway_throttle_max: f64,
}

fn default_low_battery() -> f64 {
    LOW_BATTERY_DEFAULT
}
fn default_high_battery() -> f64 {
    HIGH_BATTERY_DEFAULT
}
fn default_ev_speed_limit() -> f64 {
    EV_SPEED_LIMIT_DEFAULT
}
fn default_highway_speed() -> f64 {
    HIGHWAY_SPEED_DEFAULT
}
fn default_heavy_load() -> f64 {
    HEAVY_LOAD_DEFAULT
}
fn default_steep_hill() -> f64 {
    STEEP_HILL_DEFAULT
}
fn default_steep_down() -> f64 {
    STEEP_DOWN_DEFAULT
}
fn default_regen_brake_min() -> f64 {
    REGEN_BRAKE_MIN_DEFAULT
}
fn default_regen_speed_min() -> f64 {
    REGEN_SPEED_MIN_DEFAULT
}
fn default_regen_battery_max() -> f64 {
    REGEN_BATTERY_MAX_DEFAULT
}
fn default_max_power_throttle() -> f64 {
    MAX_POWER_THROTTLE_DEFAULT
}
fn default_ev_throttle_max() -> f64 {
    EV_THROTTLE_MAX_DEFAULT
}
fn default_ev_battery_min() -> f64 {
    EV_BATTERY_MIN_DEFAULT
}
fn default_ev_gradient_max() -> f64 {
    EV_GRADIENT_MAX_DEFAULT
}
fn default_highway_throttle_max() -> f64 {
    HIGHWAY_THROTTLE_MAX_DEFAULT
}

impl Default for SelectorThresholds {
    fn default() -> Self {
        Self {
            low_battery: LOW_BATTERY_DEFAULT,
            high_battery: HIGH_BATTERY_DEFAULT,
            ev_speed_limit: EV_SPEED_LIMIT_DEFAULT,
            highway_speed: HIGHWAY_SPEED_DEFAULT,
            heavy_load: HEAVY_LOAD_DEFAULT,
            steep_hill: STEEP_HILL_DEFAULT,
            steep_down: STEEP_DOWN_DEFAULT,
            regen_brake_min: REGEN_BRAKE_MIN_DEFAULT,
            regen_speed_min: REGEN_SPEED_MIN_DEFAULT,
            regen_battery_max: REGEN_BATTERY_MAX_DEFAULT,
            max_power_throttle: MAX_POWER_THROTTLE_DEFAULT,
            ev_throttle_max: EV_THROTTLE_MAX_DEFAULT,
            ev_battery_min: EV_BATTERY_MIN_DEFAULT,
            ev_gradient_max: EV_GRADIENT_MAX_DEFAULT,
            highway_throttle_max: HIGHWAY_THROTTLE_MAX_DEFAULT,
        }
    }
}

impl SelectorThresholds {
    /// Validate parameter bounds.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` naming the first field that is
    /// non-finite or outside its bound, or when `low_battery > high_battery`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let percentages = [
            ("low_battery", self.low_battery),
            ("high_battery", self.high_battery),
            ("regen_brake_min", self.regen_brake_min),
            ("regen_battery_max", self.regen_battery_max),
            ("max_power_throttle", self.max_power_throttle),
            ("ev_throttle_max", self.ev_throttle_max),
            ("ev_battery_min", self.ev_battery_min),
            ("highway_throttle_max", self.highway_throttle_max),
        ];
        for (name, value) in percentages {
            if !(PERCENT_MIN..=PERCENT_MAX).contains(&value) {
                return Err(invalid(format!(
                    "{name} {value} out of range [{PERCENT_MIN}, {PERCENT_MAX}]"
                )));
            }
        }

        let non_negative = [
            ("ev_speed_limit", self.ev_speed_limit),
            ("highway_speed", self.highway_speed),
            ("regen_speed_min", self.regen_speed_min),
            ("heavy_load", self.heavy_load),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!("{name} {value} must be finite and >= 0")));
            }
        }

        if !self.steep_hill.is_finite() || self.steep_hill <= 0.0 {
            return Err(invalid(format!(
                "steep_hill {} must be finite and > 0",
                self.steep_hill
            )));
        }
        if !self.steep_down.is_finite() || self.steep_down >= 0.0 {
            return Err(invalid(format!(
                "steep_down {} must be finite and < 0",
                self.steep_down
            )));
        }
        if !self.ev_gradient_max.is_finite() {
            return Err(invalid(format!(
                "ev_gradient_max {} must be finite",
                self.ev_gradient_max
            )));
        }
        if self.low_battery > self.high_battery {
            return Err(invalid(format!(
                "low_battery {} exceeds high_battery {}",
                self.low_battery, self.high_battery
            )));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> ConfigError {
    ConfigError::ValidationError(msg)
}
