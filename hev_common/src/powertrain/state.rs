//! Vehicle snapshot and drive mode types.
//!
//! `VehicleState` is one telemetry snapshot for one control cycle. It is
//! created fresh by the telemetry layer, validated once, and dropped after
//! the cycle. `DriveMode` is the sole output of the mode selector.

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use static_assertions::assert_impl_all;

use super::error::ValidationError;
use crate::consts::{PERCENT_MAX, PERCENT_MIN, SPEED_MIN};

// ─── Drive Mode ─────────────────────────────────────────────────────

/// Powertrain operating mode for one control cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum DriveMode {
    /// Traction motor only, engine off.
    #[default]
    ElectricOnly = 0,
    /// Combustion engine only.
    EngineOnly = 1,
    /// Engine and motor together.
    Hybrid = 2,
    /// Motor used as a generator while braking or descending.
    Regen = 3,
}

impl DriveMode {
    /// Every mode, in discriminant order.
    pub const ALL: [DriveMode; 4] = [
        Self::ElectricOnly,
        Self::EngineOnly,
        Self::Hybrid,
        Self::Regen,
    ];

    /// Convert from raw `u8`. Returns `None` for invalid values.
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::ElectricOnly),
            1 => Some(Self::EngineOnly),
            2 => Some(Self::Hybrid),
            3 => Some(Self::Regen),
            _ => None,
        }
    }

    /// Human-readable label used in reports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::ElectricOnly => "Electric Only",
            Self::EngineOnly => "Engine Only",
            Self::Hybrid => "Hybrid",
            Self::Regen => "Regenerative Braking",
        }
    }

    /// True when the combustion engine runs in this mode.
    #[inline]
    pub const fn engine_running(self) -> bool {
        matches!(self, Self::EngineOnly | Self::Hybrid)
    }
}

impl std::fmt::Display for DriveMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ─── Road Profile ───────────────────────────────────────────────────

/// Coarse road slope classification for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadProfile {
    Uphill,
    Downhill,
    Flat,
}

impl RoadProfile {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Uphill => "uphill",
            Self::Downhill => "downhill",
            Self::Flat => "flat",
        }
    }
}

// ─── Vehicle State ──────────────────────────────────────────────────

/// Sensor snapshot for a single control cycle.
///
/// `current_mode` is carried for reporting only. Mode selection never reads
/// it, so selection stays memoryless.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    /// Vehicle speed [km/h], ≥ 0.
    pub speed: f64,
    /// Accelerator pedal position [%], 0..=100.
    pub throttle_position: f64,
    /// Brake pedal position [%], 0..=100.
    pub brake_position: f64,
    /// Battery state of charge [%], 0..=100.
    pub battery_soc: f64,
    /// Vehicle mass [kg]. Not range-checked.
    pub load: f64,
    /// Road slope [deg], positive uphill. Not range-checked.
    pub gradient: f64,
    /// Mode reported by the powertrain for the previous cycle.
    #[serde(default)]
    pub current_mode: DriveMode,
}

impl VehicleState {
    /// Build a snapshot with `current_mode = ElectricOnly`.
    pub const fn new(
        speed: f64,
        throttle_position: f64,
        brake_position: f64,
        battery_soc: f64,
        load: f64,
        gradient: f64,
    ) -> Self {
        Self {
            speed,
            throttle_position,
            brake_position,
            battery_soc,
            load,
            gradient,
            current_mode: DriveMode::ElectricOnly,
        }
    }

    pub const fn with_current_mode(mut self, mode: DriveMode) -> Self {
        self.current_mode = mode;
        self
    }

    /// Check the range invariants.
    ///
    /// Checks run in a fixed order (battery, speed, throttle, brake) and the
    /// first violation is returned. NaN fails every bound. `load` and
    /// `gradient` are not checked, not even for NaN.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] variant of the first violated bound.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !within_percent(self.battery_soc) {
            return Err(ValidationError::BatteryOutOfRange {
                value: self.battery_soc,
            });
        }
        if self.speed.is_nan() || self.speed < SPEED_MIN {
            return Err(ValidationError::NegativeSpeed { value: self.speed });
        }
        if !within_percent(self.throttle_position) {
            return Err(ValidationError::ThrottleOutOfRange {
                value: self.throttle_position,
            });
        }
        if !within_percent(self.brake_position) {
            return Err(ValidationError::BrakeOutOfRange {
                value: self.brake_position,
            });
        }
        Ok(())
    }

    pub fn road_profile(&self) -> RoadProfile {
        if self.gradient > 0.0 {
            RoadProfile::Uphill
        } else if self.gradient < 0.0 {
            RoadProfile::Downhill
        } else {
            RoadProfile::Flat
        }
    }
}

#[inline]
fn within_percent(value: f64) -> bool {
    (PERCENT_MIN..=PERCENT_MAX).contains(&value)
}

// ─── Validated Snapshot ─────────────────────────────────────────────

/// A [`VehicleState`] that has passed [`VehicleState::validate`].
///
/// This is the only input type the mode selector accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidVehicleState(VehicleState);

impl ValidVehicleState {
    /// Validate `state` and wrap it.
    pub fn new(state: VehicleState) -> Result<Self, ValidationError> {
        state.validate()?;
        Ok(Self(state))
    }

    #[inline]
    pub const fn into_inner(self) -> VehicleState {
        self.0
    }
}

impl TryFrom<VehicleState> for ValidVehicleState {
    type Error = ValidationError;

    fn try_from(state: VehicleState) -> Result<Self, Self::Error> {
        Self::new(state)
    }
}

impl Deref for ValidVehicleState {
    type Target = VehicleState;

    #[inline]
    fn deref(&self) -> &VehicleState {
        &self.0
    }
}

assert_impl_all!(VehicleState: Send, Sync, Copy);
assert_impl_all!(ValidVehicleState: Send, Sync, Copy);

// ─── Tests ──────────────────────────────────────────────────────────
