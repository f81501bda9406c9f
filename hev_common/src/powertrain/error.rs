//! Snapshot validation errors.
//!
//! One variant per checked bound. The variant names the field, and the
//! payload carries the offending reading.

use thiserror::Error;

/// Field of a [`VehicleState`](super::state::VehicleState) covered by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateField {
    BatterySoc,
    Speed,
    ThrottlePosition,
    BrakePosition,
}

impl StateField {
    pub const fn name(self) -> &'static str {
        match self {
            Self::BatterySoc => "battery_soc",
            Self::Speed => "speed",
            Self::ThrottlePosition => "throttle_position",
            Self::BrakePosition => "brake_position",
        }
    }
}

impl std::fmt::Display for StateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A snapshot reading outside its physical range.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationError {
    /// State of charge outside [0, 100] %.
    #[error("battery_soc {value}% out of range [0, 100]")]
    BatteryOutOfRange { value: f64 },

    /// Speed below 0 km/h.
    #[error("speed {value} km/h must be >= 0")]
    NegativeSpeed { value: f64 },

    /// Accelerator pedal outside [0, 100] %.
    #[error("throttle_position {value}% out of range [0, 100]")]
    ThrottleOutOfRange { value: f64 },

    /// Brake pedal outside [0, 100] %.
    #[error("brake_position {value}% out of range [0, 100]")]
    BrakeOutOfRange { value: f64 },
}

impl ValidationError {
    /// Which field violated its bound.
    pub const fn field(&self) -> StateField {
        match self {
            Self::BatteryOutOfRange { .. } => StateField::BatterySoc,
            Self::NegativeSpeed { .. } => StateField::Speed,
            Self::ThrottleOutOfRange { .. } => StateField::ThrottlePosition,
            Self::BrakeOutOfRange { .. } => StateField::BrakePosition,
        }
    }

    /// The rejected reading.
    pub const fn value(&self) -> f64 {
        match *self {
            Self::BatteryOutOfRange { value }
            | Self::NegativeSpeed { value }
            | Self::ThrottleOutOfRange { value }
            | Self::BrakeOutOfRange { value } => value,
        }
    }
}
