//! Prelude module for common re-exports.
//!
//! Consumers can do `use hev_common::prelude::*;` and get the most
//! important types without listing individual paths.

// ─── Logging ────────────────────────────────────────────────────────
pub use crate::config::LogLevel;

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, SharedConfig};
pub use crate::powertrain::config::SelectorThresholds;

// ─── Vehicle State ──────────────────────────────────────────────────
pub use crate::powertrain::error::{StateField, ValidationError};
pub use crate::powertrain::state::{DriveMode, RoadProfile, ValidVehicleState, VehicleState};
