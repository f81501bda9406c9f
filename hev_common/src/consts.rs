//! System-wide constants for the HEV workspace.
//!
//! Single source of truth for physical bounds and default names.

/// Lower bound for every percentage reading (SoC, pedal positions).
pub const PERCENT_MIN: f64 = 0.0;

/// Upper bound for every percentage reading (SoC, pedal positions).
pub const PERCENT_MAX: f64 = 100.0;

/// Lowest valid vehicle speed [km/h].
pub const SPEED_MIN: f64 = 0.0;

/// Default service name reported in logs.
pub const DEFAULT_SERVICE_NAME: &str = "hev-mode-selector";
