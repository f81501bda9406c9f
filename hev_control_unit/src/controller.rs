//! Hybrid controller facade.
//!
//! Validate → select → derive engine demand. Validation is the only failure
//! path and its error is returned to the caller unchanged.

use hev::powertrain::config::SelectorThresholds;
use hev::powertrain::error::ValidationError;
use hev::powertrain::state::{DriveMode, ValidVehicleState, VehicleState};
use serde::Serialize;
use static_assertions::assert_impl_all;

use crate::selector::{ModeSelector, SelectionRule};

/// Output of one control cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SelectionResult {
    /// Selected drive mode.
    pub mode: DriveMode,
    /// Engine demand: on for `EngineOnly` and `Hybrid`.
    pub engine_on: bool,
    /// Pass-through of the snapshot speed [km/h].
    pub speed: f64,
    /// Pass-through of the snapshot state of charge [%].
    pub battery: f64,
}

/// Per-cycle entry point for the drive-by-wire loop.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HybridController {
    selector: ModeSelector,
}

assert_impl_all!(HybridController: Send, Sync, Copy);
assert_impl_all!(SelectionResult: Send, Sync, Copy);

impl HybridController {
    pub const fn new(thresholds: SelectorThresholds) -> Self {
        Self::with_selector(ModeSelector::new(thresholds))
    }

    pub const fn with_selector(selector: ModeSelector) -> Self {
        Self { selector }
    }

    #[inline]
    pub const fn selector(&self) -> &ModeSelector {
        &self.selector
    }

    /// Run one control cycle.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] from [`VehicleState::validate`]; the
    /// selector is not consulted in that case.
    pub fn update(&self, state: &VehicleState) -> Result<SelectionResult, ValidationError> {
        self.update_explained(state).map(|(result, _)| result)
    }

    /// Same as [`update`](Self::update), also returning the rule that fired.
    pub fn update_explained(
        &self,
        state: &VehicleState,
    ) -> Result<(SelectionResult, SelectionRule), ValidationError> {
        let valid = ValidVehicleState::new(*state)?;
        let decision = self.selector.explain(&valid);

        let result = SelectionResult {
            mode: decision.mode,
            engine_on: decision.mode.engine_running(),
            speed: valid.speed,
            battery: valid.battery_soc,
        };
        Ok((result, decision.rule))
    }
}
