//! Drive mode selection cascade.
//!
//! Rules are evaluated in a fixed priority order; the first rule that matches
//! decides the mode. Reordering the rules changes observable behaviour.
//!
//! | # | Rule            | Mode          |
//! |---|-----------------|---------------|
//! | 1 | Regen           | `Regen`       |
//! | 2 | CriticalBattery | `EngineOnly`  |
//! | 3 | MaxPower        | `Hybrid`      |
//! | 4 | ElectricEligible| `ElectricOnly`|
//! | 5 | HighwayCruise   | `EngineOnly`  |
//! | 6 | Default         | `Hybrid`      |
//!
//! Every comparison is strict. The input is a [`ValidVehicleState`], so the
//! cascade is total and cannot fail.

use hev::powertrain::config::SelectorThresholds;
use hev::powertrain::state::{DriveMode, ValidVehicleState};
use static_assertions::assert_impl_all;

/// Rule of the cascade that produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[repr(u8)]
pub enum SelectionRule {
    Regen = 1,
    CriticalBattery = 2,
    MaxPower = 3,
    ElectricEligible = 4,
    HighwayCruise = 5,
    Default = 6,
}

impl SelectionRule {
    /// Mode this rule selects when it fires.
    pub const fn mode(self) -> DriveMode {
        match self {
            Self::Regen => DriveMode::Regen,
            Self::CriticalBattery | Self::HighwayCruise => DriveMode::EngineOnly,
            Self::MaxPower | Self::Default => DriveMode::Hybrid,
            Self::ElectricEligible => DriveMode::ElectricOnly,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Regen => "regen",
            Self::CriticalBattery => "critical-battery",
            Self::MaxPower => "max-power",
            Self::ElectricEligible => "electric-eligible",
            Self::HighwayCruise => "highway-cruise",
            Self::Default => "default",
        }
    }
}

impl std::fmt::Display for SelectionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Selected mode together with the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub mode: DriveMode,
    pub rule: SelectionRule,
}

impl From<SelectionRule> for Decision {
    fn from(rule: SelectionRule) -> Self {
        Self {
            mode: rule.mode(),
            rule,
        }
    }
}

/// Stateless mode selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ModeSelector {
    thresholds: SelectorThresholds,
}

assert_impl_all!(ModeSelector: Send, Sync, Copy);

impl ModeSelector {
    pub const fn new(thresholds: SelectorThresholds) -> Self {
        Self { thresholds }
    }

    #[inline]
    pub const fn thresholds(&self) -> &SelectorThresholds {
        &self.thresholds
    }

    /// Pick the drive mode for this cycle.
    #[inline]
    pub fn select(&self, state: &ValidVehicleState) -> DriveMode {
        self.explain(state).mode
    }

    /// Pick the drive mode and report which rule fired.
    pub fn explain(&self, state: &ValidVehicleState) -> Decision {
        let rule = if self.should_regen(state) {
            SelectionRule::Regen
        } else if self.battery_critical(state) {
            SelectionRule::CriticalBattery
        } else if self.needs_max_power(state) {
            SelectionRule::MaxPower
        } else if self.can_go_electric(state) {
            SelectionRule::ElectricEligible
        } else if self.prefers_engine(state) {
            SelectionRule::HighwayCruise
        } else {
            SelectionRule::Default
        };
        rule.into()
    }

    /// Rule 1: braking or steep descent while moving, with room in the battery.
    pub fn should_regen(&self, state: &ValidVehicleState) -> bool {
        let t = &self.thresholds;
        let moving = state.speed > t.regen_speed_min;
        let braking = state.brake_position > t.regen_brake_min && moving;
        let descending = state.gradient < t.steep_down && moving;
        (braking || descending) && state.battery_soc < t.regen_battery_max
    }

    /// Rule 2: charge too low to draw from the battery.
    #[inline]
    pub fn battery_critical(&self, state: &ValidVehicleState) -> bool {
        state.battery_soc < self.thresholds.low_battery
    }

    /// Rule 3: hard throttle, steep climb or heavy vehicle.
    pub fn needs_max_power(&self, state: &ValidVehicleState) -> bool {
        let t = &self.thresholds;
        state.throttle_position > t.max_power_throttle
            || state.gradient > t.steep_hill
            || state.load > t.heavy_load
    }

    /// Rule 4: all five electric-only conditions hold.
    pub fn can_go_electric(&self, state: &ValidVehicleState) -> bool {
        let t = &self.thresholds;
        state.speed < t.ev_speed_limit
            && state.throttle_position < t.ev_throttle_max
            && state.battery_soc > t.ev_battery_min
            && state.gradient < t.ev_gradient_max
            && state.load < t.heavy_load
    }

    /// Rule 5: highway cruising at moderate throttle.
    #[inline]
    pub fn prefers_engine(&self, state: &ValidVehicleState) -> bool {
        state.speed > self.thresholds.highway_speed
            && state.throttle_position < self.thresholds.highway_throttle_max
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
