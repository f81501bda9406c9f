//! Integration test: rule priority when several rule conditions hold at once.
//!
//! Each state satisfies two adjacent rules; the higher-priority rule must win.

use hev::powertrain::config::SelectorThresholds;
use hev::powertrain::state::{DriveMode, ValidVehicleState, VehicleState};

use hev_control_unit::controller::HybridController;
use hev_control_unit::selector::SelectionRule;

fn decide(state: VehicleState) -> (DriveMode, SelectionRule) {
    let (result, rule) = HybridController::default().update_explained(&state).unwrap();
    (result.mode, rule)
}

#[test]
fn regen_beats_critical_battery() {
    // Braking at 10 % SoC: both regen and critical-battery hold.
    let state = VehicleState::new(40.0, 0.0, 70.0, 10.0, 1200.0, 0.0);
    assert_eq!(decide(state), (DriveMode::Regen, SelectionRule::Regen));
}

#[test]
fn critical_battery_beats_max_power() {
    // Flooring it up a steep hill with a heavy load at 15 % SoC.
    let state = VehicleState::new(50.0, 95.0, 0.0, 15.0, 2200.0, 8.0);
    assert_eq!(
        decide(state),
        (DriveMode::EngineOnly, SelectionRule::CriticalBattery)
    );
}

#[test]
fn max_power_beats_electric() {
    // Slow, gentle and charged, but heavy enough to force max power.
    let state = VehicleState {
        load: 1600.0,
        ..VehicleState::new(30.0, 10.0, 0.0, 80.0, 1200.0, 0.0)
    };
    assert_eq!(decide(state), (DriveMode::Hybrid, SelectionRule::MaxPower));
}

#[test]
fn electric_beats_highway_with_custom_calibration() {
    // With the defaults the EV speed limit sits below highway speed, so
    // rules 4 and 5 can only overlap under a custom calibration.
    let controller = HybridController::new(SelectorThresholds {
        ev_speed_limit: 120.0,
        ..Default::default()
    });
    let state = VehicleState::new(100.0, 20.0, 0.0, 70.0, 1200.0, 0.0);
    let (result, rule) = controller.update_explained(&state).unwrap();
    assert_eq!(result.mode, DriveMode::ElectricOnly);
    assert_eq!(rule, SelectionRule::ElectricEligible);
    let valid = ValidVehicleState::new(state).unwrap();
    assert!(controller.selector().prefers_engine(&valid));
}

#[test]
fn highway_beats_default() {
    let state = VehicleState::new(110.0, 45.0, 0.0, 25.0, 1300.0, 0.0);
    assert_eq!(
        decide(state),
        (DriveMode::EngineOnly, SelectionRule::HighwayCruise)
    );
}

#[test]
fn default_when_nothing_applies() {
    let state = VehicleState::new(65.0, 50.0, 0.0, 50.0, 1300.0, 1.0);
    assert_eq!(decide(state), (DriveMode::Hybrid, SelectionRule::Default));
}

#[test]
fn descent_regen_beats_max_power_load() {
    let state = VehicleState::new(55.0, 0.0, 0.0, 60.0, 2200.0, -6.0);
    assert_eq!(decide(state), (DriveMode::Regen, SelectionRule::Regen));
}

#[test]
fn full_battery_falls_through_to_lower_rules() {
    // Braking with a full battery: regen blocked, electric conditions hold.
    let state = VehicleState::new(30.0, 0.0, 60.0, 95.0, 1200.0, 0.0);
    assert_eq!(
        decide(state),
        (DriveMode::ElectricOnly, SelectionRule::ElectricEligible)
    );
}
