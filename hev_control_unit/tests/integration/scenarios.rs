//! Integration test: reference driving scenarios through `HybridController::update`.

use hev::powertrain::error::ValidationError;
use hev::powertrain::state::{DriveMode, VehicleState};

use hev_control_unit::controller::HybridController;

fn run(
    speed: f64,
    throttle: f64,
    brake: f64,
    battery: f64,
    load: f64,
    gradient: f64,
) -> (DriveMode, bool) {
    let result = HybridController::default()
        .update(&VehicleState::new(speed, throttle, brake, battery, load, gradient))
        .unwrap();
    (result.mode, result.engine_on)
}

#[test]
fn city_driving_is_electric() {
    assert_eq!(run(35.0, 25.0, 0.0, 75.0, 1200.0, 0.0), (DriveMode::ElectricOnly, false));
}

#[test]
fn highway_cruise_is_engine_only() {
    assert_eq!(run(110.0, 45.0, 0.0, 60.0, 1300.0, 0.0), (DriveMode::EngineOnly, true));
}

#[test]
fn full_acceleration_is_hybrid() {
    assert_eq!(run(50.0, 95.0, 0.0, 65.0, 1250.0, 0.0), (DriveMode::Hybrid, true));
}

#[test]
fn braking_in_traffic_regens() {
    assert_eq!(run(40.0, 0.0, 70.0, 50.0, 1200.0, 0.0), (DriveMode::Regen, false));
}

#[test]
fn low_battery_overrides_to_engine() {
    assert_eq!(run(50.0, 40.0, 0.0, 15.0, 1200.0, 0.0), (DriveMode::EngineOnly, true));
}

#[test]
fn steep_hill_is_hybrid() {
    assert_eq!(run(45.0, 60.0, 0.0, 55.0, 1400.0, 8.0), (DriveMode::Hybrid, true));
}

#[test]
fn impossible_battery_is_rejected() {
    let state = VehicleState::new(50.0, 40.0, 0.0, 150.0, 1200.0, 0.0);
    let err = HybridController::default().update(&state).unwrap_err();
    assert_eq!(err, ValidationError::BatteryOutOfRange { value: 150.0 });
}

#[test]
fn negative_speed_is_rejected() {
    let state = VehicleState::new(-50.0, 40.0, 0.0, 60.0, 1200.0, 0.0);
    assert!(matches!(
        HybridController::default().update(&state),
        Err(ValidationError::NegativeSpeed { value }) if value == -50.0
    ));
}
