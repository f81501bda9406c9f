//! Property tests: totality, validation soundness and engine-on derivation.

use hev::powertrain::state::{DriveMode, VehicleState};
use proptest::prelude::*;

use hev_control_unit::controller::HybridController;

fn valid_state() -> impl Strategy<Value = VehicleState> {
    (
        0.0f64..250.0,
        0.0f64..=100.0,
        0.0f64..=100.0,
        0.0f64..=100.0,
        500.0f64..4000.0,
        -15.0f64..15.0,
    )
        .prop_map(|(speed, throttle, brake, battery, load, gradient)| {
            VehicleState::new(speed, throttle, brake, battery, load, gradient)
        })
}

fn out_of_percent() -> impl Strategy<Value = f64> {
    prop_oneof![-1.0e6f64..-1.0e-9, 100.000_001f64..1.0e6]
}

proptest! {
    #[test]
    fn every_valid_state_gets_a_mode(state in valid_state()) {
        let result = HybridController::default().update(&state);
        prop_assert!(result.is_ok());
        let result = result.unwrap();
        prop_assert!(DriveMode::ALL.contains(&result.mode));
        prop_assert_eq!(result.speed, state.speed);
        prop_assert_eq!(result.battery, state.battery_soc);
    }

    #[test]
    fn engine_on_iff_engine_or_hybrid(state in valid_state()) {
        let result = HybridController::default().update(&state).unwrap();
        let expected = matches!(result.mode, DriveMode::EngineOnly | DriveMode::Hybrid);
        prop_assert_eq!(result.engine_on, expected);
    }

    #[test]
    fn selection_is_deterministic(state in valid_state()) {
        let controller = HybridController::default();
        prop_assert_eq!(controller.update(&state), controller.update(&state));
    }

    #[test]
    fn out_of_range_battery_fails(state in valid_state(), battery in out_of_percent()) {
        let state = VehicleState { battery_soc: battery, ..state };
        prop_assert!(state.validate().is_err());
        prop_assert!(HybridController::default().update(&state).is_err());
    }

    #[test]
    fn negative_speed_fails(state in valid_state(), speed in -1.0e6f64..-1.0e-9) {
        let state = VehicleState { speed, ..state };
        prop_assert!(state.validate().is_err());
    }

    #[test]
    fn out_of_range_pedals_fail(
        state in valid_state(),
        throttle in out_of_percent(),
        brake in out_of_percent(),
    ) {
        let throttled = VehicleState { throttle_position: throttle, ..state };
        prop_assert!(throttled.validate().is_err());
        let braked = VehicleState { brake_position: brake, ..state };
        prop_assert!(braked.validate().is_err());
    }

    #[test]
    fn in_range_states_validate(state in valid_state()) {
        prop_assert!(state.validate().is_ok());
    }
}
