//! Integration test: one controller shared by many threads.

use std::sync::Arc;
use std::thread;

use hev::powertrain::state::{DriveMode, VehicleState};

use hev_control_unit::controller::HybridController;

#[test]
fn shared_controller_gives_identical_results_across_threads() {
    let controller = Arc::new(HybridController::default());
    let states = [
        (VehicleState::new(35.0, 25.0, 0.0, 75.0, 1200.0, 0.0), DriveMode::ElectricOnly),
        (VehicleState::new(110.0, 45.0, 0.0, 60.0, 1300.0, 0.0), DriveMode::EngineOnly),
        (VehicleState::new(50.0, 95.0, 0.0, 65.0, 1250.0, 0.0), DriveMode::Hybrid),
        (VehicleState::new(40.0, 0.0, 70.0, 50.0, 1200.0, 0.0), DriveMode::Regen),
    ];

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let controller = Arc::clone(&controller);
            thread::spawn(move || {
                for cycle in 0..1_000 {
                    let (state, expected) = states[(worker + cycle) % states.len()];
                    let result = controller.update(&state).unwrap();
                    assert_eq!(result.mode, expected);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn scoped_threads_borrow_controller_without_arc() {
    let controller = HybridController::default();
    let state = VehicleState::new(50.0, 40.0, 0.0, 15.0, 1200.0, 0.0);

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                assert_eq!(controller.update(&state).unwrap().mode, DriveMode::EngineOnly);
            });
        }
    });
}
