//! Integration test: config and scenario files from disk.

use std::io::Write;
use std::path::Path;

use hev::config::{ConfigError, ConfigLoader, LogLevel};
use hev::powertrain::config::SelectorThresholds;
use hev::powertrain::state::{DriveMode, VehicleState};
use tempfile::NamedTempFile;

use hev_control_unit::config::load_app_config;
use hev_control_unit::scenario::{RunSummary, ScenarioFile, run_scenarios};

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn shipped_config_matches_defaults() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../config/hybrid.toml");
    let config = load_app_config(&path).unwrap();
    assert_eq!(config.shared.log_level, LogLevel::Info);
    assert_eq!(config.thresholds, SelectorThresholds::default());
}

#[test]
fn missing_config_file() {
    assert_eq!(
        load_app_config(Path::new("/nonexistent/hybrid.toml")),
        Err(ConfigError::FileNotFound)
    );
}

#[test]
fn recalibrated_config_changes_decision() {
    let file = write_temp(
        r#"
[shared]
service_name = "hev-cold-weather"

[thresholds]
low_battery = 30.0
"#,
    );
    let config = load_app_config(file.path()).unwrap();
    let controller = config.controller();

    // 25 % SoC is fine with the default calibration, critical with this one.
    let state = VehicleState::new(50.0, 40.0, 0.0, 25.0, 1200.0, 0.0);
    assert_eq!(controller.update(&state).unwrap().mode, DriveMode::EngineOnly);
}

#[test]
fn rejected_thresholds_do_not_load() {
    let file = write_temp("[thresholds]\nlow_battery = 90.0\n");
    assert!(matches!(
        load_app_config(file.path()),
        Err(ConfigError::ValidationError(_))
    ));
}

#[test]
fn shipped_scenarios_run_to_completion() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../config/scenarios.toml");
    let file = ScenarioFile::load(&path).unwrap();
    let outcomes = run_scenarios(&Default::default(), &file.scenario);

    let summary = RunSummary::from_outcomes(&outcomes);
    assert_eq!(summary.cycles, 4);
    assert_eq!(summary.rejected, 1);
    assert_eq!(outcomes[0].mode(), Some(DriveMode::Regen));
    assert_eq!(outcomes[1].mode(), Some(DriveMode::Hybrid));
    assert_eq!(outcomes[2].mode(), Some(DriveMode::Hybrid));
    assert!(outcomes[3].is_rejected());
}
