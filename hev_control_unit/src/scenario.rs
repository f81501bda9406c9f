//! Scenario runner for bench demonstrations.
//!
//! Feeds a list of named snapshots through a [`HybridController`] and turns
//! each cycle into a printable report. A snapshot that fails validation is
//! recorded as a rejected cycle and the run continues.

use std::collections::BTreeMap;
use std::fmt;

use hev::powertrain::error::ValidationError;
use hev::powertrain::state::{DriveMode, VehicleState};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::controller::{HybridController, SelectionResult};
use crate::selector::SelectionRule;

const RULE_WIDTH: usize = 60;

/// Named snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(flatten)]
    pub state: VehicleState,
}

impl Scenario {
    pub fn new(name: impl Into<String>, state: VehicleState) -> Self {
        Self {
            name: name.into(),
            state,
        }
    }
}

/// Scenario list loaded from TOML.
///
/// ```toml
/// [[scenario]]
/// name = "Braking in traffic"
/// speed = 40.0
/// throttle_position = 0.0
/// brake_position = 70.0
/// battery_soc = 50.0
/// load = 1200.0
/// gradient = 0.0
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScenarioFile {
    #[serde(default)]
    pub scenario: Vec<Scenario>,
}

/// Built-in bench scenarios.
pub fn builtin_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "City driving, light load, good battery",
            VehicleState::new(35.0, 25.0, 0.0, 75.0, 1200.0, 0.0),
        ),
        Scenario::new(
            "Highway cruise",
            VehicleState::new(110.0, 45.0, 0.0, 60.0, 1300.0, 0.0),
        ),
        Scenario::new(
            "Full acceleration",
            VehicleState::new(50.0, 95.0, 0.0, 65.0, 1250.0, 0.0),
        ),
        Scenario::new(
            "Climbing steep hill",
            VehicleState::new(45.0, 60.0, 0.0, 55.0, 1400.0, 8.0),
        ),
        Scenario::new(
            "Braking in traffic",
            VehicleState::new(40.0, 0.0, 70.0, 50.0, 1200.0, 0.0),
        ),
        Scenario::new(
            "Low battery alert",
            VehicleState::new(50.0, 40.0, 0.0, 15.0, 1200.0, 0.0),
        ),
        Scenario::new(
            "Downhill drive",
            VehicleState::new(55.0, 0.0, 0.0, 60.0, 1300.0, -6.0),
        ),
        Scenario::new(
            "Moving day (heavy load)",
            VehicleState::new(60.0, 50.0, 0.0, 70.0, 2200.0, 0.0),
        ),
    ]
}

/// Accepted cycle: controller output plus the rule that fired.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CycleReport {
    #[serde(flatten)]
    pub result: SelectionResult,
    pub rule: SelectionRule,
}

/// Result of running one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioOutcome {
    pub name: String,
    pub state: VehicleState,
    pub outcome: Result<CycleReport, ValidationError>,
}

impl ScenarioOutcome {
    pub fn mode(&self) -> Option<DriveMode> {
        self.outcome.as_ref().ok().map(|r| r.result.mode)
    }

    pub fn is_rejected(&self) -> bool {
        self.outcome.is_err()
    }

    /// JSON record for machine-readable reports.
    pub fn to_json(&self) -> serde_json::Value {
        match &self.outcome {
            Ok(report) => serde_json::json!({
                "name": self.name,
                "input": self.state,
                "accepted": true,
                "cycle": report,
            }),
            Err(e) => serde_json::json!({
                "name": self.name,
                "input": self.state,
                "accepted": false,
                "error": e.to_string(),
                "field": e.field().name(),
            }),
        }
    }
}

impl fmt::Display for ScenarioOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.state;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f, "Scenario: {}", self.name)?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f, "Speed:    {} km/h", s.speed)?;
        writeln!(f, "Throttle: {}%", s.throttle_position)?;
        writeln!(f, "Brake:    {}%", s.brake_position)?;
        writeln!(f, "Battery:  {}%", s.battery_soc)?;
        writeln!(f, "Load:     {} kg", s.load)?;
        writeln!(f, "Road:     {}° ({})", s.gradient, s.road_profile().label())?;
        writeln!(f)?;
        match &self.outcome {
            Ok(report) => {
                writeln!(f, "→ Selected mode: {}", report.result.mode)?;
                writeln!(f, "→ Rule:          {}", report.rule)?;
                write!(
                    f,
                    "→ Engine:        {}",
                    if report.result.engine_on { "ON" } else { "OFF" }
                )
            }
            Err(e) => write!(f, "→ Rejected:      {e}"),
        }
    }
}

/// Per-mode tally over a scenario run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub cycles: usize,
    pub rejected: usize,
    pub by_mode: BTreeMap<&'static str, usize>,
}

impl RunSummary {
    pub fn from_outcomes(outcomes: &[ScenarioOutcome]) -> Self {
        let mut summary = Self {
            cycles: outcomes.len(),
            ..Self::default()
        };
        for outcome in outcomes {
            match outcome.mode() {
                Some(mode) => *summary.by_mode.entry(mode.label()).or_default() += 1,
                None => summary.rejected += 1,
            }
        }
        summary
    }

    pub fn count(&self, mode: DriveMode) -> usize {
        self.by_mode.get(mode.label()).copied().unwrap_or(0)
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(
            f,
            "{} cycles, {} accepted, {} rejected",
            self.cycles,
            self.cycles - self.rejected,
            self.rejected
        )?;
        for (mode, count) in &self.by_mode {
            writeln!(f, "  {mode}: {count}")?;
        }
        write!(f, "{}", "=".repeat(RULE_WIDTH))
    }
}

/// Run every scenario through `controller`, one cycle each, in order.
pub fn run_scenarios(controller: &HybridController, scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
    scenarios
        .iter()
        .map(|scenario| {
            let outcome = controller
                .update_explained(&scenario.state)
                .map(|(result, rule)| CycleReport { result, rule });

            match &outcome {
                Ok(report) => debug!(
                    scenario = %scenario.name,
                    mode = %report.result.mode,
                    rule = %report.rule,
                    engine_on = report.result.engine_on,
                    "cycle accepted"
                ),
                Err(e) => warn!(
                    scenario = %scenario.name,
                    field = %e.field(),
                    "snapshot rejected, skipping cycle: {e}"
                ),
            }

            ScenarioOutcome {
                name: scenario.name.clone(),
                state: scenario.state,
                outcome,
            }
        })
        .collect()
}
