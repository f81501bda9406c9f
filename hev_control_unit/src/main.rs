//! # HEV Control Unit
//!
//! Bench front-end for the drive mode selector.
//!
//! Runs either the built-in scenario set, a TOML scenario file
//! (`--scenarios`), or a single snapshot given on the command line
//! (`--speed ...`). Thresholds come from an optional TOML config (`--config`).

use clap::{Parser, ValueEnum};
use hev::config::{ConfigLoader, LogLevel};
use hev::powertrain::state::VehicleState;
use hev_control_unit::config::{AppConfig, load_app_config};
use hev_control_unit::scenario::{
    RunSummary, Scenario, ScenarioFile, ScenarioOutcome, builtin_scenarios, run_scenarios,
};
use std::path::PathBuf;
use std::process;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

/// HEV Control Unit: hybrid drive mode selection
#[derive(Parser, Debug)]
#[command(name = "hev_control_unit")]
#[command(author = "RTS007")]
#[command(version)]
#[command(about = "Selects the hybrid powertrain drive mode from vehicle telemetry")]
struct Args {
    /// Path to configuration TOML ([shared] + [thresholds]).
    /// Built-in calibration is used when omitted.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Path to a scenario TOML file ([[scenario]] tables).
    /// Built-in scenarios are used when omitted.
    #[arg(long, value_name = "FILE", conflicts_with = "speed")]
    scenarios: Option<PathBuf>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Enable verbose logging (DEBUG level).
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format.
    #[arg(long)]
    json_logs: bool,

    #[command(flatten)]
    snapshot: SnapshotArgs,
}

/// Single snapshot given on the command line.
#[derive(clap::Args, Debug)]
struct SnapshotArgs {
    /// Vehicle speed [km/h]. Selects single-snapshot mode.
    #[arg(long, allow_negative_numbers = true)]
    speed: Option<f64>,

    /// Accelerator pedal position [%].
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true, requires = "speed")]
    throttle: f64,

    /// Brake pedal position [%].
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true, requires = "speed")]
    brake: f64,

    /// Battery state of charge [%].
    #[arg(long, default_value_t = 50.0, allow_negative_numbers = true, requires = "speed")]
    battery: f64,

    /// Vehicle mass [kg].
    #[arg(long, default_value_t = 1200.0, allow_negative_numbers = true, requires = "speed")]
    load: f64,

    /// Road slope [deg], positive uphill.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true, requires = "speed")]
    gradient: f64,
}

impl SnapshotArgs {
    fn to_state(&self) -> Option<VehicleState> {
        self.speed.map(|speed| {
            VehicleState::new(
                speed,
                self.throttle,
                self.brake,
                self.battery,
                self.load,
                self.gradient,
            )
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

fn main() {
    let args = Args::parse();

    let config = match args.config.as_deref().map(load_app_config).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            setup_tracing(&args, LogLevel::default());
            error!("FATAL: config {}: {e}", display_path(args.config.as_ref()));
            process::exit(1);
        }
    };
    setup_tracing(&args, config.shared.log_level);

    info!(
        service = %config.shared.service_name,
        "HEV Control Unit v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    if let Err(e) = run(&args, &config) {
        error!("FATAL: {e}");
        process::exit(1);
    }
}

fn run(args: &Args, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let controller = config.controller();

    if let Some(state) = args.snapshot.to_state() {
        let outcomes = run_scenarios(&controller, &[Scenario::new("command line", state)]);
        emit(args.format, &outcomes);
        return match outcomes.into_iter().next().map(|o| o.outcome) {
            Some(Err(e)) => Err(e.into()),
            _ => Ok(()),
        };
    }

    let scenarios = match &args.scenarios {
        Some(path) => {
            info!("Loading scenarios from {}", path.display());
            ScenarioFile::load(path)
                .map_err(|e| format!("scenarios {}: {e}", path.display()))?
                .scenario
        }
        None => builtin_scenarios(),
    };
    info!("Running {} scenarios", scenarios.len());

    let outcomes = run_scenarios(&controller, &scenarios);
    emit(args.format, &outcomes);

    let summary = RunSummary::from_outcomes(&outcomes);
    if args.format == ReportFormat::Text {
        println!("{summary}");
    }
    info!(
        cycles = summary.cycles,
        rejected = summary.rejected,
        "Scenario run complete"
    );
    Ok(())
}

fn emit(format: ReportFormat, outcomes: &[ScenarioOutcome]) {
    for outcome in outcomes {
        match format {
            ReportFormat::Text => println!("{outcome}\n"),
            ReportFormat::Json => println!("{}", outcome.to_json()),
        }
    }
}

fn display_path(path: Option<&PathBuf>) -> String {
    path.map(|p| p.display().to_string()).unwrap_or_default()
}

/// Setup tracing subscriber from CLI arguments and the configured level.
fn setup_tracing(args: &Args, configured: LogLevel) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        configured.as_filter().parse().unwrap_or(Level::INFO)
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
}
