//! Built-in reference scenario and resolution of file/flag overrides.

use std::path::PathBuf;

use drone_config::{ConfigError, load_scenario, load_waypoints_csv};
use drone_core::Waypoint;
use drone_energy::EnergyCoefficients;
use drone_mission::MissionConfig;
use drone_mission::scenario::{from_config, waypoint_from_config};

pub const REFERENCE_NAME: &str = "reference";

/// Coefficients of the reference run: `a = 0.1`, `b = 0.05`, `c = 10`.
pub const REFERENCE_COEFFICIENTS: EnergyCoefficients = EnergyCoefficients::new(0.1, 0.05, 10.0);

/// The four-point reference route.
pub fn reference_waypoints() -> Vec<Waypoint> {
    vec![
        Waypoint::new(0.0, 0.0, 100.0),
        Waypoint::new(100.0, 100.0, 150.0),
        Waypoint::new(200.0, 50.0, 120.0),
        Waypoint::new(300.0, 200.0, 150.0),
    ]
}

pub fn reference() -> MissionConfig {
    MissionConfig {
        name: REFERENCE_NAME.to_string(),
        waypoints: reference_waypoints(),
        coefficients: REFERENCE_COEFFICIENTS,
    }
}

/// Optional replacements for parts of the reference scenario.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// YAML/TOML scenario replacing the whole reference run.
    pub scenario: Option<PathBuf>,
    /// CSV waypoint table replacing the route.
    pub waypoints: Option<PathBuf>,
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub c: Option<f64>,
}

/// Build the mission to run: reference, then scenario file, then CSV route, then single coefficients.
pub fn resolve(overrides: &Overrides) -> Result<MissionConfig, ConfigError> {
    let mut mission = match &overrides.scenario {
        Some(path) => from_config(&load_scenario(path)?),
        None => reference(),
    };

    if let Some(path) = &overrides.waypoints {
        mission.waypoints = load_waypoints_csv(path)?
            .iter()
            .map(waypoint_from_config)
            .collect();
    }

    let coefficients = &mut mission.coefficients;
    if let Some(a) = overrides.a {
        coefficients.a = a;
    }
    if let Some(b) = overrides.b {
        coefficients.b = b;
    }
    if let Some(c) = overrides.c {
        coefficients.c = c;
    }

    Ok(mission)
}
