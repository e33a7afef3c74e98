//! Scenario models and loaders for the Drone Energy Calculator.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// A waypoint as written in scenario manifests and CSV tables (metres).
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct WaypointConfig {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Energy model coefficients as written in scenario manifests.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct CoefficientsConfig {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// A named route plus the coefficients to evaluate it with.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default = "default_scenario_name")]
    pub name: String,
    pub coefficients: CoefficientsConfig,
    #[serde(default)]
    pub waypoints: Vec<WaypointConfig>,
}

fn default_scenario_name() -> String {
    "custom".to_string()
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to parse waypoint CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Load a scenario from a YAML or TOML file (chosen by extension).
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<ScenarioConfig, ConfigError> {
    let path = path.as_ref();
    let scenario: ScenarioConfig = if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)?
    } else {
        let reader = File::open(path)?;
        serde_yaml::from_reader(reader)?
    };
    debug!(
        path = %path.display(),
        name = %scenario.name,
        waypoints = scenario.waypoints.len(),
        "loaded scenario"
    );
    Ok(scenario)
}

/// Load an ordered waypoint table from a CSV file with an `x,y,z` header.
pub fn load_waypoints_csv<P: AsRef<Path>>(path: P) -> Result<Vec<WaypointConfig>, ConfigError> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;
    let waypoints = reader
        .deserialize()
        .collect::<Result<Vec<WaypointConfig>, csv::Error>>()?;
    debug!(path = %path.display(), waypoints = waypoints.len(), "loaded waypoint table");
    Ok(waypoints)
}
