//! Re-exported APIs for consumers of the mission crate.

pub use crate::mission::{MissionConfig, MissionError, MissionProfile, plan_mission};
pub use drone_core::Waypoint;
pub use drone_energy::{EnergyCoefficients, EnergyError, OperatingPoint};

pub mod scenario {
    use drone_config::{CoefficientsConfig, ScenarioConfig, WaypointConfig};
    use drone_core::Waypoint;
    use drone_energy::EnergyCoefficients;

    use crate::mission::MissionConfig;

    /// Convert a waypoint record into its runtime representation.
    pub fn waypoint_from_config(config: &WaypointConfig) -> Waypoint {
        Waypoint::new(config.x, config.y, config.z)
    }

    pub fn coefficients_from_config(config: &CoefficientsConfig) -> EnergyCoefficients {
        EnergyCoefficients::new(config.a, config.b, config.c)
    }

    /// Convert a `ScenarioConfig` into a runnable `MissionConfig`.
    pub fn from_config(config: &ScenarioConfig) -> MissionConfig {
        MissionConfig {
            name: config.name.clone(),
            waypoints: config.waypoints.iter().map(waypoint_from_config).collect(),
            coefficients: coefficients_from_config(&config.coefficients),
        }
    }

}
