//! Mission planning orchestrator: path length, operating point, then total energy.

use drone_core::Waypoint;
use drone_energy::{EnergyCoefficients, EnergyError, OperatingPoint, optimal_operating_point};
use drone_export::{LegRecord, Summary};
use drone_route::Leg;
use tracing::{debug, info, warn};

/// Aggregated result of one planning run.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionProfile {
    pub total_distance_m: f64,
    pub operating_point: OperatingPoint,
    pub energy_per_unit_distance: f64,
    pub total_energy: f64,
    pub legs: Vec<Leg>,
}

/// Top-level mission planning error.
#[derive(Debug, thiserror::Error)]
pub enum MissionError {
    #[error("speed optimization failed: {0}")]
    Energy(#[from] EnergyError),
}

/// Inputs for a planning run. The waypoint order is the travel order.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionConfig {
    pub name: String,
    pub waypoints: Vec<Waypoint>,
    pub coefficients: EnergyCoefficients,
}

/// Sum the route, pick the operating point, and scale energy per unit distance by the path length.
///
/// Fails only when the coefficients have no real optimal velocity; nothing is
/// reported in that case.
pub fn plan_mission(config: &MissionConfig) -> Result<MissionProfile, MissionError> {
    if config.waypoints.len() < 2 {
        warn!(
            scenario = %config.name,
            waypoints = config.waypoints.len(),
            "route has no legs; distance and energy are zero"
        );
    }

    if let Some(index) = config.waypoints.iter().position(|wp| !wp.is_finite()) {
        warn!(
            scenario = %config.name,
            index,
            "waypoint has non-finite coordinates; results will not be finite"
        );
    }

    let legs = drone_route::legs(&config.waypoints);
    let total_distance_m = drone_route::path_length(&config.waypoints);

    let coefficients = &config.coefficients;
    let operating_point = optimal_operating_point(coefficients.a, coefficients.b)?;
    let energy_per_unit_distance = coefficients.evaluate(&operating_point);
    let total_energy = energy_per_unit_distance * total_distance_m;

    debug!(
        scenario = %config.name,
        legs = legs.len(),
        energy_per_unit_distance,
        "evaluated energy model"
    );
    info!(
        scenario = %config.name,
        total_distance_m,
        total_energy,
        "mission planned"
    );

    Ok(MissionProfile {
        total_distance_m,
        operating_point,
        energy_per_unit_distance,
        total_energy,
        legs,
    })
}

impl MissionProfile {
    /// Flatten the profile into the record consumed by report writers.
    pub fn summary<'a>(&self, scenario: &'a str) -> Summary<'a> {
        Summary {
            scenario,
            total_distance_m: self.total_distance_m,
            optimal_velocity_m_s: self.operating_point.velocity_m_s,
            optimal_altitude_m: self.operating_point.altitude_m,
            energy_per_unit_distance: self.energy_per_unit_distance,
            total_energy: self.total_energy,
            legs: self
                .legs
                .iter()
                .map(|leg| LegRecord {
                    index: leg.index,
                    distance_m: leg.distance_m,
                })
                .collect(),
        }
    }
}
