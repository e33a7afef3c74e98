use drone_energy_calculator::Waypoint;
use drone_energy_calculator::energy::{EnergyError, energy_per_unit_distance, optimal_operating_point};
use drone_energy_calculator::mission::{MissionError, plan_mission};
use drone_energy_calculator::route::{distance, path_length};
use drone_energy_calculator::scenario;

fn relative_error(actual: f64, expected: f64) -> f64 {
    ((actual - expected) / expected).abs()
}

#[test]
fn reference_scenario_end_to_end() {
    let mission = scenario::reference();
    let profile = plan_mission(&mission).expect("reference plans");

    let wps = &mission.waypoints;
    let expected_distance: f64 = (0..wps.len() - 1)
        .map(|i| {
            let (p, q) = (wps[i], wps[i + 1]);
            ((q.x - p.x).powi(2) + (q.y - p.y).powi(2) + (q.z - p.z).powi(2)).sqrt()
        })
        .sum();
    assert!(relative_error(profile.total_distance_m, expected_distance) < 1e-12);
    assert!((profile.total_distance_m - 448.515).abs() < 1e-3);

    assert_eq!(profile.operating_point.velocity_m_s, 0.5);
    assert_eq!(profile.operating_point.altitude_m, 100.0);
    assert!((profile.energy_per_unit_distance - 15.025).abs() < 1e-12);
    assert!(relative_error(profile.total_energy, 15.025 * expected_distance) < 1e-9);
}

#[test]
fn distance_properties_over_reference_route() {
    let wps = scenario::reference_waypoints();
    for p in &wps {
        assert_eq!(distance(p, p), 0.0);
        for q in &wps {
            assert_eq!(distance(p, q), distance(q, p));
            for r in &wps {
                assert!(distance(p, r) <= distance(p, q) + distance(q, r) + 1e-9);
            }
        }
    }
}

#[test]
fn energy_linear_in_altitude() {
    let coeffs = scenario::REFERENCE_COEFFICIENTS;
    let v = 3.7;
    let (h1, h2) = (20.0, 180.0);
    let delta = energy_per_unit_distance(v, h2, &coeffs) - energy_per_unit_distance(v, h1, &coeffs);
    assert!((delta - coeffs.b * (h2 - h1)).abs() < 1e-9);
}

#[test]
fn optimizer_degenerate_and_closed_form() {
    for b in [-2.0, 0.0, 0.05, 9.0] {
        assert_eq!(optimal_operating_point(0.0, b).unwrap().velocity_m_s, 0.0);
    }
    for (a, b) in [(0.1, 0.05), (1.0, 0.0), (0.02, 3.0)] {
        let v = optimal_operating_point(a, b).unwrap().velocity_m_s;
        assert!((v - (b / (2.0 * a)).sqrt()).abs() < 1e-12);
    }
}

#[test]
fn negative_domain_optimizer_fails_before_output() {
    assert_eq!(
        optimal_operating_point(-0.1, 0.05),
        Err(EnergyError::InvalidModelParameters { a: -0.1, b: 0.05 })
    );

    let mut mission = scenario::reference();
    mission.coefficients.a = -0.1;
    assert!(matches!(
        plan_mission(&mission),
        Err(MissionError::Energy(EnergyError::InvalidModelParameters { .. }))
    ));
}

#[test]
fn empty_and_singleton_paths() {
    assert_eq!(path_length(&[]), 0.0);

    let mut mission = scenario::reference();
    mission.waypoints = vec![Waypoint::new(0.0, 0.0, 100.0)];
    let profile = plan_mission(&mission).unwrap();
    assert_eq!(profile.total_distance_m, 0.0);
    assert_eq!(profile.total_energy, 0.0);

    mission.waypoints.clear();
    let profile = plan_mission(&mission).unwrap();
    assert_eq!(profile.total_distance_m, 0.0);
    assert_eq!(profile.total_energy, 0.0);
}
