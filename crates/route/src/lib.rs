//! Waypoint distance helpers (Euclidean legs and total path length).
use drone_core::Waypoint;
use drone_core::vector;
use tracing::debug;

/// One consecutive waypoint pair along a route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub index: usize,
    pub from: Waypoint,
    pub to: Waypoint,
    pub distance_m: f64,
}

/// Straight-line distance between two waypoints.
///
/// Non-finite coordinates are not trapped; they propagate into the result.
pub fn distance(p: &Waypoint, q: &Waypoint) -> f64 {
    vector::norm(&vector::sub(&q.position(), &p.position()))
}

/// Sum of the distances between consecutive waypoints. Zero for fewer than two points.
pub fn path_length(waypoints: &[Waypoint]) -> f64 {
    let total: f64 = waypoints
        .windows(2)
        .map(|pair| distance(&pair[0], &pair[1]))
        .sum();
    debug!(waypoints = waypoints.len(), total_m = total, "path length");
    total
}

/// Per-leg breakdown of a route, in travel order.
pub fn legs(waypoints: &[Waypoint]) -> Vec<Leg> {
    waypoints
        .windows(2)
        .enumerate()
        .map(|(index, pair)| Leg {
            index,
            from: pair[0],
            to: pair[1],
            distance_m: distance(&pair[0], &pair[1]),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> Vec<Waypoint> {
        vec![
            Waypoint::new(0.0, 0.0, 100.0),
            Waypoint::new(100.0, 100.0, 150.0),
            Waypoint::new(200.0, 50.0, 120.0),
            Waypoint::new(300.0, 200.0, 150.0),
        ]
    }

    #[test]
    fn distance_is_symmetric() {
        let p = Waypoint::new(1.5, -7.0, 42.0);
        let q = Waypoint::new(-3.0, 8.25, 0.5);
        assert_eq!(distance(&p, &q), distance(&q, &p));
    }

    #[test]
    fn distance_to_self_is_zero() {
        for p in reference() {
            assert_eq!(distance(&p, &p), 0.0);
        }
    }

    #[test]
    fn distance_is_positive_for_distinct_points() {
        let p = Waypoint::new(0.0, 0.0, 0.0);
        let q = Waypoint::new(0.0, 0.0, 1.0e-3);
        assert!(distance(&p, &q) > 0.0);
    }

    #[test]
    fn triangle_inequality_holds() {
        let pts = reference();
        for p in &pts {
            for q in &pts {
                for r in &pts {
                    let direct = distance(p, r);
                    let via = distance(p, q) + distance(q, r);
                    assert!(direct <= via + 1e-9, "{direct} > {via}");
                }
            }
        }
    }

    #[test]
    fn first_reference_leg_is_exact() {
        let pts = reference();
        // sqrt(100^2 + 100^2 + 50^2)
        assert_eq!(distance(&pts[0], &pts[1]), 150.0);
    }

    #[test]
    fn short_paths_have_zero_length() {
        assert_eq!(path_length(&[]), 0.0);
        assert_eq!(path_length(&[Waypoint::new(5.0, 5.0, 5.0)]), 0.0);
        assert!(legs(&[]).is_empty());
        assert!(legs(&[Waypoint::new(5.0, 5.0, 5.0)]).is_empty());
    }

    #[test]
    fn legs_sum_to_path_length() {
        let pts = reference();
        let legs = legs(&pts);
        assert_eq!(legs.len(), 3);
        assert_eq!(legs[2].index, 2);
        assert_eq!(legs[2].to, pts[3]);
        let summed: f64 = legs.iter().map(|leg| leg.distance_m).sum();
        assert!((summed - path_length(&pts)).abs() < 1e-12);
    }
}
