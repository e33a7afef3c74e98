//! Energy estimates for a drone flying an ordered list of waypoints.
//!
//! The numerical model lives in the member crates; this crate wires them to the
//! reference scenario and to the `drone_energy` command-line front-end.

pub mod scenario;

pub use drone_config as config;
pub use drone_core::{Waypoint, constants};
pub use drone_energy as energy;
pub use drone_export as export;
pub use drone_mission as mission;
pub use drone_route as route;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
