//! Mission façade crate consolidating route energy planning and exposing supporting crates.

pub mod mission;

pub use drone_energy as energy;
pub use drone_route as route;
pub use facade::*;

mod facade;
