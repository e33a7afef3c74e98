//! Core units, constants, and shared primitives for the Drone Energy Calculator workspace.

/// Model constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Representative operating altitude used by the speed optimizer (m).
    ///
    /// The energy model does not optimize altitude; every run is evaluated here.
    pub const DEFAULT_OPERATING_ALTITUDE_M: f64 = 100.0;
}

/// Minimal vector helpers to avoid ad-hoc `[f64; 3]` math everywhere.
pub mod vector {
    /// Alias for a 3D vector in metres.
    pub type Vector3 = [f64; 3];

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector3) -> f64 {
        dot(v, v).sqrt()
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }
}

/// Waypoints the drone passes through, in order.
pub mod waypoint {
    use super::vector::Vector3;

    /// A fixed point in Cartesian space (metres). Equality is structural.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Waypoint {
        pub x: f64,
        pub y: f64,
        pub z: f64,
    }

    impl Waypoint {
        pub const fn new(x: f64, y: f64, z: f64) -> Self {
            Self { x, y, z }
        }

        /// Position as a plain vector for the helpers in [`crate::vector`].
        #[inline]
        pub fn position(&self) -> Vector3 {
            [self.x, self.y, self.z]
        }

        pub fn is_finite(&self) -> bool {
            self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
        }
    }

    impl From<Vector3> for Waypoint {
        fn from(v: Vector3) -> Self {
            Self::new(v[0], v[1], v[2])
        }
    }
}

pub use waypoint::Waypoint;
