//! Energy model and analytic speed optimizer.
//!
//! Energy per unit distance is modelled as `a * v^2 + b * h + c`. The optimizer
//! solves `2 * a * v = b` for `v`, equating the slope of the velocity term with
//! the altitude coefficient. That is not a joint minimization of the model (which
//! has no velocity/altitude cross term); the formula is kept as-is so results
//! stay comparable with earlier runs of the model.

use drone_core::constants::DEFAULT_OPERATING_ALTITUDE_M;
use thiserror::Error;
use tracing::{debug, warn};

/// Free parameters of the energy model. No sign or range constraint is enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyCoefficients {
    /// Scales the square of velocity.
    pub a: f64,
    /// Scales altitude.
    pub b: f64,
    /// Baseline cost independent of motion.
    pub c: f64,
}

impl EnergyCoefficients {
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Energy per unit distance at the given operating point.
    pub fn evaluate(&self, point: &OperatingPoint) -> f64 {
        energy_per_unit_distance(point.velocity_m_s, point.altitude_m, self)
    }
}

/// Velocity/altitude pair chosen by the optimizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    pub velocity_m_s: f64,
    pub altitude_m: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum EnergyError {
    #[error("invalid model parameters: b / (2a) is negative or undefined (a = {a}, b = {b})")]
    InvalidModelParameters { a: f64, b: f64 },
}

/// Energy expended per unit distance: `a * v^2 + b * h + c`.
///
/// Negative velocity or altitude is accepted and goes through the same formula.
#[inline]
pub fn energy_per_unit_distance(
    velocity_m_s: f64,
    altitude_m: f64,
    coefficients: &EnergyCoefficients,
) -> f64 {
    coefficients.a * velocity_m_s * velocity_m_s + coefficients.b * altitude_m + coefficients.c
}

/// Velocity satisfying `2 * a * v = b` at the fixed operating altitude.
///
/// `a == 0` yields a velocity of zero rather than dividing. A negative (or NaN)
/// `b / (2a)` has no real square root and is reported as
/// [`EnergyError::InvalidModelParameters`].
pub fn optimal_operating_point(a: f64, b: f64) -> Result<OperatingPoint, EnergyError> {
    let altitude_m = DEFAULT_OPERATING_ALTITUDE_M;
    if a == 0.0 {
        warn!(b, "velocity coefficient is zero; optimal velocity falls back to 0");
        return Ok(OperatingPoint {
            velocity_m_s: 0.0,
            altitude_m,
        });
    }

    let ratio = b / (2.0 * a);
    if ratio.is_nan() || ratio < 0.0 {
        return Err(EnergyError::InvalidModelParameters { a, b });
    }

    // b == 0 with a < 0 gives -0.0
    let velocity_m_s = ratio.sqrt().abs();
    debug!(a, b, velocity_m_s, altitude_m, "optimal operating point");
    Ok(OperatingPoint {
        velocity_m_s,
        altitude_m,
    })
}
