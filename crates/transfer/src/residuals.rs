//! Left-hand side of the linearised quasi-circular transfer equations.
//!
//! For a dimensionless impulse list the five sums reproduce
//! `(ex, ey, a, 0, i)` when the list solves the transfer. Useful for checking
//! a plan independently of the solver branch that produced it.

use maneuvering_impulsive::Maneuver;

use crate::deviations::Deviations;

pub fn residuals(maneuvers: &[Maneuver]) -> [f64; 5] {
    maneuvers.iter().fold([0.0; 5], |mut acc, m| {
        let (s, c) = m.angle.sin_cos();
        let [dvx, dvy, dvz] = m.dv;
        acc[0] += dvx * s + 2.0 * dvy * c;
        acc[1] += -dvx * c + 2.0 * dvy * s;
        acc[2] += 2.0 * dvy;
        acc[3] += -dvz * s;
        acc[4] += dvz * c;
        acc
    })
}

/// Largest absolute mismatch between the impulse sums and the deviations.
///
/// With `coplanar` set, the two out-of-plane rows are ignored. A non-finite
/// impulse yields NaN.
pub fn max_residual(devs: &Deviations, maneuvers: &[Maneuver], coplanar: bool) -> f64 {
    let lhs = residuals(maneuvers);
    let rhs = [devs.ex, devs.ey, devs.a, 0.0, devs.i];
    let rows = if coplanar { 3 } else { 5 };
    lhs.iter()
        .zip(rhs.iter())
        .take(rows)
        .map(|(l, r)| (l - r).abs())
        .fold(0.0, |worst, d| if d.is_nan() || d > worst { d } else { worst })
}
