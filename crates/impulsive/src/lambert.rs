//! Lambert boundary-value solver and two-impulse rendezvous built on it.

use lambert_bate::get_velocities;
use log::debug;
use maneuvering_core::vector::{Vector3, norm, sub};
use maneuvering_orbits::{OrientedOrbit, to_cartesian};
use thiserror::Error;

const LAMBERT_TOLERANCE: f64 = 1e-8;
const LAMBERT_MAX_ITERATIONS: usize = 500;

#[derive(Debug, Error)]
pub enum LambertSolverError {
    #[error("time of flight must be positive and finite, got {0}")]
    InvalidTimeOfFlight(f64),
    #[error("lambert solver failed: {0}")]
    Failure(String),
}

/// Velocities at both ends of the conic joining `r1` and `r2` in `tof` seconds.
///
/// Positions in metres, `mu` in m³/s². `short` selects the transfer angle below π.
pub fn solve(
    r1: Vector3,
    r2: Vector3,
    tof: f64,
    mu: f64,
    short: bool,
) -> Result<(Vector3, Vector3), LambertSolverError> {
    if !(tof.is_finite() && tof > 0.0) {
        return Err(LambertSolverError::InvalidTimeOfFlight(tof));
    }
    get_velocities(r1, r2, tof, mu, short, LAMBERT_TOLERANCE, LAMBERT_MAX_ITERATIONS)
        .map_err(|e| LambertSolverError::Failure(format!("{e:?}")))
}

/// Inertial impulses of a two-point rendezvous.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rendezvous {
    /// Impulse at the departure point (transfer velocity minus departure velocity).
    pub departure_dv: Vector3,
    /// Impulse at the arrival point (arrival velocity minus transfer velocity).
    pub arrival_dv: Vector3,
}

impl Rendezvous {
    pub fn total_delta_v(&self) -> f64 {
        norm(&self.departure_dv) + norm(&self.arrival_dv)
    }
}

/// Rendezvous from `departure` to the point `arrival` in `tof` seconds, trying
/// both transfer directions and keeping the cheaper one.
pub fn rendezvous(
    departure: &OrientedOrbit,
    arrival: &OrientedOrbit,
    tof: f64,
    mu: f64,
) -> Result<Rendezvous, LambertSolverError> {
    let from = to_cartesian(departure, mu);
    let to = to_cartesian(arrival, mu);

    let mut best: Option<Rendezvous> = None;
    let mut last_error = None;
    for short in [true, false] {
        match solve(from.r, to.r, tof, mu, short) {
            Ok((v1, v2)) => {
                let candidate = Rendezvous {
                    departure_dv: sub(&v1, &from.v),
                    arrival_dv: sub(&to.v, &v2),
                };
                debug!(
                    "lambert branch short={short}: total dv {:.6} m/s",
                    candidate.total_delta_v()
                );
                if best.is_none_or(|b| candidate.total_delta_v() < b.total_delta_v()) {
                    best = Some(candidate);
                }
            }
            Err(e) => last_error = Some(e),
        }
    }
    best.ok_or_else(|| {
        last_error.unwrap_or_else(|| LambertSolverError::Failure("no branch converged".into()))
    })
}
