//! Reduction of an orbit pair to dimensionless deviations from a shared
//! reference circular orbit.

use maneuvering_core::vector::{cross, dot, norm};
use maneuvering_orbits::Orbit;
use serde::Serialize;

/// Differences between two near-circular orbits, scaled by the reference radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Deviations {
    /// `e₂·cos w₂ − e₁·cos w₁`.
    pub ex: f64,
    /// `e₂·sin w₂ − e₁·sin w₁`.
    pub ey: f64,
    /// `hypot(ex, ey)`.
    pub e: f64,
    /// `(a₂ − a₁) / a_ref`.
    pub a: f64,
    /// Signed angle between the orbital planes in the `2·sin(Φ/2)` form.
    pub i: f64,
}

impl Deviations {
    pub fn new(ex: f64, ey: f64, a: f64, i: f64) -> Self {
        Self {
            ex,
            ey,
            e: ex.hypot(ey),
            a,
            i,
        }
    }
}

/// Circular orbit midway between the two semi-major axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceOrbit {
    /// Radius [m].
    pub r: f64,
    /// Circular speed `√(μ/r)` [m/s].
    pub v: f64,
}

pub fn reference_orbit(initial: &Orbit, target: &Orbit, mu: f64) -> ReferenceOrbit {
    let r = 0.5 * (initial.a + target.a);
    ReferenceOrbit {
        r,
        v: (mu / r).sqrt(),
    }
}

pub fn deviations(initial: &Orbit, target: &Orbit) -> Deviations {
    let [ex_i, ey_i] = initial.eccentricity_vector();
    let [ex_t, ey_t] = target.eccentricity_vector();
    let a_ref = 0.5 * (initial.a + target.a);

    // atan2 keeps identical planes at exactly zero where acos(≈1) would not
    let n1 = initial.plane_normal();
    let n2 = target.plane_normal();
    let cos_phi = dot(&n1, &n2).clamp(-1.0, 1.0);
    let phi = norm(&cross(&n1, &n2)).atan2(cos_phi);
    let sign = if target.i > initial.i { 1.0 } else { -1.0 };
    let plane = sign * 2.0 * (0.5 * phi).sin();

    Deviations::new(
        ex_t - ex_i,
        ey_t - ey_i,
        (target.a - initial.a) / a_ref,
        plane,
    )
}

/// Deviation record and reference orbit in one pass.
pub fn reduce(initial: &Orbit, target: &Orbit, mu: f64) -> (Deviations, ReferenceOrbit) {
    (
        deviations(initial, target),
        reference_orbit(initial, target, mu),
    )
}
