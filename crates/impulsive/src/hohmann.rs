//! Hohmann transfer between circular coplanar orbits, used as a reference cost
//! for the quasi-circular planner.

use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HohmannTransfer {
    /// Signed first burn [m/s]; negative when lowering the orbit.
    pub dv1: f64,
    /// Signed second burn [m/s].
    pub dv2: f64,
    pub total: f64,
    pub time_of_flight: f64,
}

/// Classical Hohmann transfer between circular radii `r1` and `r2` [m].
pub fn hohmann(r1: f64, r2: f64, mu: f64) -> HohmannTransfer {
    let v1 = (mu / r1).sqrt();
    let v2 = (mu / r2).sqrt();
    let a_t = 0.5 * (r1 + r2);
    let time_of_flight = PI * (a_t.powi(3) / mu).sqrt();

    let v_peri = (mu * (2.0 / r1 - 1.0 / a_t)).sqrt();
    let v_apo = (mu * (2.0 / r2 - 1.0 / a_t)).sqrt();

    let dv1 = v_peri - v1;
    let dv2 = v2 - v_apo;
    HohmannTransfer {
        dv1,
        dv2,
        total: dv1.abs() + dv2.abs(),
        time_of_flight,
    }
}
