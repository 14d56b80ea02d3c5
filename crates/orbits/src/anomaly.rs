//! Conversions between true, mean, and eccentric anomaly on elliptic orbits (0 ≤ e < 1).
//!
//! Every conversion returns an angle wrapped into `[0, 2π)` unless its name says otherwise.

use log::warn;
use maneuvering_core::angle::normalize;
use maneuvering_core::constants::{TOLERANCE, TWO_PI};

/// Newton iteration cap for Kepler's equation.
pub const MAX_NEWTON_ITERATIONS: usize = 150;

/// Kepler's equation `M = E − e·sin E`.
pub fn mean_from_eccentric(ecc_anomaly: f64, e: f64) -> f64 {
    let ecc_anomaly = normalize(ecc_anomaly);
    normalize(ecc_anomaly - e * ecc_anomaly.sin())
}

pub fn eccentric_from_true(nu: f64, e: f64) -> f64 {
    let s = nu.sin() * (1.0 - e * e).sqrt();
    let c = e + nu.cos();
    normalize(s.atan2(c))
}

pub fn true_from_eccentric(ecc_anomaly: f64, e: f64) -> f64 {
    let s = ecc_anomaly.sin() * (1.0 - e * e).sqrt();
    let c = ecc_anomaly.cos() - e;
    normalize(s.atan2(c))
}

/// Solve Kepler's equation for E with the default cap and tolerance.
pub fn eccentric_from_mean(m: f64, e: f64) -> f64 {
    eccentric_from_mean_with(m, e, MAX_NEWTON_ITERATIONS, TOLERANCE)
}

/// Solve Kepler's equation for E by Newton-Raphson.
///
/// When the iteration cap is hit the last iterate is returned.
pub fn eccentric_from_mean_with(m: f64, e: f64, max_iterations: usize, tol: f64) -> f64 {
    let m = normalize(m);
    let mut ecc_anomaly = if m > std::f64::consts::PI { m - e } else { m + e };
    for _ in 0..max_iterations {
        let (sin_e, cos_e) = ecc_anomaly.sin_cos();
        let delta = (m + e * sin_e - ecc_anomaly) / (1.0 - e * cos_e);
        ecc_anomaly += delta;
        if delta.abs() < tol {
            return normalize(ecc_anomaly);
        }
    }
    warn!("Kepler iteration hit the cap of {max_iterations} steps (M = {m}, e = {e})");
    normalize(ecc_anomaly)
}

pub fn true_from_mean(m: f64, e: f64) -> f64 {
    true_from_eccentric(eccentric_from_mean(m, e), e)
}

pub fn true_from_mean_with(m: f64, e: f64, max_iterations: usize, tol: f64) -> f64 {
    true_from_eccentric(eccentric_from_mean_with(m, e, max_iterations, tol), e)
}

pub fn mean_from_true(nu: f64, e: f64) -> f64 {
    mean_from_eccentric(eccentric_from_true(nu, e), e)
}

/// Like [`true_from_mean`] but keeps the whole revolutions carried by `m`.
pub fn true_from_mean_unwrapped(m: f64, e: f64) -> f64 {
    let whole = TWO_PI * (m / TWO_PI).floor();
    whole + true_from_mean(m - whole, e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use maneuvering_core::angle::separation;
    use rstest::rstest;

    #[rstest]
    #[case(0.0)]
    #[case(0.5)]
    #[case(2.0)]
    #[case(4.0)]
    #[case(6.0)]
    fn circular_orbit_anomalies_coincide(#[case] x: f64) {
        assert!(separation(true_from_mean(x, 0.0), x) < 1e-13);
        assert!(separation(mean_from_true(x, 0.0), x) < 1e-13);
        assert!(separation(eccentric_from_true(x, 0.0), x) < 1e-13);
    }

    #[rstest]
    #[case(0.01)]
    #[case(0.3)]
    #[case(0.7)]
    #[case(0.95)]
    fn mean_true_round_trip(#[case] e: f64) {
        for k in 0..36 {
            let m = k as f64 * 10.0_f64.to_radians();
            let back = mean_from_true(true_from_mean(m, e), e);
            assert!(separation(back, m) < 1e-11, "e = {e}, M = {m}, back = {back}");
        }
    }

    #[test]
    fn kepler_equation_is_satisfied() {
        let e = 0.6;
        for k in 0..12 {
            let m = 0.1 + k as f64 * 0.5;
            let ecc = eccentric_from_mean(m, e);
            let residual = ecc - e * ecc.sin() - normalize(m);
            assert!(separation(residual, 0.0) < 1e-12);
        }
    }

    #[test]
    fn iteration_cap_returns_last_iterate() {
        let ecc = eccentric_from_mean_with(1.0, 0.5, 1, 0.0);
        assert!(ecc.is_finite());
        assert!((0.0..TWO_PI).contains(&ecc));
    }

    #[test]
    fn unwrapped_keeps_whole_revolutions() {
        let e = 0.2;
        for k in [-2_i32, -1, 0, 1, 3] {
            let m = 0.7 + k as f64 * TWO_PI;
            let nu = true_from_mean_unwrapped(m, e);
            let expected = k as f64 * TWO_PI + true_from_mean(0.7, e);
            assert!((nu - expected).abs() < 1e-9);
        }
    }
}
