//! Two-body time propagation of an oriented orbit.

use maneuvering_core::constants::TWO_PI;

use crate::anomaly::{self, MAX_NEWTON_ITERATIONS};
use crate::elements::{Anomaly, OrientedOrbit};

/// Newton tolerance used when mapping a propagated mean anomaly back to true anomaly.
const PROPAGATION_TOLERANCE: f64 = 20.0 * f64::EPSILON;

/// Mean motion `n = √(μ/a³)` [rad/s].
pub fn mean_motion(a: f64, mu: f64) -> f64 {
    (mu / a).sqrt() / a
}

/// Orbital period `2π/n` [s].
pub fn period(a: f64, mu: f64) -> f64 {
    TWO_PI / mean_motion(a, mu)
}

/// `M + n·dt`, not wrapped.
pub fn propagate_mean_anomaly(m: f64, a: f64, dt: f64, mu: f64) -> f64 {
    m + mean_motion(a, mu) * dt
}

/// Propagate a true anomaly by `dt` seconds, keeping whole revolutions of both
/// the starting angle and the elapsed motion.
pub fn propagate_true_anomaly(nu: f64, a: f64, e: f64, dt: f64, mu: f64) -> f64 {
    let whole_nu = TWO_PI * (nu / TWO_PI).floor();
    let m = anomaly::mean_from_true(nu - whole_nu, e);

    let new_m = propagate_mean_anomaly(m, a, dt, mu);
    let whole_m = TWO_PI * (new_m / TWO_PI).floor();
    let new_nu = anomaly::true_from_mean_with(
        new_m - whole_m,
        e,
        MAX_NEWTON_ITERATIONS,
        PROPAGATION_TOLERANCE,
    );
    new_nu + whole_m + whole_nu
}

/// Propagate an oriented orbit by `dt` seconds; the anomaly variant is preserved.
pub fn propagate(state: &OrientedOrbit, dt: f64, mu: f64) -> OrientedOrbit {
    let orbit = state.orbit;
    let anomaly = match state.anomaly {
        Anomaly::True(nu) => Anomaly::True(propagate_true_anomaly(nu, orbit.a, orbit.e, dt, mu)),
        Anomaly::Mean(m) => Anomaly::Mean(propagate_mean_anomaly(m, orbit.a, dt, mu)),
        Anomaly::Eccentric(ecc) => {
            let m = anomaly::mean_from_eccentric(ecc, orbit.e);
            let new_m = propagate_mean_anomaly(m, orbit.a, dt, mu);
            Anomaly::Eccentric(anomaly::eccentric_from_mean(new_m, orbit.e))
        }
    };
    OrientedOrbit::new(orbit, anomaly)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::Orbit;
    use maneuvering_core::angle::separation;
    use maneuvering_core::constants::{MU_EARTH, TOLERANCE};

    #[test]
    fn mean_anomaly_is_linear_in_time() {
        let a = 7.0e6;
        let n = mean_motion(a, MU_EARTH);
        for dt in [0.0, 1.0, 10.0, 1234.5, -200.0] {
            assert_eq!(propagate_mean_anomaly(0.123, a, dt, MU_EARTH), 0.123 + n * dt);
        }
    }

    #[test]
    fn one_period_adds_a_full_turn() {
        let a = 7.2e6;
        let m1 = propagate_mean_anomaly(2.2, a, period(a, MU_EARTH), MU_EARTH);
        assert!((m1 - 2.2 - TWO_PI).abs() < TOLERANCE);
    }

    #[test]
    fn half_period_matches_mean_plus_pi() {
        let (a, e) = (6.7e6, 0.1);
        let half = period(a, MU_EARTH) / 2.0;
        for k in 0..9 {
            let nu0 = k as f64 * TWO_PI / 9.0;
            let nu = propagate_true_anomaly(nu0, a, e, half, MU_EARTH);
            let reference =
                anomaly::true_from_mean(anomaly::mean_from_true(nu0, e) + std::f64::consts::PI, e);
            assert!(separation(nu, reference) < 1e-12, "nu0 = {nu0}");
        }
    }

    #[test]
    fn true_variant_keeps_revolutions() {
        let orbit = Orbit::new(7.0e6, 0.05, 0.0, 0.0, 0.0).unwrap();
        let state = OrientedOrbit::from_true(orbit, 0.5);
        let later = propagate(&state, 2.0 * period(orbit.a, MU_EARTH), MU_EARTH);
        match later.anomaly {
            Anomaly::True(nu) => assert!((nu - (0.5 + 2.0 * TWO_PI)).abs() < 1e-9),
            other => panic!("unexpected variant {other:?}"),
        }
    }

    #[test]
    fn mean_variant_only_changes_anomaly() {
        let orbit = Orbit::new(6.8e6, 0.01, 0.3, 0.2, 1.1).unwrap();
        let state = OrientedOrbit::from_mean(orbit, 0.9);
        let later = propagate(&state, 100.0, MU_EARTH);
        assert_eq!(later.orbit, orbit);
        assert!(matches!(later.anomaly, Anomaly::Mean(m) if m != 0.9));
    }
}
