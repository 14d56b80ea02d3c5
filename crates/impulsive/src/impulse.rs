//! Instantaneous velocity changes applied to a Keplerian state.
//!
//! Position is held fixed; only the velocity changes. The state is converted to
//! Cartesian form, the impulse is added and the elements are recovered.

use maneuvering_core::vector::{Vector3, add};
use maneuvering_orbits::{
    CartesianState, ElementsError, FrameError, OrbitalFrame, OrientedOrbit, from_cartesian,
    to_cartesian,
};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ImpulseError {
    #[error("orbital frame is undefined at this state: {0}")]
    Frame(#[from] FrameError),
    #[error("post-impulse state is invalid: {0}")]
    Elements(#[from] ElementsError),
}

/// Apply an impulse given in inertial axes.
pub fn apply_impulse_inertial(
    state: &OrientedOrbit,
    dv_inertial: &Vector3,
    mu: f64,
) -> Result<OrientedOrbit, ImpulseError> {
    let cart = to_cartesian(state, mu);
    let kicked = CartesianState::new(cart.r, add(&cart.v, dv_inertial));
    Ok(from_cartesian(&kicked, mu)?)
}

/// Apply an impulse given as `(radial, tangential, normal)` components of the
/// local orbital frame at the current point.
pub fn apply_impulse_orbital(
    state: &OrientedOrbit,
    dv_orbital: &Vector3,
    mu: f64,
) -> Result<OrientedOrbit, ImpulseError> {
    let cart = to_cartesian(state, mu);
    let frame = OrbitalFrame::from_state(&cart.r, &cart.v)?;
    let dv_inertial = frame.to_inertial(dv_orbital);
    let kicked = CartesianState::new(cart.r, add(&cart.v, &dv_inertial));
    Ok(from_cartesian(&kicked, mu)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use maneuvering_core::angle::separation;
    use maneuvering_core::constants::{DEG, MU_EARTH};
    use maneuvering_orbits::Orbit;

    fn sample_state() -> OrientedOrbit {
        let orbit = Orbit::new(7.0e6, 0.01, 30.0 * DEG, 51.6 * DEG, 40.0 * DEG).unwrap();
        OrientedOrbit::from_true(orbit, 60.0 * DEG)
    }

    fn assert_same_orbit(a: &OrientedOrbit, b: &OrientedOrbit) {
        assert!((a.orbit.a - b.orbit.a).abs() < 1e-4, "{} vs {}", a.orbit.a, b.orbit.a);
        assert!((a.orbit.e - b.orbit.e).abs() < 1e-11);
        assert!((a.orbit.i - b.orbit.i).abs() < 1e-11);
        assert!(separation(a.orbit.raan, b.orbit.raan) < 1e-11);
        assert!(separation(a.true_latitude(), b.true_latitude()) < 1e-10);
    }

    #[test]
    fn orbital_impulse_matches_rotated_inertial_impulse() {
        let state = sample_state();
        let dv_local = [1.2, -3.4, 0.8];
        let cart = to_cartesian(&state, MU_EARTH);
        let frame = OrbitalFrame::from_state(&cart.r, &cart.v).unwrap();
        let via_orbital = apply_impulse_orbital(&state, &dv_local, MU_EARTH).unwrap();
        let via_inertial =
            apply_impulse_inertial(&state, &frame.to_inertial(&dv_local), MU_EARTH).unwrap();
        assert_same_orbit(&via_orbital, &via_inertial);
    }

    #[test]
    fn opposite_impulses_cancel() {
        let state = sample_state();
        let dv = [0.5, 2.0, -1.0];
        let cart = to_cartesian(&state, MU_EARTH);
        let frame = OrbitalFrame::from_state(&cart.r, &cart.v).unwrap();
        let dv_inertial = frame.to_inertial(&dv);
        let kicked = apply_impulse_inertial(&state, &dv_inertial, MU_EARTH).unwrap();
        let back = apply_impulse_inertial(
            &kicked,
            &[-dv_inertial[0], -dv_inertial[1], -dv_inertial[2]],
            MU_EARTH,
        )
        .unwrap();
        assert_same_orbit(&back, &state);
    }

    #[test]
    fn prograde_kick_raises_circular_orbit() {
        let orbit = Orbit::new(7.0e6, 0.0, 0.0, 0.0, 0.0).unwrap();
        let state = OrientedOrbit::from_true(orbit, 0.0);
        let speed = (MU_EARTH / orbit.a).sqrt();
        let dv = 0.1;
        let after = apply_impulse_orbital(&state, &[0.0, dv, 0.0], MU_EARTH).unwrap();
        let expected_da = 2.0 * orbit.a * dv / speed;
        let expected_de = 2.0 * dv / speed;
        assert!(((after.orbit.a - orbit.a) - expected_da).abs() / expected_da < 1e-4);
        assert!((after.orbit.e - expected_de).abs() / expected_de < 1e-4);
    }

    #[test]
    fn escape_impulse_is_rejected() {
        let state = sample_state();
        let result = apply_impulse_orbital(&state, &[0.0, 5.0e3, 0.0], MU_EARTH);
        assert!(matches!(
            result,
            Err(ImpulseError::Elements(ElementsError::NotElliptic { .. }))
        ));
    }
}
