//! Keplerian ↔ Cartesian (inertial position/velocity) conversion.

use maneuvering_core::angle::normalize;
use maneuvering_core::vector::{Vector3, cross, dot, norm, scale, sub, unit};
use serde::{Deserialize, Serialize};

use crate::elements::{ElementsError, Orbit, OrientedOrbit, validate_mu};

/// Inertial position [m] and velocity [m/s].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartesianState {
    pub r: Vector3,
    pub v: Vector3,
}

impl CartesianState {
    pub fn new(r: Vector3, v: Vector3) -> Self {
        Self { r, v }
    }

    /// Specific orbital energy `v²/2 − μ/r`.
    pub fn specific_energy(&self, mu: f64) -> f64 {
        0.5 * dot(&self.v, &self.v) - mu / norm(&self.r)
    }

    /// Specific angular momentum `r × v`.
    pub fn angular_momentum(&self) -> Vector3 {
        cross(&self.r, &self.v)
    }
}

/// Position and velocity of an oriented orbit in the inertial frame.
pub fn to_cartesian(state: &OrientedOrbit, mu: f64) -> CartesianState {
    let orbit = &state.orbit;
    let nu = state.true_anomaly();
    let e = orbit.e;

    let p = orbit.semi_latus_rectum();
    let (sin_nu, cos_nu) = nu.sin_cos();
    let r_mag = p / (1.0 + e * cos_nu);

    let (p_hat, q_hat) = orbit.perifocal_basis();
    let r = [
        (p_hat[0] * cos_nu + q_hat[0] * sin_nu) * r_mag,
        (p_hat[1] * cos_nu + q_hat[1] * sin_nu) * r_mag,
        (p_hat[2] * cos_nu + q_hat[2] * sin_nu) * r_mag,
    ];

    let sqrt_mu_p = (mu / p).sqrt();
    let along_q = sqrt_mu_p * (cos_nu + e);
    let along_p = -sqrt_mu_p * sin_nu;
    let v = [
        along_q * q_hat[0] + along_p * p_hat[0],
        along_q * q_hat[1] + along_p * p_hat[1],
        along_q * q_hat[2] + along_p * p_hat[2],
    ];

    CartesianState { r, v }
}

/// Recover true-anomaly Keplerian elements from an inertial state.
///
/// Equatorial orbits take the x-axis as the node line and circular orbits take
/// the node as the periapsis direction.
pub fn from_cartesian(cart: &CartesianState, mu: f64) -> Result<OrientedOrbit, ElementsError> {
    validate_mu(mu)?;
    let r = cart.r;
    let v = cart.v;
    for (name, value) in [("r", r), ("v", v)] {
        if value.iter().any(|c| !c.is_finite()) {
            return Err(ElementsError::NonFinite(name));
        }
    }

    let r_norm = norm(&r);
    if r_norm == 0.0 {
        return Err(ElementsError::ZeroPosition);
    }
    let v2 = dot(&v, &v);
    let energy = 0.5 * v2 - mu / r_norm;
    if energy >= 0.0 {
        return Err(ElementsError::NotElliptic { energy });
    }

    const K: Vector3 = [0.0, 0.0, 1.0];
    let h = cross(&r, &v);
    let h_hat = unit(&h).unwrap_or(h);
    let node = cross(&K, &h);
    let e1 = unit(&node).unwrap_or([1.0, 0.0, 0.0]);
    let e2 = cross(&h_hat, &e1);

    let ecc_vec = scale(
        &sub(&scale(&r, v2 - mu / r_norm), &scale(&v, dot(&r, &v))),
        1.0 / mu,
    );
    let e = norm(&ecc_vec);
    let g1 = if e > 0.0 { scale(&ecc_vec, 1.0 / e) } else { e1 };
    let g2 = cross(&h_hat, &g1);

    let a = -mu / (2.0 * energy);
    let i = dot(&h, &cross(&e1, &K)).atan2(h[2]);
    let raan = e1[1].atan2(e1[0]);
    let w = dot(&g1, &e2).atan2(dot(&g1, &e1));
    let nu = dot(&r, &g2).atan2(dot(&r, &g1));

    let orbit = Orbit::new(a, e, normalize(w), i, normalize(raan))?;
    Ok(OrientedOrbit::from_true(orbit, normalize(nu)))
}
