//! Keplerian element sets: plain orbits and orbits oriented by one anomaly.

use maneuvering_core::angle::normalize;
use maneuvering_core::vector::Vector3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::anomaly;

/// Errors raised when element sets or gravitational parameters are invalid.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ElementsError {
    #[error("semi-major axis must be positive, got {0}")]
    NonPositiveSemiMajorAxis(f64),
    #[error("eccentricity must lie in [0, 1), got {0}")]
    EccentricityOutOfRange(f64),
    #[error("element `{0}` is not finite")]
    NonFinite(&'static str),
    #[error("gravitational parameter must be positive, got {0}")]
    NonPositiveMu(f64),
    #[error("state is not on an elliptic orbit (specific energy {energy} m²/s²)")]
    NotElliptic { energy: f64 },
    #[error("position vector is zero")]
    ZeroPosition,
}

/// Unoriented Keplerian orbit `{a, e, w, i, raan}`.
///
/// `a` is in metres, all angles are radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orbit {
    pub a: f64,
    pub e: f64,
    pub w: f64,
    pub i: f64,
    pub raan: f64,
}

impl Orbit {
    /// Build a validated orbit.
    pub fn new(a: f64, e: f64, w: f64, i: f64, raan: f64) -> Result<Self, ElementsError> {
        let orbit = Self { a, e, w, i, raan };
        orbit.validate()?;
        Ok(orbit)
    }

    /// Check that the elements describe a closed orbit.
    pub fn validate(&self) -> Result<(), ElementsError> {
        for (name, value) in [
            ("a", self.a),
            ("e", self.e),
            ("w", self.w),
            ("i", self.i),
            ("raan", self.raan),
        ] {
            if !value.is_finite() {
                return Err(ElementsError::NonFinite(name));
            }
        }
        if self.a <= 0.0 {
            return Err(ElementsError::NonPositiveSemiMajorAxis(self.a));
        }
        if !(0.0..1.0).contains(&self.e) {
            return Err(ElementsError::EccentricityOutOfRange(self.e));
        }
        Ok(())
    }

    /// In-plane eccentricity vector `(e·cos w, e·sin w)` measured from the ascending node.
    pub fn eccentricity_vector(&self) -> [f64; 2] {
        [self.e * self.w.cos(), self.e * self.w.sin()]
    }

    /// Unit normal of the orbital plane: `(sin i sin Ω, −sin i cos Ω, cos i)`.
    pub fn plane_normal(&self) -> Vector3 {
        let (sin_i, cos_i) = self.i.sin_cos();
        let (sin_raan, cos_raan) = self.raan.sin_cos();
        [sin_i * sin_raan, -sin_i * cos_raan, cos_i]
    }

    /// Perifocal unit vectors `(P, Q)`: towards periapsis and 90° ahead of it.
    pub fn perifocal_basis(&self) -> (Vector3, Vector3) {
        let (sin_w, cos_w) = self.w.sin_cos();
        let (sin_i, cos_i) = self.i.sin_cos();
        let (sin_raan, cos_raan) = self.raan.sin_cos();
        let p = [
            cos_w * cos_raan - cos_i * sin_w * sin_raan,
            cos_w * sin_raan + cos_i * sin_w * cos_raan,
            sin_i * sin_w,
        ];
        let q = [
            -sin_w * cos_raan - cos_i * cos_w * sin_raan,
            -sin_w * sin_raan + cos_i * cos_w * cos_raan,
            sin_i * cos_w,
        ];
        (p, q)
    }

    /// Semi-latus rectum `p = a(1 − e²)`.
    pub fn semi_latus_rectum(&self) -> f64 {
        self.a * (1.0 - self.e * self.e)
    }
}

/// Check a gravitational parameter.
pub fn validate_mu(mu: f64) -> Result<(), ElementsError> {
    if !mu.is_finite() {
        return Err(ElementsError::NonFinite("mu"));
    }
    if mu <= 0.0 {
        return Err(ElementsError::NonPositiveMu(mu));
    }
    Ok(())
}

/// Position along the orbit, in exactly one of the three anomaly flavours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "rad", rename_all = "snake_case")]
pub enum Anomaly {
    True(f64),
    Mean(f64),
    Eccentric(f64),
}

/// Keplerian orbit together with the spacecraft's position on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientedOrbit {
    pub orbit: Orbit,
    pub anomaly: Anomaly,
}

impl OrientedOrbit {
    pub fn new(orbit: Orbit, anomaly: Anomaly) -> Self {
        Self { orbit, anomaly }
    }

    pub fn from_true(orbit: Orbit, nu: f64) -> Self {
        Self::new(orbit, Anomaly::True(nu))
    }

    pub fn from_mean(orbit: Orbit, m: f64) -> Self {
        Self::new(orbit, Anomaly::Mean(m))
    }

    pub fn from_eccentric(orbit: Orbit, ecc_anomaly: f64) -> Self {
        Self::new(orbit, Anomaly::Eccentric(ecc_anomaly))
    }

    /// True anomaly ν, converting from the stored variant if needed.
    pub fn true_anomaly(&self) -> f64 {
        let e = self.orbit.e;
        match self.anomaly {
            Anomaly::True(nu) => nu,
            Anomaly::Mean(m) => anomaly::true_from_mean(m, e),
            Anomaly::Eccentric(ecc) => anomaly::true_from_eccentric(ecc, e),
        }
    }

    /// Mean anomaly M, converting from the stored variant if needed.
    pub fn mean_anomaly(&self) -> f64 {
        let e = self.orbit.e;
        match self.anomaly {
            Anomaly::True(nu) => anomaly::mean_from_true(nu, e),
            Anomaly::Mean(m) => m,
            Anomaly::Eccentric(ecc) => anomaly::mean_from_eccentric(ecc, e),
        }
    }

    /// Eccentric anomaly E, converting from the stored variant if needed.
    pub fn eccentric_anomaly(&self) -> f64 {
        let e = self.orbit.e;
        match self.anomaly {
            Anomaly::True(nu) => anomaly::eccentric_from_true(nu, e),
            Anomaly::Mean(m) => anomaly::eccentric_from_mean(m, e),
            Anomaly::Eccentric(ecc) => ecc,
        }
    }

    pub fn to_true(&self) -> Self {
        Self::from_true(self.orbit, self.true_anomaly())
    }

    pub fn to_mean(&self) -> Self {
        Self::from_mean(self.orbit, self.mean_anomaly())
    }

    pub fn to_eccentric(&self) -> Self {
        Self::from_eccentric(self.orbit, self.eccentric_anomaly())
    }

    /// True latitude `u = w + ν`, wrapped into `[0, 2π)`.
    pub fn true_latitude(&self) -> f64 {
        normalize(self.orbit.w + self.true_anomaly())
    }

    /// Slide along the same orbit by `du` radians of true anomaly.
    ///
    /// The result is always in the true-anomaly variant.
    pub fn advanced_by(&self, du: f64) -> Self {
        Self::from_true(self.orbit, normalize(self.true_anomaly() + du))
    }
}
