//! Local orbital frame {radial, tangential, normal}.

use maneuvering_core::vector::{Vector3, add, cross, dot, scale, unit};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FrameError {
    #[error("cannot build an orbital frame from a zero position vector")]
    ZeroPosition,
    #[error("cannot build an orbital frame: position and velocity are parallel")]
    ZeroAngularMomentum,
}

/// Orthonormal basis attached to the spacecraft, expressed in inertial coordinates.
///
/// `radial` points along the position vector, `normal` along `r × v`, and
/// `tangential = normal × radial` completes the right-handed triad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalFrame {
    pub radial: Vector3,
    pub tangential: Vector3,
    pub normal: Vector3,
}

impl OrbitalFrame {
    pub fn from_state(r: &Vector3, v: &Vector3) -> Result<Self, FrameError> {
        let radial = unit(r).ok_or(FrameError::ZeroPosition)?;
        let normal = unit(&cross(r, v)).ok_or(FrameError::ZeroAngularMomentum)?;
        let tangential = cross(&normal, &radial);
        Ok(Self {
            radial,
            tangential,
            normal,
        })
    }

    /// Rotation matrix from the orbital frame to inertial axes (columns r, t, n).
    pub fn rotation_to_inertial(&self) -> [[f64; 3]; 3] {
        let (r, t, n) = (self.radial, self.tangential, self.normal);
        [
            [r[0], t[0], n[0]],
            [r[1], t[1], n[1]],
            [r[2], t[2], n[2]],
        ]
    }

    /// Map `(radial, tangential, normal)` components to an inertial vector.
    pub fn to_inertial(&self, local: &Vector3) -> Vector3 {
        add(
            &add(
                &scale(&self.radial, local[0]),
                &scale(&self.tangential, local[1]),
            ),
            &scale(&self.normal, local[2]),
        )
    }

    /// Project an inertial vector onto the orbital axes.
    pub fn to_orbital(&self, inertial: &Vector3) -> Vector3 {
        [
            dot(&self.radial, inertial),
            dot(&self.tangential, inertial),
            dot(&self.normal, inertial),
        ]
    }
}
