//! Impulsive maneuver value type.

use maneuvering_core::vector::{Vector3, norm};
use serde::{Deserialize, Serialize};

/// Velocity impulse applied at a given true latitude.
///
/// `dv` is expressed in the local orbital frame `(radial, tangential, normal)`
/// in m/s; `angle` is the true latitude `w + ν` of application in `[0, 2π)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Maneuver {
    pub dv: Vector3,
    pub angle: f64,
}

impl Maneuver {
    pub fn new(dv: Vector3, angle: f64) -> Self {
        Self { dv, angle }
    }

    /// Impulse magnitude |dv| in m/s.
    pub fn magnitude(&self) -> f64 {
        norm(&self.dv)
    }

    pub fn radial(&self) -> f64 {
        self.dv[0]
    }

    pub fn tangential(&self) -> f64 {
        self.dv[1]
    }

    pub fn normal(&self) -> f64 {
        self.dv[2]
    }
}

/// Sum of impulse magnitudes over a maneuver list.
pub fn total_delta_v(maneuvers: &[Maneuver]) -> f64 {
    maneuvers.iter().map(Maneuver::magnitude).sum()
}
