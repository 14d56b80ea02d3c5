//! Core constants, units, and shared primitives for the orbit maneuvering workspace.

/// Physical and numerical constants expressed in SI units.
pub mod constants {
    /// Earth's gravitational parameter (m³/s²).
    pub const MU_EARTH: f64 = 3.986_004_415_8e14;
    /// Full turn in radians.
    pub const TWO_PI: f64 = 2.0 * std::f64::consts::PI;
    /// One degree in radians.
    pub const DEG: f64 = std::f64::consts::PI / 180.0;
    /// Numerical tolerance used for branch selection (~100 machine epsilons).
    pub const TOLERANCE: f64 = 100.0 * f64::EPSILON;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::DEG;

    /// Convert kilometres to metres.
    #[inline]
    pub fn km_to_m(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert degrees to radians.
    #[inline]
    pub fn deg_to_rad(v: f64) -> f64 {
        v * DEG
    }

    /// Convert radians to degrees.
    #[inline]
    pub fn rad_to_deg(v: f64) -> f64 {
        v / DEG
    }
}

/// Angle wrapping helpers. All angles are radians.
pub mod angle {
    use super::constants::TWO_PI;

    /// Wrap an angle into `[0, 2π)`.
    #[inline]
    pub fn normalize(x: f64) -> f64 {
        let wrapped = x.rem_euclid(TWO_PI);
        // rem_euclid rounds tiny negative inputs up to exactly 2π
        if wrapped >= TWO_PI { 0.0 } else { wrapped }
    }

    /// Forward angular distance from `from` to `to`, in `[0, 2π)`.
    ///
    /// A target lying less than `tol` behind `from` is treated as already reached
    /// instead of being a full revolution away.
    #[inline]
    pub fn forward_gap(from: f64, to: f64, tol: f64) -> f64 {
        let gap = normalize(to - from);
        if TWO_PI - gap <= tol { 0.0 } else { gap }
    }

    /// Smallest absolute difference between two angles, in `[0, π]`.
    #[inline]
    pub fn separation(a: f64, b: f64) -> f64 {
        let d = normalize(a - b);
        d.min(TWO_PI - d)
    }
}

/// Minimal vector helpers to avoid ad-hoc `[f64; 3]` math everywhere.
pub mod vector {
    /// Alias for a 3D vector in metres or m/s depending on context.
    pub type Vector3 = [f64; 3];

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector3) -> f64 {
        dot(v, v).sqrt()
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    /// Right-handed cross product `a × b`.
    #[inline]
    pub fn cross(a: &Vector3, b: &Vector3) -> Vector3 {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]
    }

    /// Vector addition.
    #[inline]
    pub fn add(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    /// Scale a vector by a scalar.
    #[inline]
    pub fn scale(v: &Vector3, s: f64) -> Vector3 {
        [v[0] * s, v[1] * s, v[2] * s]
    }

    /// Unit vector along `v`, or `None` for the zero vector.
    #[inline]
    pub fn unit(v: &Vector3) -> Option<Vector3> {
        let n = norm(v);
        (n > 0.0).then(|| scale(v, 1.0 / n))
    }
}
