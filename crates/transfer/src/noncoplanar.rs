//! Two- and three-impulse solutions of the non-coplanar quasi-circular transfer.
//!
//! The branch is picked from three inequalities on the deviations:
//!
//! * `3·ey² ≤ i²` and `a² ≤ ex²`: nodal, both impulses on the line of nodes;
//! * `a² > ex²` and `e² + (2/√3)·ey·i − i² ≤ a²`: degenerate;
//! * anything else: singular, solved in the least-squares sense.
//!
//! Output impulses are dimensionless and unanchored, as in [`crate::coplanar`].

use std::f64::consts::PI;

use log::debug;
use maneuvering_core::constants::TOLERANCE;
use maneuvering_impulsive::Maneuver;
use nalgebra::{Matrix3x4, Vector3};

use crate::assembler::TransferError;
use crate::case::{DegenerateCase, NodalCase, NoncoplanarCase};
use crate::deviations::Deviations;

/// Singular-value cutoff for the least-squares solve.
const SVD_EPSILON: f64 = 1e-14;

pub fn classify(devs: &Deviations) -> NoncoplanarCase {
    let Deviations { ex, ey, e, a, i } = *devs;
    let nodal_plane = 3.0 * ey * ey <= i * i;
    let nodal_radius = a * a <= ex * ex;
    let degenerate = e * e + (2.0 / 3.0_f64.sqrt()) * ey * i - i * i <= a * a;

    if nodal_plane && nodal_radius {
        if ex.abs() < TOLERANCE {
            NoncoplanarCase::Nodal(NodalCase::WithoutEx)
        } else {
            NoncoplanarCase::Nodal(NodalCase::WithEx)
        }
    } else if !nodal_radius && degenerate {
        match (ex.abs() < TOLERANCE, ey.abs() < TOLERANCE) {
            (true, true) => NoncoplanarCase::Degenerate(DegenerateCase::WithoutE),
            (_, true) => NoncoplanarCase::Degenerate(DegenerateCase::WithoutEy),
            _ => NoncoplanarCase::Degenerate(DegenerateCase::General),
        }
    } else {
        NoncoplanarCase::Singular
    }
}

pub fn solve(devs: &Deviations) -> Result<(NoncoplanarCase, Vec<Maneuver>), TransferError> {
    let case = classify(devs);
    debug!(
        "non-coplanar case: {case} (ex = {:e}, ey = {:e}, a = {:e}, i = {:e})",
        devs.ex, devs.ey, devs.a, devs.i
    );
    let maneuvers = match case {
        NoncoplanarCase::Nodal(NodalCase::WithoutEx) => nodal_without_ex(devs).to_vec(),
        NoncoplanarCase::Nodal(NodalCase::WithEx) => nodal_with_ex(devs).to_vec(),
        NoncoplanarCase::Degenerate(DegenerateCase::WithoutE) => {
            degenerate_without_e(devs).to_vec()
        }
        NoncoplanarCase::Degenerate(DegenerateCase::WithoutEy) => {
            degenerate_without_ey(devs).to_vec()
        }
        NoncoplanarCase::Degenerate(DegenerateCase::General) => degenerate_general(devs).to_vec(),
        NoncoplanarCase::Singular => singular(devs)?.to_vec(),
    };
    Ok((case, maneuvers))
}

pub fn nodal_without_ex(devs: &Deviations) -> [Maneuver; 2] {
    [
        Maneuver::new([-devs.ey / 2.0, 0.0, devs.i / 2.0], 0.0),
        Maneuver::new([devs.ey / 2.0, 0.0, -devs.i / 2.0], PI),
    ]
}

pub fn nodal_with_ex(devs: &Deviations) -> [Maneuver; 2] {
    let Deviations { ex, ey, a, i, .. } = *devs;
    let burn = |k: f64, angle: f64| {
        Maneuver::new(
            [-k * ey / (2.0 * ex), k / 4.0, k * i / (2.0 * ex)],
            angle,
        )
    };
    [burn(a + ex, 0.0), burn(a - ex, PI)]
}

pub fn degenerate_without_e(devs: &Deviations) -> [Maneuver; 2] {
    [
        Maneuver::new([0.0, devs.a / 4.0, devs.i / 2.0], 0.0),
        Maneuver::new([0.0, devs.a / 4.0, -devs.i / 2.0], PI),
    ]
}

pub fn degenerate_without_ey(devs: &Deviations) -> [Maneuver; 2] {
    [
        Maneuver::new([0.0, (devs.a + devs.ex) / 4.0, devs.i / 2.0], 0.0),
        Maneuver::new([0.0, (devs.a - devs.ex) / 4.0, -devs.i / 2.0], PI),
    ]
}

/// General degenerate case: total ΔV and impulse directions from the
/// Lagrange multipliers of the minimum-ΔV problem, split between two points
/// symmetric about `θ₀`.
pub fn degenerate_general(devs: &Deviations) -> [Maneuver; 2] {
    let Deviations { ex, ey, e, a, i } = *devs;
    let (e2, a2, i2) = (e * e, a * a, i * i);
    let (ex2, ey2) = (ex * ex, ey * ey);

    let mult = i2 - e2 + a2;
    let denom = (mult * mult + 4.0 * i2 * ey2).sqrt();
    let delta_v = ((i2 + e2 - a2 / 2.0 + denom) / 2.0).sqrt();
    let scale = 2.0 * delta_v;

    let lam1 = a / scale * (-0.5 + mult / denom);
    let lam2 = ey / scale * (1.0 - (-i2 - e2 + a2) / denom);
    let lam3 = ex / scale * (1.0 - mult / denom);
    let lam4 = -ey / scale * (2.0 * i * ex / denom);
    let lam5 = i / scale * (1.0 + (i2 - ex2 + ey2 + a2) / denom);

    let theta0 = lam2.atan2(lam3);
    let m = lam2.hypot(lam3);
    let num = 4.0 * lam1 * m.powi(3);
    let den = (lam3 * lam4 - lam2 * lam5).powi(2) - 3.0 * m.powi(4);
    let dtheta = (num / den).clamp(-1.0, 1.0).acos();
    let theta1 = theta0 + dtheta;
    let theta2 = 2.0 * theta0 - theta1;

    let (s1, c1) = theta1.sin_cos();
    let dir_r = -lam2 * c1 + lam3 * s1;
    let dir_t = 2.0 * lam1 + 2.0 * lam2 * s1 + 2.0 * lam3 * c1;
    let dir_n = lam4 * s1 + lam5 * c1;

    let s1_abs = s1.abs();
    let s2_abs = theta2.sin().abs();
    let split = if s1_abs == 0.0 && s2_abs == 0.0 {
        0.5
    } else {
        s1_abs / (s1_abs + s2_abs)
    };
    let dv1 = delta_v * (1.0 - split);
    let dv2 = delta_v * split;

    [
        Maneuver::new([dir_r * dv1, dir_t * dv1, dir_n * dv1], theta1),
        Maneuver::new([-dir_r * dv2, dir_t * dv2, -dir_n * dv2], theta2),
    ]
}

/// Three impulses at `θ₀`, `θ₀ + π` and the node, with the in-plane
/// components from the minimum-norm solution of the underdetermined system.
pub fn singular(devs: &Deviations) -> Result<[Maneuver; 3], TransferError> {
    let theta0 = (3.0_f64.sqrt() * devs.i + devs.ey).atan2(devs.ex);
    let theta1 = theta0 + PI;
    let (s0, c0) = theta0.sin_cos();
    let (s1, c1) = theta1.sin_cos();

    #[rustfmt::skip]
    let system = Matrix3x4::new(
        2.0 * c0, 2.0 * c1, 2.0, 0.0,
        2.0 * s0, 2.0 * s1, 0.0, -1.0,
        2.0,      2.0,      2.0, 0.0,
    );
    let rhs = Vector3::new(devs.ex, devs.ey, devs.a);
    let x = system
        .svd(true, true)
        .solve(&rhs, SVD_EPSILON)
        .map_err(TransferError::LeastSquares)?;

    Ok([
        Maneuver::new([0.0, x[0], 0.0], theta0),
        Maneuver::new([0.0, x[1], 0.0], theta1),
        Maneuver::new([x[3], x[2], devs.i], 0.0),
    ])
}
