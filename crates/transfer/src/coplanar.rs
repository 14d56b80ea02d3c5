//! Two-impulse solution of the coplanar quasi-circular transfer.
//!
//! Impulses are dimensionless (fractions of the reference circular speed) and
//! their angles are measured from the eccentricity-deviation frame; the
//! assembler scales and anchors them.

use std::f64::consts::PI;

use log::debug;
use maneuvering_core::angle::normalize;
use maneuvering_core::constants::TOLERANCE;
use maneuvering_impulsive::Maneuver;

use crate::case::CoplanarCase;
use crate::deviations::Deviations;

pub fn classify(devs: &Deviations) -> CoplanarCase {
    if devs.e.abs() < TOLERANCE && devs.a.abs() < TOLERANCE {
        CoplanarCase::Coincident
    } else if devs.e > devs.a.abs() {
        CoplanarCase::Intersecting
    } else {
        CoplanarCase::NonIntersecting
    }
}

pub fn solve(devs: &Deviations) -> (CoplanarCase, Vec<Maneuver>) {
    let case = classify(devs);
    debug!("coplanar case: {case} (e = {:e}, a = {:e})", devs.e, devs.a);
    let maneuvers = match case {
        CoplanarCase::Coincident => Vec::new(),
        CoplanarCase::Intersecting => intersecting(devs).to_vec(),
        CoplanarCase::NonIntersecting => non_intersecting(devs, None).to_vec(),
    };
    (case, maneuvers)
}

/// Crossing orbits: tangential impulses at both ends of the eccentricity-deviation line.
pub fn intersecting(devs: &Deviations) -> [Maneuver; 2] {
    let angle = devs.ey.atan2(devs.ex);
    [
        Maneuver::new([0.0, (devs.a + devs.e) / 4.0, 0.0], angle),
        Maneuver::new([0.0, (devs.a - devs.e) / 4.0, 0.0], angle + PI),
    ]
}

/// Nested orbits. The first impulse angle defaults to the eccentricity-deviation
/// direction; any other angle yields an equally valid solution.
///
/// A supplied angle with `e·cos(θ₁ − θₑ) = a` and `e ≠ a` admits no finite
/// first impulse; the default angle is used instead.
pub fn non_intersecting(devs: &Deviations, first_angle: Option<f64>) -> [Maneuver; 2] {
    let Deviations { ex, ey, e, a, .. } = *devs;
    let theta1 = first_angle.map_or_else(|| ey.atan2(ex), normalize);
    let (sin1, cos1) = theta1.sin_cos();

    let denominator = ey * sin1 + ex * cos1 - a;
    let dvt1 = if denominator.abs() >= TOLERANCE {
        (e * e - a * a) / (4.0 * denominator)
    } else if first_angle.is_none() || (e - a).abs() < TOLERANCE {
        // limit of (e² − a²)/(e − a) as e → a
        (e + a) / 4.0
    } else {
        debug!("first angle {theta1} has no finite solution, using the default");
        return non_intersecting(devs, None);
    };
    let dvt2 = a / 2.0 - dvt1;

    let theta2 = if dvt2.abs() < TOLERANCE {
        theta1 + PI
    } else {
        ((ey / 2.0 - dvt1 * sin1) / dvt2).atan2((ex / 2.0 - dvt1 * cos1) / dvt2)
    };

    [
        Maneuver::new([0.0, dvt1, 0.0], theta1),
        Maneuver::new([0.0, dvt2, 0.0], theta2),
    ]
}
