//! Transition assembler: picks the solver, scales impulses to m/s and anchors
//! their angles on the initial orbit.

use std::f64::consts::TAU;

use log::debug;
use maneuvering_core::angle::normalize;
use maneuvering_core::constants::TOLERANCE;
use maneuvering_impulsive::{Maneuver, total_delta_v};
use maneuvering_orbits::{ElementsError, Orbit, validate_mu};
use serde::Serialize;
use thiserror::Error;

use crate::case::TransferCase;
use crate::deviations::{Deviations, ReferenceOrbit, reduce};
use crate::intersection::intersection_angle;
use crate::{coplanar, noncoplanar};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransferError {
    #[error("invalid orbit: {0}")]
    Elements(#[from] ElementsError),
    #[error("least-squares solve failed: {0}")]
    LeastSquares(&'static str),
}

/// Planned transfer with the intermediate quantities that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionPlan {
    pub deviations: Deviations,
    pub reference: ReferenceOrbit,
    pub case: TransferCase,
    /// Angle added to every solver angle to place it on the initial orbit [rad].
    pub anchor: f64,
    /// Impulses in m/s, sorted by ascending angle.
    pub maneuvers: Vec<Maneuver>,
}

impl TransitionPlan {
    /// Sum of impulse magnitudes [m/s].
    pub fn total_delta_v(&self) -> f64 {
        total_delta_v(&self.maneuvers)
    }

    pub fn is_empty(&self) -> bool {
        self.maneuvers.is_empty()
    }
}

/// Plan the impulsive transfer from `initial` to `target`.
pub fn plan(initial: &Orbit, target: &Orbit, mu: f64) -> Result<TransitionPlan, TransferError> {
    initial.validate()?;
    target.validate()?;
    validate_mu(mu)?;

    let (deviations, reference) = reduce(initial, target, mu);
    let (case, anchor, raw) = if deviations.i.abs() < TOLERANCE {
        let (case, raw) = coplanar::solve(&deviations);
        (
            TransferCase::Coplanar(case),
            normalize(TAU - initial.w),
            raw,
        )
    } else {
        let (case, raw) = noncoplanar::solve(&deviations)?;
        (
            TransferCase::Noncoplanar(case),
            intersection_angle(initial, target),
            raw,
        )
    };

    let mut maneuvers: Vec<Maneuver> = raw
        .into_iter()
        .map(|m| {
            Maneuver::new(
                [
                    m.dv[0] * reference.v,
                    m.dv[1] * reference.v,
                    m.dv[2] * reference.v,
                ],
                normalize(anchor + m.angle),
            )
        })
        .collect();
    // stable: equal angles keep solver order
    maneuvers.sort_by(|a, b| a.angle.total_cmp(&b.angle));

    let plan = TransitionPlan {
        deviations,
        reference,
        case,
        anchor,
        maneuvers,
    };
    debug!(
        "planned {case}: {} impulse(s), total {:.6} m/s",
        plan.maneuvers.len(),
        plan.total_delta_v()
    );
    Ok(plan)
}

/// Just the maneuver list of [`plan`].
pub fn plan_transition(
    initial: &Orbit,
    target: &Orbit,
    mu: f64,
) -> Result<Vec<Maneuver>, TransferError> {
    plan(initial, target, mu).map(|p| p.maneuvers)
}
