//! Maneuver execution engine.
//!
//! A state moves forward along its orbit in true latitude only. Each maneuver
//! is reached by coasting the forward gap `(angle − u) mod 2π` and is then
//! applied in the local orbital frame. Coasting is a pure true-anomaly
//! increment; no time is involved.

use log::{debug, trace};
use maneuvering_core::angle::{forward_gap, separation};
use maneuvering_core::constants::{DEG, TWO_PI};
use maneuvering_impulsive::{ImpulseError, Maneuver, apply_impulse_orbital};
use maneuvering_orbits::{ElementsError, OrientedOrbit, validate_mu};
use serde::Serialize;
use thiserror::Error;

/// Angular slack for ties and for "already at the maneuver" checks [rad].
pub const ANGLE_TOLERANCE: f64 = 1e-9;

/// Default sampling step of [`execute_batch`]: half a degree.
pub const DEFAULT_STEP: f64 = 0.5 * DEG;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExecuteError {
    #[error("invalid state: {0}")]
    Elements(#[from] ElementsError),
    #[error("maneuver {index} has angle {angle} outside [0, 2π)")]
    AngleOutOfRange { index: usize, angle: f64 },
    #[error("maneuver {index} has a non-finite impulse")]
    NonFiniteImpulse { index: usize },
    #[error("maneuver {index} (angle {angle}) precedes the previous one (angle {previous})")]
    Unsorted {
        index: usize,
        angle: f64,
        previous: f64,
    },
    #[error("first maneuver at {angle} rad lies behind the start true latitude {latitude} rad")]
    BehindStart { angle: f64, latitude: f64 },
    #[error("sampling step must be positive and finite, got {0}")]
    InvalidStep(f64),
    #[error("impulse {index} could not be applied: {source}")]
    Impulse {
        index: usize,
        #[source]
        source: ImpulseError,
    },
}

/// Why a trajectory point was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "maneuver", rename_all = "snake_case")]
pub enum PointKind {
    Start,
    Coast,
    BeforeImpulse(usize),
    AfterImpulse(usize),
}

impl PointKind {
    pub fn label(&self) -> &'static str {
        match self {
            PointKind::Start => "start",
            PointKind::Coast => "coast",
            PointKind::BeforeImpulse(_) => "before_impulse",
            PointKind::AfterImpulse(_) => "after_impulse",
        }
    }

    pub fn maneuver_index(&self) -> Option<usize> {
        match self {
            PointKind::BeforeImpulse(i) | PointKind::AfterImpulse(i) => Some(*i),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectoryPoint {
    pub state: OrientedOrbit,
    /// True latitude swept since the start, not wrapped [rad].
    pub swept: f64,
    pub kind: PointKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    pub points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    pub fn start(&self) -> Option<&OrientedOrbit> {
        self.points.first().map(|p| &p.state)
    }

    pub fn final_state(&self) -> Option<&OrientedOrbit> {
        self.points.last().map(|p| &p.state)
    }

    pub fn states(&self) -> impl Iterator<Item = &OrientedOrbit> {
        self.points.iter().map(|p| &p.state)
    }

    pub fn swept_angles(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.swept)
    }

    /// Total true latitude covered [rad].
    pub fn total_swept(&self) -> f64 {
        self.points.last().map_or(0.0, |p| p.swept)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Apply `maneuvers` in order and return the final state.
pub fn execute(
    state: &OrientedOrbit,
    maneuvers: &[Maneuver],
    mu: f64,
) -> Result<OrientedOrbit, ExecuteError> {
    validate(state, maneuvers, mu)?;
    let mut current = state.to_true();
    for (index, maneuver) in maneuvers.iter().enumerate() {
        let gap = gap_to(&current, maneuver);
        current = impulse(&current.advanced_by(gap), maneuver, index, mu)?;
    }
    Ok(current)
}

/// Like [`execute`], but records the start, a sample every `step` radians of
/// coasting, and the states right before and after every impulse.
///
/// The last coast leg ends with an exact jump onto the maneuver angle, so the
/// final state does not depend on `step` and equals the result of [`execute`].
pub fn execute_batch(
    state: &OrientedOrbit,
    maneuvers: &[Maneuver],
    step: f64,
    mu: f64,
) -> Result<Trajectory, ExecuteError> {
    if !(step.is_finite() && step > 0.0) {
        return Err(ExecuteError::InvalidStep(step));
    }
    validate(state, maneuvers, mu)?;

    let mut anchor = state.to_true();
    let mut swept = 0.0;
    let mut points = vec![TrajectoryPoint {
        state: anchor,
        swept,
        kind: PointKind::Start,
    }];

    for (index, maneuver) in maneuvers.iter().enumerate() {
        let gap = gap_to(&anchor, maneuver);

        // samples are taken from the last impulse point so rounding does not accumulate
        let offsets = (1_usize..)
            .map(|k| k as f64 * step)
            .take_while(|&offset| offset < gap);
        for offset in offsets {
            trace!("coast sample at +{offset:.6} rad");
            points.push(TrajectoryPoint {
                state: anchor.advanced_by(offset),
                swept: swept + offset,
                kind: PointKind::Coast,
            });
        }

        let before = anchor.advanced_by(gap);
        swept += gap;
        points.push(TrajectoryPoint {
            state: before,
            swept,
            kind: PointKind::BeforeImpulse(index),
        });

        anchor = impulse(&before, maneuver, index, mu)?;
        points.push(TrajectoryPoint {
            state: anchor,
            swept,
            kind: PointKind::AfterImpulse(index),
        });
    }

    Ok(Trajectory { points })
}

fn gap_to(state: &OrientedOrbit, maneuver: &Maneuver) -> f64 {
    forward_gap(state.true_latitude(), maneuver.angle, ANGLE_TOLERANCE)
}

fn impulse(
    state: &OrientedOrbit,
    maneuver: &Maneuver,
    index: usize,
    mu: f64,
) -> Result<OrientedOrbit, ExecuteError> {
    debug!(
        "maneuver {index}: dv = [{:.6}, {:.6}, {:.6}] m/s at u = {:.9} rad",
        maneuver.dv[0], maneuver.dv[1], maneuver.dv[2], maneuver.angle
    );
    apply_impulse_orbital(state, &maneuver.dv, mu)
        .map_err(|source| ExecuteError::Impulse { index, source })
}

fn validate(state: &OrientedOrbit, maneuvers: &[Maneuver], mu: f64) -> Result<(), ExecuteError> {
    validate_mu(mu)?;
    state.orbit.validate()?;

    for (index, m) in maneuvers.iter().enumerate() {
        if !(m.angle.is_finite() && (0.0..TWO_PI).contains(&m.angle)) {
            return Err(ExecuteError::AngleOutOfRange {
                index,
                angle: m.angle,
            });
        }
        if m.dv.iter().any(|c| !c.is_finite()) {
            return Err(ExecuteError::NonFiniteImpulse { index });
        }
    }

    if let Some((index, pair)) = maneuvers
        .windows(2)
        .enumerate()
        .find(|(_, pair)| pair[1].angle < pair[0].angle)
    {
        return Err(ExecuteError::Unsorted {
            index: index + 1,
            angle: pair[1].angle,
            previous: pair[0].angle,
        });
    }

    if let Some(first) = maneuvers.first() {
        let latitude = state.true_latitude();
        // a start just short of a full turn is the beginning of the revolution
        let latitude = if TWO_PI - latitude <= ANGLE_TOLERANCE {
            0.0
        } else {
            latitude
        };
        if first.angle < latitude && separation(first.angle, latitude) > ANGLE_TOLERANCE {
            return Err(ExecuteError::BehindStart {
                angle: first.angle,
                latitude,
            });
        }
    }
    Ok(())
}
