//! Re-exported APIs for consumers of the transfer crate.

pub use crate::assembler::{TransferError, TransitionPlan, plan, plan_transition};
pub use crate::case::{CoplanarCase, DegenerateCase, NodalCase, NoncoplanarCase, TransferCase};
pub use crate::deviations::{Deviations, ReferenceOrbit, deviations, reduce, reference_orbit};
pub use crate::execute::{
    ANGLE_TOLERANCE, DEFAULT_STEP, ExecuteError, PointKind, Trajectory, TrajectoryPoint, execute,
    execute_batch,
};
pub use crate::intersection::intersection_angle;
pub use crate::residuals::{max_residual, residuals};
pub use maneuvering_impulsive::Maneuver;
