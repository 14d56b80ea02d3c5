//! Impulsive maneuvers: the maneuver value type, impulse application, a Lambert
//! solver and a Hohmann reference transfer.

pub mod hohmann;
pub mod impulse;
pub mod lambert;
pub mod maneuver;

pub use hohmann::{HohmannTransfer, hohmann};
pub use impulse::{ImpulseError, apply_impulse_inertial, apply_impulse_orbital};
pub use lambert::{LambertSolverError, Rendezvous, rendezvous, solve as lambert_solve};
pub use maneuver::{Maneuver, total_delta_v};
