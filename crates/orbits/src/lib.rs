//! Two-body orbit primitives: Keplerian elements, anomaly conversion, Cartesian
//! states, the local orbital frame, orbit distance, and time propagation.

pub mod anomaly;
pub mod cartesian;
pub mod distance;
pub mod elements;
pub mod frame;
pub mod propagate;

pub use cartesian::{CartesianState, from_cartesian, to_cartesian};
pub use distance::orbit_distance;
pub use elements::{Anomaly, ElementsError, Orbit, OrientedOrbit, validate_mu};
pub use frame::{FrameError, OrbitalFrame};
pub use propagate::{mean_motion, period, propagate};
