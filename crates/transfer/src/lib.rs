//! Quasi-circular transfer planning: deviation reduction, coplanar and
//! non-coplanar impulse solvers, plan assembly, and the execution engine.

pub mod assembler;
pub mod case;
pub mod coplanar;
pub mod deviations;
pub mod execute;
pub mod intersection;
pub mod noncoplanar;
pub mod residuals;

pub use facade::*;
pub use maneuvering_impulsive as impulsive;
pub use maneuvering_orbits as orbits;

mod facade;
