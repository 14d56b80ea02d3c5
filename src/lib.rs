//! Analytical impulsive transfers between near-circular orbits.
//!
//! The member crates do the work; this package ties them together, turns
//! scenario manifests into validated orbits, and hosts the integration tests.

pub mod report;
pub mod scenario;

pub use maneuvering_config as config;
pub use maneuvering_core as shared;
pub use maneuvering_export as export;
pub use maneuvering_impulsive as impulsive;
pub use maneuvering_orbits as orbits;
pub use maneuvering_transfer as transfer;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
