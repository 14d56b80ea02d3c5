use std::path::Path;

use maneuvering_config::{ConfigError, OrbitConfig, ScenarioConfig};
use maneuvering_core::angle::normalize;
use maneuvering_core::units::{deg_to_rad, km_to_m};
use maneuvering_orbits::{ElementsError, Orbit, OrientedOrbit, validate_mu};
use thiserror::Error;

/// A scenario with validated runtime orbits in SI units.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    pub mu: f64,
    /// Trajectory sampling step [rad].
    pub step: f64,
    pub initial: OrientedOrbit,
    pub target: Orbit,
}

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("scenario `{scenario}`: {source}")]
    Elements {
        scenario: String,
        #[source]
        source: ElementsError,
    },
    #[error("scenario `{scenario}`: sampling step must be positive, got {step_deg} deg")]
    InvalidStep { scenario: String, step_deg: f64 },
    #[error("scenario `{0}` not found")]
    NotFound(String),
    #[error("scenario catalog is empty")]
    Empty,
}

/// Load and validate every scenario of a manifest (file or directory).
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>, ScenarioError> {
    maneuvering_config::load_scenarios(path)?
        .into_iter()
        .map(Scenario::try_from)
        .collect()
}

/// Pick a scenario by name (case-insensitive) or the first one when `name` is `None`.
pub fn select(scenarios: Vec<Scenario>, name: Option<&str>) -> Result<Scenario, ScenarioError> {
    let mut iter = scenarios.into_iter();
    match name {
        Some(name) => iter
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| ScenarioError::NotFound(name.to_string())),
        None => iter.next().ok_or(ScenarioError::Empty),
    }
}

impl TryFrom<ScenarioConfig> for Scenario {
    type Error = ScenarioError;

    fn try_from(value: ScenarioConfig) -> Result<Self, Self::Error> {
        let elements = |source| ScenarioError::Elements {
            scenario: value.name.clone(),
            source,
        };
        validate_mu(value.mu_m3_s2).map_err(elements)?;
        if !(value.step_deg.is_finite() && value.step_deg > 0.0) {
            return Err(ScenarioError::InvalidStep {
                scenario: value.name.clone(),
                step_deg: value.step_deg,
            });
        }

        let initial_orbit = orbit_from_config(&value.initial).map_err(elements)?;
        let target = orbit_from_config(&value.target).map_err(elements)?;
        // without an explicit anomaly the spacecraft starts on the line of nodes
        let nu = value
            .initial
            .nu_deg
            .map(deg_to_rad)
            .unwrap_or(-initial_orbit.w);
        let initial = OrientedOrbit::from_true(initial_orbit, normalize(nu));

        Ok(Scenario {
            name: value.name,
            description: value.description,
            mu: value.mu_m3_s2,
            step: deg_to_rad(value.step_deg),
            initial,
            target,
        })
    }
}

/// Convert manifest units (km, degrees) into a validated [`Orbit`].
pub fn orbit_from_config(config: &OrbitConfig) -> Result<Orbit, ElementsError> {
    Orbit::new(
        km_to_m(config.a_km),
        config.e,
        normalize(deg_to_rad(config.w_deg)),
        deg_to_rad(config.i_deg),
        normalize(deg_to_rad(config.raan_deg)),
    )
}
