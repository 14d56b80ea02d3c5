use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Earth's gravitational parameter [m³/s²], used when a scenario omits `mu_m3_s2`.
pub const DEFAULT_MU_M3_S2: f64 = 3.986_004_415_8e14;

/// Sampling step of the executed trajectory when a scenario omits `step_deg`.
pub const DEFAULT_STEP_DEG: f64 = 0.5;

/// One initial → target transfer request.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScenarioConfig {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_mu")]
    pub mu_m3_s2: f64,
    #[serde(default = "default_step")]
    pub step_deg: f64,
    pub initial: OrbitConfig,
    pub target: OrbitConfig,
}

/// Keplerian elements as written in manifests: kilometres and degrees.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct OrbitConfig {
    pub a_km: f64,
    #[serde(default)]
    pub e: f64,
    #[serde(default)]
    pub w_deg: f64,
    #[serde(default)]
    pub i_deg: f64,
    #[serde(default)]
    pub raan_deg: f64,
    /// Starting true anomaly; only meaningful for the initial orbit.
    #[serde(default)]
    pub nu_deg: Option<f64>,
}

fn default_mu() -> f64 {
    DEFAULT_MU_M3_S2
}

fn default_step() -> f64 {
    DEFAULT_STEP_DEG
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("duplicate scenario name `{0}`")]
    DuplicateName(String),
}

/// Load scenarios from a YAML list, a single TOML record, or a directory of TOML files.
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<ScenarioConfig>, ConfigError> {
    let scenarios: Vec<ScenarioConfig> = load_records(path)?;
    let mut seen = std::collections::BTreeSet::new();
    for scenario in &scenarios {
        if !seen.insert(scenario.name.as_str()) {
            return Err(ConfigError::DuplicateName(scenario.name.clone()));
        }
    }
    Ok(scenarios)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if has_extension(path, "toml") {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| has_extension(path, "toml"))
        .collect();
    entries.sort();

    let mut records = Vec::with_capacity(entries.len());
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        records.push(toml::from_str(&contents)?);
    }
    Ok(records)
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().is_some_and(|e| e == ext)
}
