use std::path::PathBuf;

use clap::Parser;
use log::info;
use orbit_maneuvering::export::{self, plan::Metadata};
use orbit_maneuvering::impulsive::hohmann;
use orbit_maneuvering::orbits::{Orbit, orbit_distance};
use orbit_maneuvering::report::trajectory_records;
use orbit_maneuvering::scenario;
use orbit_maneuvering::shared::units::{deg_to_rad, m_to_km, rad_to_deg};
use orbit_maneuvering::transfer::{execute_batch, plan};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Plan and execute an impulsive transfer between near-circular orbits"
)]
struct Cli {
    /// Scenario manifest: YAML list, TOML file, or directory of TOML files
    #[arg(long, default_value = "configs/scenarios")]
    scenarios: PathBuf,

    /// Scenario name (case-insensitive); defaults to the first entry
    #[arg(long)]
    scenario: Option<String>,

    /// List scenario names and exit
    #[arg(long, default_value_t = false)]
    list: bool,

    /// Override the trajectory sampling step in degrees
    #[arg(long)]
    step_deg: Option<f64>,

    /// Write the sampled trajectory as CSV (`-` for stdout)
    #[arg(long)]
    trajectory: Option<PathBuf>,

    /// Write the plan as a JSON sidecar (`-` for stdout)
    #[arg(long)]
    plan: Option<PathBuf>,

    /// Print the circular Hohmann cost between the two semi-major axes
    #[arg(long, default_value_t = false)]
    estimate_hohmann: bool,
}

fn main() -> anyhow::Result<()> {
    if pretty_env_logger::try_init().is_err() {
        eprintln!("could not init logger");
    }
    let cli = Cli::parse();

    let scenarios = scenario::load_scenarios(&cli.scenarios)?;
    if cli.list {
        for s in &scenarios {
            match &s.description {
                Some(text) => println!("{:<24} {}", s.name, text),
                None => println!("{}", s.name),
            }
        }
        return Ok(());
    }

    let mut selected = scenario::select(scenarios, cli.scenario.as_deref())?;
    if let Some(step_deg) = cli.step_deg {
        if !(step_deg.is_finite() && step_deg > 0.0) {
            anyhow::bail!("--step-deg must be positive, got {step_deg}");
        }
        selected.step = deg_to_rad(step_deg);
    }
    info!("running scenario `{}`", selected.name);

    let transfer = plan(&selected.initial.orbit, &selected.target, selected.mu)?;
    let trajectory = execute_batch(
        &selected.initial,
        &transfer.maneuvers,
        selected.step,
        selected.mu,
    )?;
    let final_state = trajectory
        .final_state()
        .copied()
        .ok_or_else(|| anyhow::anyhow!("execution produced an empty trajectory"))?;
    let gap = orbit_distance(&selected.initial.orbit, &selected.target);
    let miss = orbit_distance(&final_state.orbit, &selected.target);

    let reference_cost = hohmann(selected.initial.orbit.a, selected.target.a, selected.mu);

    println!("=== Transfer: {} ===", selected.name);
    println!("Case            : {}", transfer.case);
    println!(
        "Reference orbit : r = {:.3} km, v = {:.3} m/s",
        m_to_km(transfer.reference.r),
        transfer.reference.v
    );
    if transfer.is_empty() {
        println!("Maneuvers       : none (orbits coincide)");
    }
    for (index, m) in transfer.maneuvers.iter().enumerate() {
        println!(
            "Maneuver {index}      : u = {:>10.4} deg, dv = [{:+.6}, {:+.6}, {:+.6}] m/s, |dv| = {:.6} m/s",
            rad_to_deg(m.angle),
            m.radial(),
            m.tangential(),
            m.normal(),
            m.magnitude()
        );
    }
    println!("Total Δv        : {:.6} m/s", transfer.total_delta_v());
    if cli.estimate_hohmann {
        let h = reference_cost;
        println!(
            "Hohmann est.    : Δv_total = {:.6} m/s (dv1 = {:+.6}, dv2 = {:+.6}), TOF = {:.1} s",
            h.total, h.dv1, h.dv2, h.time_of_flight
        );
    }
    print_orbit("Final orbit     ", &final_state.orbit);
    print_orbit("Target orbit    ", &selected.target);
    println!("Start distance  : {gap:.6} m");
    println!("Distance        : {miss:.6} m");
    println!(
        "Coast           : {:.3} deg over {} samples",
        rad_to_deg(trajectory.total_swept()),
        trajectory.len()
    );

    if let Some(path) = &cli.trajectory {
        let records = trajectory_records(&trajectory, selected.mu);
        let mut writer = export::writer_for_path(path)?;
        export::trajectory::write_all(writer.as_mut(), &records)?;
        info!("trajectory written to {}", path.display());
    }

    if let Some(path) = &cli.plan {
        let meta = Metadata {
            scenario: &selected.name,
            mu_m3_s2: selected.mu,
            total_delta_v_m_s: transfer.total_delta_v(),
            hohmann_delta_v_m_s: Some(reference_cost.total),
        };
        export::plan::write_sidecar(path, &meta, &transfer)?;
        info!("plan written to {}", path.display());
    }

    Ok(())
}

fn print_orbit(label: &str, orbit: &Orbit) {
    println!(
        "{label}: a = {:.3} km, e = {:.6}, i = {:.4} deg, Ω = {:.4} deg, ω = {:.4} deg",
        m_to_km(orbit.a),
        orbit.e,
        rad_to_deg(orbit.i),
        rad_to_deg(orbit.raan),
        rad_to_deg(orbit.w)
    );
}
