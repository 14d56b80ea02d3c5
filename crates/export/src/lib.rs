//! Export helpers for trajectory CSV and plan JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod trajectory {
    use std::io::{self, Write};

    pub const HEADER: &str = "index,kind,maneuver,swept_deg,a_m,e,i_deg,raan_deg,w_deg,nu_deg,u_deg,x_m,y_m,z_m,vx_m_s,vy_m_s,vz_m_s";

    /// Write the trajectory CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{HEADER}")
    }

    /// One sampled state of an executed transfer.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub index: usize,
        pub kind: &'a str,
        /// Index of the maneuver this sample belongs to, for impulse points.
        pub maneuver: Option<usize>,
        pub swept_deg: f64,
        pub a_m: f64,
        pub e: f64,
        pub i_deg: f64,
        pub raan_deg: f64,
        pub w_deg: f64,
        pub nu_deg: f64,
        pub u_deg: f64,
        pub position_m: [f64; 3],
        pub velocity_m_s: [f64; 3],
    }

    impl Record<'_> {
        /// Serialize the record to CSV, matching the header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            let maneuver = self.maneuver.map(|m| m.to_string()).unwrap_or_default();
            let [x, y, z] = self.position_m;
            let [vx, vy, vz] = self.velocity_m_s;
            writeln!(
                writer,
                "{},{},{},{:.6},{:.3},{:.9},{:.6},{:.6},{:.6},{:.6},{:.6},{:.3},{:.3},{:.3},{:.6},{:.6},{:.6}",
                self.index,
                self.kind,
                maneuver,
                self.swept_deg,
                self.a_m,
                self.e,
                self.i_deg,
                self.raan_deg,
                self.w_deg,
                self.nu_deg,
                self.u_deg,
                x,
                y,
                z,
                vx,
                vy,
                vz,
            )
        }
    }

    /// Write a header followed by every record and flush.
    pub fn write_all(writer: &mut dyn Write, records: &[Record<'_>]) -> io::Result<()> {
        write_header(writer)?;
        for record in records {
            record.write_to(writer)?;
        }
        writer.flush()
    }
}

pub mod plan {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::io::{self, Write};
    use std::path::Path;

    /// Metadata describing the scenario a plan was computed for.
    #[derive(Debug, Clone, Copy)]
    pub struct Metadata<'a> {
        pub scenario: &'a str,
        pub mu_m3_s2: f64,
        pub total_delta_v_m_s: f64,
        pub hohmann_delta_v_m_s: Option<f64>,
    }

    #[derive(Serialize)]
    struct PlanSidecar<'a, P: Serialize> {
        scenario: &'a str,
        mu_m3_s2: f64,
        total_delta_v_m_s: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        hohmann_delta_v_m_s: Option<f64>,
        #[serde(flatten)]
        plan: &'a P,
    }

    /// Write the plan as pretty JSON with the scenario metadata merged in.
    pub fn write_to<P: Serialize>(
        writer: &mut dyn Write,
        meta: &Metadata<'_>,
        plan: &P,
    ) -> io::Result<()> {
        let sidecar = PlanSidecar {
            scenario: meta.scenario,
            mu_m3_s2: meta.mu_m3_s2,
            total_delta_v_m_s: meta.total_delta_v_m_s,
            hohmann_delta_v_m_s: meta.hohmann_delta_v_m_s,
            plan,
        };
        to_writer_pretty(&mut *writer, &sidecar)?;
        writeln!(writer)?;
        writer.flush()
    }

    /// Write the plan sidecar to `path` (or stdout for `-`).
    pub fn write_sidecar<P: Serialize>(
        path: &Path,
        meta: &Metadata<'_>,
        plan: &P,
    ) -> io::Result<()> {
        let mut writer = super::writer_for_path(path)?;
        write_to(writer.as_mut(), meta, plan)
    }
}
