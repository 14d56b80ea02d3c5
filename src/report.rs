//! Glue between executed trajectories and the export records.

use maneuvering_core::units::rad_to_deg;
use maneuvering_export::trajectory::Record;
use maneuvering_orbits::to_cartesian;
use maneuvering_transfer::Trajectory;

/// One CSV record per trajectory point, with Cartesian state attached.
pub fn trajectory_records(trajectory: &Trajectory, mu: f64) -> Vec<Record<'static>> {
    trajectory
        .points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let orbit = &point.state.orbit;
            let cart = to_cartesian(&point.state, mu);
            Record {
                index,
                kind: point.kind.label(),
                maneuver: point.kind.maneuver_index(),
                swept_deg: rad_to_deg(point.swept),
                a_m: orbit.a,
                e: orbit.e,
                i_deg: rad_to_deg(orbit.i),
                raan_deg: rad_to_deg(orbit.raan),
                w_deg: rad_to_deg(orbit.w),
                nu_deg: rad_to_deg(point.state.true_anomaly()),
                u_deg: rad_to_deg(point.state.true_latitude()),
                position_m: cart.r,
                velocity_m_s: cart.v,
            }
        })
        .collect()
}
