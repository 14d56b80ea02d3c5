use orbit_maneuvering::orbits::{Orbit, OrientedOrbit, orbit_distance};
use orbit_maneuvering::shared::angle::normalize;
use orbit_maneuvering::shared::constants::DEG;
use orbit_maneuvering::transfer::{
    DEFAULT_STEP, ExecuteError, PointKind, execute, execute_batch, plan,
};
use rstest::rstest;

const MU: f64 = 3.986_004_415_8e14;

/// Start on the line of nodes of `orbit` (true latitude zero).
fn at_node(orbit: Orbit) -> OrientedOrbit {
    OrientedOrbit::from_true(orbit, normalize(-orbit.w))
}

#[rstest]
#[case::coplanar(
    Orbit::new(6_566e3, 0.00228, 20.0 * DEG, 0.0, 0.0).unwrap(),
    Orbit::new(6_721e3, 0.00149, 150.0 * DEG, 0.0, 0.0).unwrap(),
)]
#[case::nodal(
    Orbit::new(7_000e3, 0.00228, 20.0 * DEG, 10.0 * DEG, 130.0 * DEG).unwrap(),
    Orbit::new(7_010e3, 0.00149, 150.0 * DEG, 15.0 * DEG, 130.0 * DEG).unwrap(),
)]
#[case::singular(
    Orbit::new(7_000e3, 0.00228, 90.0 * DEG, 10.0 * DEG, 130.0 * DEG).unwrap(),
    Orbit::new(7_010e3, 0.09149, 90.0 * DEG, 12.0 * DEG, 130.0 * DEG).unwrap(),
)]
fn batch_final_state_matches_execute(#[case] initial: Orbit, #[case] target: Orbit) {
    let transfer = plan(&initial, &target, MU).expect("plan");
    let start = at_node(initial);

    let direct = execute(&start, &transfer.maneuvers, MU).expect("execute");
    for step in [DEFAULT_STEP, 3.0 * DEG, 0.1] {
        let trajectory = execute_batch(&start, &transfer.maneuvers, step, MU).expect("batch");
        assert_eq!(trajectory.final_state(), Some(&direct));
        assert_eq!(trajectory.start(), Some(&start.to_true()));
        assert!(
            trajectory
                .swept_angles()
                .collect::<Vec<_>>()
                .windows(2)
                .all(|w| w[0] <= w[1])
        );
        let impulses = trajectory
            .points
            .iter()
            .filter(|p| matches!(p.kind, PointKind::AfterImpulse(_)))
            .count();
        assert_eq!(impulses, transfer.maneuvers.len());
    }
}

#[test]
fn small_plane_change_lands_near_target() {
    // periapsis on the node line: solver angles and true latitudes share an origin
    let initial = Orbit::new(7_000e3, 0.001, 0.0, 10.0 * DEG, 40.0 * DEG).unwrap();
    let target = Orbit::new(7_005e3, 0.0012, 60.0 * DEG, 10.5 * DEG, 40.0 * DEG).unwrap();

    let transfer = plan(&initial, &target, MU).expect("plan");
    let arrived = execute(&at_node(initial), &transfer.maneuvers, MU).expect("execute");

    let before = orbit_distance(&initial, &target);
    let after = orbit_distance(&arrived.orbit, &target);
    assert!(after < before / 20.0, "before {before} m, after {after} m");
}

#[test]
fn coast_samples_are_evenly_spaced() {
    let initial = Orbit::new(6_800e3, 0.0, 0.0, 0.0, 0.0).unwrap();
    let target = Orbit::new(6_805e3, 0.0, 0.0, 0.0, 0.0).unwrap();
    let transfer = plan(&initial, &target, MU).expect("plan");

    let step = 7.0 * DEG;
    let trajectory =
        execute_batch(&at_node(initial), &transfer.maneuvers, step, MU).expect("batch");
    let coast: Vec<f64> = trajectory
        .points
        .iter()
        .filter(|p| p.kind == PointKind::Coast)
        .map(|p| p.swept)
        .collect();
    // impulses at 0 and 180 degrees: one half-turn coast sampled every seven degrees
    assert_eq!(coast.len(), 25);
    for pair in coast.windows(2) {
        assert!((pair[1] - pair[0] - step).abs() < 1e-12);
    }
    assert!((trajectory.total_swept() - 180.0 * DEG).abs() < 1e-12);
}

#[test]
fn planned_maneuvers_behind_the_start_are_rejected() {
    let initial = Orbit::new(6_566e3, 0.00228, 20.0 * DEG, 0.0, 0.0).unwrap();
    let target = Orbit::new(6_721e3, 0.00149, 150.0 * DEG, 0.0, 0.0).unwrap();
    let transfer = plan(&initial, &target, MU).expect("plan");

    let past_first = transfer.maneuvers[0].angle + 10.0 * DEG;
    let start = OrientedOrbit::from_true(initial, normalize(past_first - initial.w));
    assert!(matches!(
        execute(&start, &transfer.maneuvers, MU),
        Err(ExecuteError::BehindStart { .. })
    ));
}
