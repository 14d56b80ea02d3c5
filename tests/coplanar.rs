use orbit_maneuvering::orbits::Orbit;
use orbit_maneuvering::shared::constants::{DEG, TOLERANCE};
use orbit_maneuvering::transfer::{CoplanarCase, TransferCase, plan, plan_transition, reference_orbit};

const MU: f64 = 3.986_004_415_8e14;

fn orbit(a: f64, e: f64, w_deg: f64, raan_deg: f64) -> Orbit {
    Orbit::new(a, e, w_deg * DEG, 0.0, raan_deg * DEG).expect("valid orbit")
}

#[test]
fn baranov_textbook_example() {
    let initial = orbit(6_566_000.0, 0.00228, 20.0, 0.0);
    let target = orbit(6_721_000.0, 0.00149, 150.0, 0.0);

    let maneuvers = plan_transition(&initial, &target, MU).expect("plan");
    assert_eq!(maneuvers.len(), 2);
    assert!((maneuvers[0].tangential() - 51.8327).abs() < 1e-2);
    assert!((maneuvers[1].tangential() - 38.5273).abs() < 1e-2);
}

#[test]
fn coincident_orbits_need_no_maneuvers() {
    let o = orbit(7_000_000.0, 0.00228, 20.0, 0.0);
    let transfer = plan(&o, &o, MU).expect("plan");
    assert_eq!(transfer.case, TransferCase::Coplanar(CoplanarCase::Coincident));
    assert!(transfer.is_empty());
    assert_eq!(transfer.total_delta_v(), 0.0);
}

#[test]
fn non_intersecting_reference_values() {
    let initial = orbit(6_566_000.0, 0.00228, 20.0, 130.0);
    let target = orbit(6_721_000.0, 0.00149, 150.0, 130.0);

    let transfer = plan(&initial, &target, MU).expect("plan");
    assert_eq!(
        transfer.case,
        TransferCase::Coplanar(CoplanarCase::NonIntersecting)
    );
    let m = &transfer.maneuvers;
    assert_eq!(m.len(), 2);

    assert!((m[0].angle - 2.802_665_451_883_477).abs() < TOLERANCE);
    assert!((m[0].tangential() - 51.827_889_726_288_454).abs() < 1e-5);
    assert!((m[1].angle - 5.944_258_105_473_271).abs() < TOLERANCE);
    assert!((m[1].tangential() - 38.531_890_667_257_72).abs() < 1e-5);
    for maneuver in m {
        assert!(maneuver.radial().abs() < TOLERANCE);
        assert!(maneuver.normal().abs() < TOLERANCE);
    }

    // the optimal cost equals the semi-major axis term alone
    let reference = reference_orbit(&initial, &target, MU);
    let expected = (target.a - initial.a) / reference.r / 2.0 * reference.v;
    let sum = m[0].tangential().abs() + m[1].tangential().abs();
    assert!((sum - expected).abs() < 1e-9, "{sum} vs {expected}");
}

#[test]
fn intersecting_reference_values() {
    let initial = orbit(6_566_000.0, 0.00228, 20.0, 130.0);
    let target = orbit(6_576_000.0, 0.00149, 150.0, 130.0);

    let transfer = plan(&initial, &target, MU).expect("plan");
    assert_eq!(
        transfer.case,
        TransferCase::Coplanar(CoplanarCase::Intersecting)
    );
    let m = &transfer.maneuvers;
    assert_eq!(m.len(), 2);

    assert!((m[0].angle - 2.802_665_451_883_477).abs() < TOLERANCE);
    assert!((m[0].tangential() - 9.647_778_589_385_206).abs() < 1e-5);
    assert!((m[1].angle - 5.944_258_105_473_271).abs() < TOLERANCE);
    assert!((m[1].tangential() + 3.721_368_816_791_472).abs() < 1e-5);

    // the optimal cost equals half the eccentricity-vector change
    let reference = reference_orbit(&initial, &target, MU);
    let dex = target.e * target.w.cos() - initial.e * initial.w.cos();
    let dey = target.e * target.w.sin() - initial.e * initial.w.sin();
    let expected = dex.hypot(dey) / 2.0 * reference.v;
    let sum = m[0].tangential().abs() + m[1].tangential().abs();
    assert!((sum - expected).abs() < 1e-9, "{sum} vs {expected}");
}

#[test]
fn lowering_mirrors_raising() {
    let low = orbit(6_800_000.0, 0.0, 0.0, 0.0);
    let high = orbit(6_810_000.0, 0.0, 0.0, 0.0);

    let up = plan(&low, &high, MU).expect("plan up");
    let down = plan(&high, &low, MU).expect("plan down");
    assert!((up.total_delta_v() - down.total_delta_v()).abs() < 1e-9);
    assert!(up.maneuvers.iter().all(|m| m.tangential() > 0.0));
    assert!(down.maneuvers.iter().all(|m| m.tangential() < 0.0));
}
