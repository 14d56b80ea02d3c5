//! Line of intersection of two orbital planes, located on the initial orbit.

use maneuvering_core::angle::normalize;
use maneuvering_core::vector::{add, cross, dot, scale, unit};
use maneuvering_orbits::Orbit;

/// Angle from the initial periapsis direction to the line where the planes
/// meet, measured in the initial plane.
///
/// Of the two opposite node directions, the one on the side of the initial
/// ascending node is used. Coplanar orbits have no such line and yield 0.
pub fn intersection_angle(initial: &Orbit, target: &Orbit) -> f64 {
    const K: [f64; 3] = [0.0, 0.0, 1.0];
    let n1 = initial.plane_normal();
    let n2 = target.plane_normal();
    let line = cross(&n1, &n2);

    let l1 = unit(&cross(&K, &n1)).unwrap_or([1.0, 0.0, 0.0]);
    let l2 = cross(&n1, &l1);
    let (sin_w, cos_w) = initial.w.sin_cos();
    let e1 = add(&scale(&l1, cos_w), &scale(&l2, sin_w));
    let e2 = cross(&n1, &e1);

    let oriented = if dot(&line, &l1) >= 0.0 {
        line
    } else {
        scale(&line, -1.0)
    };
    let Some(node) = unit(&oriented) else {
        return 0.0;
    };
    normalize(dot(&e2, &node).atan2(dot(&e1, &node)))
}
