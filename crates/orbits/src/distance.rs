//! Distance between two unoriented elliptic orbits (Kholshevnikov metric).
//!
//! The metric treats orbits as points of a five-dimensional space; it is zero
//! only for identical orbits and is expressed in metres.

use maneuvering_core::vector::{dot, scale};

use crate::elements::Orbit;

/// Orbit-to-orbit distance in metres.
pub fn orbit_distance(o1: &Orbit, o2: &Orbit) -> f64 {
    let (p1, q1) = o1.perifocal_basis();
    let (p2, q2) = o2.perifocal_basis();

    let s1 = scale(&q1, (1.0 - o1.e * o1.e).sqrt());
    let s2 = scale(&q2, (1.0 - o2.e * o2.e).sqrt());

    let alpha1 = o1.a / o2.a;
    let alpha2 = o2.a / o1.a;

    let p1p2 = dot(&p1, &p2);
    let p1s2 = dot(&p1, &s2);
    let p2s1 = dot(&p2, &s1);
    let s1s2 = dot(&s1, &s2);

    let w0 = (2.0 * (alpha1 + alpha2) + alpha1 * o1.e * o1.e + alpha2 * o2.e * o2.e
        - 4.0 * p1p2 * o1.e * o2.e)
        / 4.0;
    let w5 = -p1p2 / 2.0;
    let w6 = -p1s2 / 2.0;
    let w7 = -p2s1 / 2.0;
    let w8 = -s1s2 / 2.0;

    let inner = w0 - ((w5 + w8).powi(2) + (w6 - w7).powi(2)).sqrt();
    (2.0 * o1.a * o2.a * inner.max(0.0)).sqrt()
}
