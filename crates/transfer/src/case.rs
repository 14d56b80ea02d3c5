//! Transfer case classification.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoplanarCase {
    /// Orbits coincide; nothing to do.
    Coincident,
    /// The orbits cross (|Δe| > |Δa|).
    Intersecting,
    /// One orbit lies inside the other.
    NonIntersecting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodalCase {
    WithoutEx,
    WithEx,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateCase {
    WithoutE,
    WithoutEy,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "variant", rename_all = "snake_case")]
pub enum NoncoplanarCase {
    /// Both impulses on the line of nodes.
    Nodal(NodalCase),
    Degenerate(DegenerateCase),
    /// Three impulses from a minimum-norm least-squares solve.
    Singular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "plane", content = "case", rename_all = "snake_case")]
pub enum TransferCase {
    Coplanar(CoplanarCase),
    Noncoplanar(NoncoplanarCase),
}

impl fmt::Display for CoplanarCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CoplanarCase::Coincident => "coincident",
            CoplanarCase::Intersecting => "intersecting",
            CoplanarCase::NonIntersecting => "non-intersecting",
        })
    }
}

impl fmt::Display for NoncoplanarCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoncoplanarCase::Nodal(NodalCase::WithoutEx) => f.write_str("nodal (ex = 0)"),
            NoncoplanarCase::Nodal(NodalCase::WithEx) => f.write_str("nodal"),
            NoncoplanarCase::Degenerate(DegenerateCase::WithoutE) => {
                f.write_str("degenerate (e = 0)")
            }
            NoncoplanarCase::Degenerate(DegenerateCase::WithoutEy) => {
                f.write_str("degenerate (ey = 0)")
            }
            NoncoplanarCase::Degenerate(DegenerateCase::General) => f.write_str("degenerate"),
            NoncoplanarCase::Singular => f.write_str("singular"),
        }
    }
}

impl fmt::Display for TransferCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferCase::Coplanar(case) => write!(f, "coplanar, {case}"),
            TransferCase::Noncoplanar(case) => write!(f, "non-coplanar, {case}"),
        }
    }
}
