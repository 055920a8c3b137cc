//! Plane geometry for two-variable LPs.
//!
//! Purpose
//! - Hold the data model (`Constraint`, `Objective`, `Point`, `Problem`, `SolveCfg`).
//! - Enumerate candidate corner points (`generate_candidates`, `generate_tagged`).
//! - Build the clipped feasible polygon used by renderers (`feasible_region`).
//!
//! Code cross-refs: `crate::engine` consumes the candidate list.

mod region;
mod types;
mod vertices;

pub use region::{feasible_region, HalfPlaneSet, RegionShape, Window};
pub use types::{Constraint, Objective, Point, Problem, SolveCfg, FEAS_EPS};
pub use vertices::{
    generate_candidates, generate_tagged, line_intersection, Candidate, CandidateSource,
};

#[cfg(test)]
mod tests;
