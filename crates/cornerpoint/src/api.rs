//! Curated surface for renderers and front ends.
//!
//! - Everything a caller needs to collect input, solve, and draw, in one import.
//! - Internal module layout may change; prefer these re-exports.

// Data model
pub use crate::plane::{Constraint, Objective, Point, Problem, SolveCfg, FEAS_EPS};
// Vertex generator
pub use crate::plane::{
    generate_candidates, generate_tagged, line_intersection, Candidate, CandidateSource,
};
// Engine
pub use crate::engine::{
    display_order, evaluate, feasible_points, is_feasible, is_feasible_eps, order_points, solve,
    solve_with, DisplayRow, Evaluation, LpError, Solution,
};
// Region polygon for plots
pub use crate::plane::{feasible_region, HalfPlaneSet, RegionShape, Window};
// Random instances
pub use crate::random::{draw_problem, GeneratorError, ProblemCfg, ReplayToken, RowCount};
