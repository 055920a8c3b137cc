//! Two-variable linear programs by the graphical corner-point method.
//!
//! Pipeline
//! - `plane::generate_candidates`: axis intercepts, the origin, and non-negative pairwise
//!   intersections of the constraint boundary lines.
//! - `engine::solve`: feasibility filter (`FEAS_EPS`), deterministic ordering, objective
//!   evaluation, first-maximum selection.
//!
//! The crate performs no I/O. Rendering (tables, plots) and input collection live in the CLI.

pub mod api;
pub mod engine;
pub mod plane;
pub mod random;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use engine::{solve, LpError, Solution};
pub use plane::{generate_candidates, Constraint, Objective, Point, Problem, FEAS_EPS};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::engine::{
        display_order, evaluate, is_feasible, order_points, solve, solve_with, DisplayRow,
        LpError, Solution,
    };
    pub use crate::plane::{
        feasible_region, generate_candidates, generate_tagged, Candidate, CandidateSource,
        Constraint, Objective, Point, Problem, RegionShape, SolveCfg, Window, FEAS_EPS,
    };
    pub use crate::random::{draw_problem, ProblemCfg, ReplayToken, RowCount};
}
