//! Feasibility & optimization engine.
//!
//! Pipeline (`solve`): candidates → `feasible_points` → `order_points` → `evaluate`.
//! The cosmetic `display_order` is applied only by `Solution::display_rows`, never
//! before the optimum is selected.
//!
//! Code cross-refs: `crate::plane::generate_candidates`, `crate::plane::FEAS_EPS`

mod feasibility;
mod ordering;
mod solve;

pub use feasibility::{feasible_points, is_feasible, is_feasible_eps};
pub use ordering::{display_order, order_points};
pub use solve::{evaluate, solve, solve_with, DisplayRow, Evaluation, LpError, Solution};
