//! Feasibility predicate and candidate filtering.

use crate::plane::{Constraint, Point, SolveCfg, FEAS_EPS};

/// `a·x + b·y <= c + FEAS_EPS` for every row. Point signs are not checked.
#[inline]
pub fn is_feasible(p: Point, constraints: &[Constraint]) -> bool {
    is_feasible_eps(p, constraints, FEAS_EPS)
}

/// Same as `is_feasible` with an explicit slack; stops at the first violated row.
#[inline]
pub fn is_feasible_eps(p: Point, constraints: &[Constraint], eps: f64) -> bool {
    constraints.iter().all(|h| h.satisfies_eps(p, eps))
}

/// Order-preserving filter of `candidates` down to the feasible ones.
pub fn feasible_points(
    candidates: &[Point],
    constraints: &[Constraint],
    cfg: SolveCfg,
) -> Vec<Point> {
    candidates
        .iter()
        .copied()
        .filter(|p| is_feasible_eps(*p, constraints, cfg.eps_feas))
        .collect()
}
