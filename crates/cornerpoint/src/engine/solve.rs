//! Objective evaluation and the end-to-end solve.

use crate::plane::{generate_candidates, Constraint, Objective, Point, Problem, SolveCfg};

use super::feasibility::feasible_points;
use super::ordering::{display_order, order_points};

/// Solve failures surfaced to callers. Geometric degeneracies are not errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LpError {
    /// No candidate satisfies every constraint.
    #[error("no feasible solution: every candidate corner point violates a constraint")]
    NoFeasibleSolution,
}

/// Objective values over an ordered point list plus the selected optimum.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub values: Vec<f64>,
    /// Position of the optimum in the evaluated list.
    pub optimal_index: usize,
    pub optimal_point: Point,
    pub optimal_value: f64,
}

/// Evaluate `objective` along `ordered`; the first point reaching the maximum wins.
pub fn evaluate(ordered: &[Point], objective: &Objective) -> Result<Evaluation, LpError> {
    let values: Vec<f64> = ordered.iter().map(|p| objective.eval(*p)).collect();
    let mut best: Option<(usize, f64)> = None;
    for (i, &val) in values.iter().enumerate() {
        if best.is_none_or(|(_, v)| val > v) {
            best = Some((i, val));
        }
    }
    let (optimal_index, optimal_value) = best.ok_or(LpError::NoFeasibleSolution)?;
    Ok(Evaluation {
        optimal_point: ordered[optimal_index],
        optimal_index,
        optimal_value,
        values,
    })
}

/// One row of the derivation table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayRow {
    pub point: Point,
    pub value: f64,
}

/// Result of one corner-point solve.
///
/// Invariants:
/// - `ordered_feasible` is sorted by `order_points`; `values[i]` belongs to `ordered_feasible[i]`.
/// - `optimal_point == ordered_feasible[optimal_index]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    pub objective: Objective,
    /// Full candidate multiset in generation order.
    pub candidates: Vec<Point>,
    /// Feasible candidates in generation order (what a plot scatters).
    pub feasible: Vec<Point>,
    pub ordered_feasible: Vec<Point>,
    pub values: Vec<f64>,
    pub optimal_index: usize,
    pub optimal_point: Point,
    pub optimal_value: f64,
}

impl Solution {
    /// Rows in table order (`display_order`), each with its objective value.
    pub fn display_rows(&self) -> Vec<DisplayRow> {
        display_order(&self.ordered_feasible)
            .into_iter()
            .map(|point| DisplayRow {
                point,
                value: self.objective.eval(point),
            })
            .collect()
    }
}

/// Solve with the default tolerance.
pub fn solve(constraints: &[Constraint], obj_a: f64, obj_b: f64) -> Result<Solution, LpError> {
    solve_with(constraints, Objective::new(obj_a, obj_b), SolveCfg::default())
}

/// Generate, filter, order, evaluate.
pub fn solve_with(
    constraints: &[Constraint],
    objective: Objective,
    cfg: SolveCfg,
) -> Result<Solution, LpError> {
    let candidates = generate_candidates(constraints);
    let feasible = feasible_points(&candidates, constraints, cfg);
    tracing::debug!(
        candidates = candidates.len(),
        feasible = feasible.len(),
        eps = cfg.eps_feas,
        "filtered candidates"
    );
    let ordered_feasible = order_points(&feasible);
    let eval = evaluate(&ordered_feasible, &objective)?;
    tracing::debug!(
        x = eval.optimal_point.x,
        y = eval.optimal_point.y,
        value = eval.optimal_value,
        "optimum"
    );
    Ok(Solution {
        objective,
        candidates,
        feasible,
        ordered_feasible,
        values: eval.values,
        optimal_index: eval.optimal_index,
        optimal_point: eval.optimal_point,
        optimal_value: eval.optimal_value,
    })
}

impl Problem {
    #[inline]
    pub fn solve(&self) -> Result<Solution, LpError> {
        self.solve_with(SolveCfg::default())
    }

    #[inline]
    pub fn solve_with(&self, cfg: SolveCfg) -> Result<Solution, LpError> {
        solve_with(&self.constraints, self.objective, cfg)
    }
}
