//! Basic plane types for the corner-point method.
//!
//! - `Constraint`: closed half-plane `a·x1 + b·x2 <= c` (coefficients as given, no normalization).
//! - `Objective`: linear functional `obj_a·x1 + obj_b·x2` to be maximized.
//! - `SolveCfg`: centralizes the feasibility tolerance.
//! - `Problem`: one objective plus its constraint list, as read from a caller.
//!
//! Code cross-refs: `vertices::generate_candidates`, `crate::engine::solve`

use nalgebra::Vector2;

/// A point in the x1–x2 plane. Points are plain values; equality is coordinate equality.
pub type Point = Vector2<f64>;

/// Feasibility slack used by `is_feasible`: a point passes `a·x + b·y <= c + FEAS_EPS`.
pub const FEAS_EPS: f64 = 1e-10;

/// Solver configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolveCfg {
    pub eps_feas: f64,
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self { eps_feas: FEAS_EPS }
    }
}

/// Closed half-plane `a·x1 + b·x2 <= c`.
///
/// Invariants:
/// - At least one of `a`, `b` is nonzero. This is the caller's job; the core never checks it.
/// - Immutable for the duration of one solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraint {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Constraint {
    #[inline]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }
    /// Coefficient vector `(a, b)`.
    #[inline]
    pub fn normal(&self) -> Vector2<f64> {
        Vector2::new(self.a, self.b)
    }
    /// Left-hand side `a·x + b·y` at `p`.
    #[inline]
    pub fn lhs(&self, p: Point) -> f64 {
        self.a * p.x + self.b * p.y
    }
    #[inline]
    pub fn satisfies_eps(&self, p: Point, eps: f64) -> bool {
        self.lhs(p) <= self.c + eps
    }
    /// `a = b = 0`: the row says nothing about the plane.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == 0.0 && self.b == 0.0
    }
}

impl From<(f64, f64, f64)> for Constraint {
    fn from((a, b, c): (f64, f64, f64)) -> Self {
        Self::new(a, b, c)
    }
}

/// Linear objective `Z(p) = a·x + b·y` (maximized).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Objective {
    pub a: f64,
    pub b: f64,
}

impl Objective {
    #[inline]
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }
    #[inline]
    pub fn eval(&self, p: Point) -> f64 {
        self.a * p.x + self.b * p.y
    }
    /// Both coefficients zero: every point evaluates to 0.
    #[inline]
    pub fn is_flat(&self) -> bool {
        self.a == 0.0 && self.b == 0.0
    }
}

/// One LP instance: maximize `objective` subject to `constraints` (and implicit x1,x2 >= 0).
#[derive(Clone, Debug, PartialEq)]
pub struct Problem {
    pub objective: Objective,
    pub constraints: Vec<Constraint>,
}

impl Problem {
    pub fn new(objective: Objective, constraints: Vec<Constraint>) -> Self {
        Self {
            objective,
            constraints,
        }
    }
}
