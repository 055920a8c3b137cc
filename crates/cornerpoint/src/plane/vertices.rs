//! Candidate corner points (the vertex generator).
//!
//! Emission order is part of the contract, downstream ordering is stable on it:
//! 1. y-axis intercepts `(0, c/b)` for every constraint with `b != 0`, in constraint order;
//! 2. x-axis intercepts `(c/a, 0)` for every constraint with `a != 0`, in constraint order;
//! 3. the origin, exactly once;
//! 4. pairwise intersections for `i < j` in lexicographic order, kept only if both
//!    coordinates are non-negative.
//!
//! Intercepts are emitted even when negative and nothing is deduplicated.

use nalgebra::Matrix2;

use super::types::{Constraint, Point};

/// Where a candidate came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CandidateSource {
    /// `x = 0` on constraint `i`.
    YIntercept(usize),
    /// `y = 0` on constraint `i`.
    XIntercept(usize),
    Origin,
    /// Boundary lines of constraints `i < j`.
    Intersection(usize, usize),
}

/// A candidate point tagged with its source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub point: Point,
    pub source: CandidateSource,
}

/// Candidate set as plain points (same order as `generate_tagged`).
pub fn generate_candidates(constraints: &[Constraint]) -> Vec<Point> {
    generate_tagged(constraints)
        .into_iter()
        .map(|cand| cand.point)
        .collect()
}

/// Candidate set with sources.
pub fn generate_tagged(constraints: &[Constraint]) -> Vec<Candidate> {
    let n = constraints.len();
    let mut out = Vec::with_capacity(2 * n + 1 + n * n.saturating_sub(1) / 2);
    for (i, h) in constraints.iter().enumerate() {
        if h.b != 0.0 {
            out.push(Candidate {
                point: Point::new(0.0, h.c / h.b),
                source: CandidateSource::YIntercept(i),
            });
        }
    }
    for (i, h) in constraints.iter().enumerate() {
        if h.a != 0.0 {
            out.push(Candidate {
                point: Point::new(h.c / h.a, 0.0),
                source: CandidateSource::XIntercept(i),
            });
        }
    }
    out.push(Candidate {
        point: Point::zeros(),
        source: CandidateSource::Origin,
    });
    for i in 0..n {
        for j in (i + 1)..n {
            if let Some(p) = line_intersection(constraints[i], constraints[j]) {
                if p.x >= 0.0 && p.y >= 0.0 {
                    out.push(Candidate {
                        point: p,
                        source: CandidateSource::Intersection(i, j),
                    });
                }
            }
        }
    }
    tracing::debug!(
        constraints = n,
        candidates = out.len(),
        "generated candidates"
    );
    out
}

/// Intersection of the two boundary lines by Cramer's rule.
///
/// Returns `None` only for an exactly zero determinant (parallel or coincident lines).
/// No sign filter is applied here.
pub fn line_intersection(h1: Constraint, h2: Constraint) -> Option<Point> {
    let det = Matrix2::new(h1.a, h1.b, h2.a, h2.b).determinant();
    if det == 0.0 {
        return None;
    }
    let x = (h1.c * h2.b - h2.c * h1.b) / det;
    let y = (h1.a * h2.c - h2.a * h1.c) / det;
    Some(Point::new(x, y))
}
