//! Feasible-region polygon for shading.
//!
//! The candidate/feasibility pipeline never needs the region as a polygon; renderers do.
//! `feasible_region` intersects the constraint half-planes with `x >= 0`, `y >= 0` and a
//! rectangular `Window`, so the result is always bounded (or empty).
//!
//! Method
//! - Normalize every row to a unit normal, keep rows sorted by normal angle, and coalesce
//!   same-direction rows to the tightest bound (`HalfPlaneSet`).
//! - Deque sweep over the sorted rows; consecutive survivors meet at the polygon's corners.
//! - Every corner is re-checked against all rows, so a sweep that collapses reports `Empty`.

use std::collections::VecDeque;

use nalgebra::Vector2;

use super::types::{Constraint, Point};

/// Normalized half-plane `n·p <= c` with `|n| = 1`.
#[derive(Clone, Copy, Debug)]
struct UnitPlane {
    n: Vector2<f64>,
    c: f64,
}

impl UnitPlane {
    #[inline]
    fn angle(&self) -> f64 {
        self.n.y.atan2(self.n.x)
    }
    #[inline]
    fn holds(&self, p: Point, eps: f64) -> bool {
        self.n.dot(&p) <= self.c + eps
    }
}

#[inline]
fn unit_plane(h: &Constraint) -> Option<UnitPlane> {
    let n = h.normal();
    let norm = n.norm();
    if !norm.is_finite() || norm <= 0.0 || !h.c.is_finite() {
        return None;
    }
    // `+ 0.0` folds -0.0 into 0.0 so atan2 keys stay in (-π, π].
    Some(UnitPlane {
        n: Vector2::new(n.x / norm + 0.0, n.y / norm + 0.0),
        c: h.c / norm,
    })
}

/// Angle-sorted set of half-planes with parallel rows coalesced.
///
/// Invariants:
/// - Sorted by `atan2(n.y, n.x)` (stable).
/// - At most one row per normal direction (the most restrictive `c`).
#[derive(Clone, Debug, Default)]
pub struct HalfPlaneSet {
    planes: Vec<UnitPlane>,
}

impl HalfPlaneSet {
    /// Insert a row; degenerate rows (`a = b = 0`) and non-finite rows are ignored.
    pub fn insert(&mut self, h: &Constraint) {
        let Some(p) = unit_plane(h) else {
            return;
        };
        let key = p.angle();
        let at = self.planes.partition_point(|q| q.angle() <= key);
        for k in [at.wrapping_sub(1), at] {
            if let Some(q) = self.planes.get_mut(k) {
                if (q.n - p.n).norm() < 1e-9 {
                    q.c = q.c.min(p.c);
                    return;
                }
            }
        }
        self.planes.insert(at, p);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    /// Membership with slack `eps`.
    pub fn contains_eps(&self, p: Point, eps: f64) -> bool {
        self.planes.iter().all(|h| h.holds(p, eps))
    }

    /// Corners of the intersection in counter-clockwise order, or `None` if it is empty
    /// or not bounded by the stored rows.
    pub fn polygon(&self, eps: f64) -> Option<Vec<Point>> {
        let hs = &self.planes;
        if hs.len() < 3 || has_opposite_contradiction(hs) {
            return None;
        }
        let meet = |i: usize, j: usize| boundary_meet(hs[i], hs[j]);
        let mut dq: VecDeque<usize> = VecDeque::with_capacity(hs.len());
        for (i, h) in hs.iter().enumerate() {
            while dq.len() >= 2 {
                let p = meet(dq[dq.len() - 2], dq[dq.len() - 1]);
                if p.is_some_and(|p| h.holds(p, eps)) {
                    break;
                }
                dq.pop_back();
            }
            while dq.len() >= 2 {
                let p = meet(dq[0], dq[1]);
                if p.is_some_and(|p| h.holds(p, eps)) {
                    break;
                }
                dq.pop_front();
            }
            dq.push_back(i);
        }
        while dq.len() >= 3 {
            let p = meet(dq[dq.len() - 2], dq[dq.len() - 1]);
            if p.is_some_and(|p| hs[dq[0]].holds(p, eps)) {
                break;
            }
            dq.pop_back();
        }
        while dq.len() >= 3 {
            let p = meet(dq[0], dq[1]);
            if p.is_some_and(|p| hs[dq[dq.len() - 1]].holds(p, eps)) {
                break;
            }
            dq.pop_front();
        }
        if dq.len() < 3 {
            return None;
        }
        let m = dq.len();
        let mut corners = Vec::with_capacity(m);
        for k in 0..m {
            corners.push(meet(dq[k], dq[(k + 1) % m])?);
        }
        let check_eps = eps.max(1e-9);
        if corners.iter().all(|p| self.contains_eps(*p, check_eps)) {
            Some(corners)
        } else {
            None
        }
    }
}

/// `n·x <= c1` and `-n·x <= c2` leave `n·x ∈ [-c2, c1]`; empty iff `-c2 > c1`.
fn has_opposite_contradiction(hs: &[UnitPlane]) -> bool {
    hs.iter().enumerate().any(|(i, h)| {
        hs[i + 1..]
            .iter()
            .any(|g| (h.n + g.n).norm() < 1e-9 && -g.c > h.c)
    })
}

fn boundary_meet(h1: UnitPlane, h2: UnitPlane) -> Option<Point> {
    let m = nalgebra::matrix![h1.n.x, h1.n.y; h2.n.x, h2.n.y];
    if m.determinant().abs() < 1e-12 {
        return None;
    }
    Some(m.try_inverse()? * Vector2::new(h1.c, h2.c))
}

/// Rectangular viewing window `[0, x_max] × [0, y_max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    pub x_max: f64,
    pub y_max: f64,
}

impl Default for Window {
    fn default() -> Self {
        Self {
            x_max: 150.0,
            y_max: 150.0,
        }
    }
}

impl Window {
    /// The four window sides, including non-negativity.
    pub fn bounds(&self) -> [Constraint; 4] {
        [
            Constraint::new(-1.0, 0.0, 0.0),
            Constraint::new(0.0, -1.0, 0.0),
            Constraint::new(1.0, 0.0, self.x_max),
            Constraint::new(0.0, 1.0, self.y_max),
        ]
    }
}

/// Feasible region clipped to a window.
#[derive(Clone, Debug, PartialEq)]
pub enum RegionShape {
    Empty,
    /// Corners in counter-clockwise order.
    Polygon(Vec<Point>),
}

impl RegionShape {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, RegionShape::Empty)
    }

    #[inline]
    pub fn corners(&self) -> &[Point] {
        match self {
            RegionShape::Empty => &[],
            RegionShape::Polygon(v) => v,
        }
    }

    /// Shoelace area (0 for `Empty`).
    pub fn area(&self) -> f64 {
        let v = self.corners();
        if v.len() < 3 {
            return 0.0;
        }
        let twice: f64 = (0..v.len())
            .map(|i| {
                let p = v[i];
                let q = v[(i + 1) % v.len()];
                p.x * q.y - q.x * p.y
            })
            .sum();
        0.5 * twice.abs()
    }
}

/// Intersect `constraints` with non-negativity and `window`.
pub fn feasible_region(constraints: &[Constraint], window: Window) -> RegionShape {
    let mut set = HalfPlaneSet::default();
    for h in constraints.iter().chain(window.bounds().iter()) {
        set.insert(h);
    }
    match set.polygon(0.0) {
        Some(corners) => RegionShape::Polygon(corners),
        None => RegionShape::Empty,
    }
}
