//! Deterministic corner ordering.
//!
//! - `order_points`: the mathematical order used for evaluation (y descending, then x ascending).
//! - `display_order`: table layout only; moves the origin to the third row.

use std::cmp::Ordering;

use crate::plane::Point;

/// Stable sort by descending y, ties by ascending x.
pub fn order_points(points: &[Point]) -> Vec<Point> {
    let mut out = points.to_vec();
    out.sort_by(|p, q| {
        q.y.partial_cmp(&p.y)
            .unwrap_or(Ordering::Equal)
            .then_with(|| p.x.partial_cmp(&q.x).unwrap_or(Ordering::Equal))
    });
    out
}

#[inline]
fn is_origin(p: &Point) -> bool {
    p.x == 0.0 && p.y == 0.0
}

/// Rearrange an `order_points` result for the derivation table.
///
/// With the origin present and at least two other points the rows become
/// `[first two others, origin, remaining others]`; every origin copy collapses into
/// that single row. Otherwise `sorted` is returned unchanged.
pub fn display_order(sorted: &[Point]) -> Vec<Point> {
    let mut origin: Option<Point> = None;
    let mut others: Vec<Point> = Vec::with_capacity(sorted.len());
    for p in sorted {
        if is_origin(p) {
            origin = Some(*p);
        } else {
            others.push(*p);
        }
    }
    match origin {
        Some(o) if others.len() >= 2 => {
            let mut out = Vec::with_capacity(others.len() + 1);
            out.extend_from_slice(&others[..2]);
            out.push(o);
            out.extend_from_slice(&others[2..]);
            out
        }
        _ => sorted.to_vec(),
    }
}
