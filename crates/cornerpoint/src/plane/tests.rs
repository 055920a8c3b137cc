use super::*;
use nalgebra::vector;
use proptest::prelude::*;

fn pts(v: &[(f64, f64)]) -> Vec<Point> {
    v.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn no_constraints_yields_origin_only() {
    assert_eq!(generate_candidates(&[]), pts(&[(0.0, 0.0)]));
}

#[test]
fn single_constraint_intercepts_then_origin() {
    let cs = [Constraint::new(1.0, 1.0, 10.0)];
    assert_eq!(
        generate_candidates(&cs),
        pts(&[(0.0, 10.0), (10.0, 0.0), (0.0, 0.0)])
    );
}

#[test]
fn emission_order_and_sources() {
    let cs = [
        Constraint::new(1.0, 2.0, 14.0),
        Constraint::new(3.0, -1.0, 0.0),
        Constraint::new(1.0, -1.0, 2.0),
    ];
    let tagged = generate_tagged(&cs);
    let sources: Vec<_> = tagged.iter().map(|c| c.source).collect();
    assert_eq!(
        sources,
        vec![
            CandidateSource::YIntercept(0),
            CandidateSource::YIntercept(1),
            CandidateSource::YIntercept(2),
            CandidateSource::XIntercept(0),
            CandidateSource::XIntercept(1),
            CandidateSource::XIntercept(2),
            CandidateSource::Origin,
            CandidateSource::Intersection(0, 1),
            CandidateSource::Intersection(0, 2),
        ]
    );
    // (1,2) meets at x = -1 and is dropped; intercept (0,-2) is kept although negative.
    let points: Vec<Point> = tagged.iter().map(|c| c.point).collect();
    assert_eq!(points[2], vector![0.0, -2.0]);
    assert!((points[7] - vector![2.0, 6.0]).norm() < 1e-12);
    assert!((points[8] - vector![6.0, 4.0]).norm() < 1e-12);
    assert_eq!(points, generate_candidates(&cs));
}

#[test]
fn parallel_rows_emit_no_intersection() {
    let cs = [
        Constraint::new(1.0, 1.0, 10.0),
        Constraint::new(2.0, 2.0, 5.0),
    ];
    let tagged = generate_tagged(&cs);
    assert_eq!(tagged.len(), 5);
    assert!(tagged
        .iter()
        .all(|c| !matches!(c.source, CandidateSource::Intersection(..))));
    assert!(line_intersection(cs[0], cs[1]).is_none());
}

#[test]
fn axis_parallel_rows_skip_undefined_intercepts() {
    // x <= 4 has no y-intercept, y <= 3 has no x-intercept.
    let cs = [Constraint::new(1.0, 0.0, 4.0), Constraint::new(0.0, 1.0, 3.0)];
    assert_eq!(
        generate_candidates(&cs),
        pts(&[(0.0, 3.0), (4.0, 0.0), (0.0, 0.0), (4.0, 3.0)])
    );
}

#[test]
fn duplicates_are_kept() {
    let cs = [Constraint::new(1.0, 1.0, 5.0), Constraint::new(2.0, 1.0, 5.0)];
    let cands = generate_candidates(&cs);
    let hits = cands.iter().filter(|p| **p == vector![0.0, 5.0]).count();
    // both y-intercepts plus the pairwise intersection
    assert_eq!(hits, 3);
}

#[test]
fn constraint_and_objective_helpers() {
    let h = Constraint::from((3.0, 2.0, 12.0));
    assert_eq!(h.normal(), vector![3.0, 2.0]);
    assert_eq!(h.lhs(vector![2.0, 3.0]), 12.0);
    assert!(h.satisfies_eps(vector![2.0, 3.0], 0.0));
    assert!(!h.satisfies_eps(vector![2.0, 3.1], FEAS_EPS));
    assert!(Constraint::new(0.0, 0.0, 1.0).is_degenerate());
    let z = Objective::new(3.0, 2.0);
    assert_eq!(z.eval(vector![10.0, 0.0]), 30.0);
    assert!(Objective::new(0.0, 0.0).is_flat());
    assert_eq!(SolveCfg::default().eps_feas, 1e-10);
}

#[test]
fn region_triangle_inside_window() {
    let shape = feasible_region(&[Constraint::new(1.0, 1.0, 10.0)], Window::default());
    let corners = shape.corners();
    assert_eq!(corners.len(), 3);
    for want in [vector![0.0, 0.0], vector![10.0, 0.0], vector![0.0, 10.0]] {
        assert!(corners.iter().any(|p| (p - want).norm() < 1e-9));
    }
    assert!((shape.area() - 50.0).abs() < 1e-9);
}

#[test]
fn region_without_constraints_is_the_window() {
    let shape = feasible_region(&[], Window::default());
    assert!((shape.area() - 150.0 * 150.0).abs() < 1e-6);
}

#[test]
fn region_empty_when_rows_contradict() {
    // x >= 1 and x <= 0
    let cs = [Constraint::new(-1.0, 0.0, -1.0), Constraint::new(1.0, 0.0, 0.0)];
    assert!(feasible_region(&cs, Window::default()).is_empty());
    // x + y <= -1 misses the first quadrant
    let cs = [Constraint::new(1.0, 1.0, -1.0)];
    assert!(feasible_region(&cs, Window::default()).is_empty());
}

#[test]
fn half_plane_set_coalesces_parallels_and_ignores_degenerate() {
    let mut set = HalfPlaneSet::default();
    set.insert(&Constraint::new(1.0, 1.0, 10.0));
    set.insert(&Constraint::new(2.0, 2.0, 5.0));
    set.insert(&Constraint::new(0.0, 0.0, 1.0));
    assert_eq!(set.len(), 1);
    assert!(set.contains_eps(vector![1.0, 1.0], 0.0));
    assert!(!set.contains_eps(vector![2.0, 1.0], 0.0));
}

#[test]
fn region_textbook_quadrilateral() {
    let cs = [
        Constraint::new(1.0, 2.0, 14.0),
        Constraint::new(3.0, -1.0, 0.0),
        Constraint::new(1.0, -1.0, 2.0),
    ];
    // Within x,y >= 0 the rows cut out the triangle (0,0), (2,6), (0,7).
    let shape = feasible_region(&cs, Window::default());
    assert!((shape.area() - 7.0).abs() < 1e-9);
}

fn coeff() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), -10.0..10.0f64]
}

proptest! {
    #[test]
    fn origin_emitted_exactly_once(
        rows in prop::collection::vec((coeff(), coeff(), 1.0..50.0f64), 0..8)
    ) {
        let cs: Vec<Constraint> = rows.into_iter().map(Constraint::from).collect();
        let tagged = generate_tagged(&cs);
        let origins = tagged.iter().filter(|c| c.source == CandidateSource::Origin).count();
        prop_assert_eq!(origins, 1);
        let pairs = tagged.iter().filter(|c| matches!(c.source, CandidateSource::Intersection(..)));
        for c in pairs {
            prop_assert!(c.point.x >= 0.0 && c.point.y >= 0.0);
        }
    }

    #[test]
    fn intersection_lies_on_both_lines(
        (a1, b1, c1) in (-10.0..10.0f64, -10.0..10.0f64, -20.0..20.0f64),
        (a2, b2, c2) in (-10.0..10.0f64, -10.0..10.0f64, -20.0..20.0f64),
    ) {
        let h1 = Constraint::new(a1, b1, c1);
        let h2 = Constraint::new(a2, b2, c2);
        let det = a1 * b2 - a2 * b1;
        prop_assume!(det.abs() > 1e-3);
        let p = line_intersection(h1, h2).unwrap();
        let scale = 1.0 + p.norm();
        prop_assert!((h1.lhs(p) - c1).abs() <= 1e-9 * scale * 20.0);
        prop_assert!((h2.lhs(p) - c2).abs() <= 1e-9 * scale * 20.0);
    }
}
