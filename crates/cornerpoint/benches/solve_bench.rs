//! Criterion benchmarks for the corner-point pipeline.
//! Focus sizes: m in {0, 5, 10, 20, 50} constraints (O(m²) candidates).

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use cornerpoint::api::{
    draw_problem, feasible_region, generate_candidates, Problem, ProblemCfg, ReplayToken,
    RowCount, Window,
};

fn random_problem(m: usize, seed: u64) -> Problem {
    let cfg = ProblemCfg {
        rows: RowCount::Fixed(m),
        decimals: None,
        ..ProblemCfg::default()
    };
    draw_problem(cfg, ReplayToken { seed, index: m as u64 }).expect("valid default cfg")
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("corner_point");
    for &m in &[0usize, 5, 10, 20, 50] {
        group.bench_with_input(BenchmarkId::new("generate_candidates", m), &m, |b, &m| {
            b.iter_batched(
                || random_problem(m, 43),
                |p| {
                    let _cands = generate_candidates(&p.constraints);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("solve", m), &m, |b, &m| {
            b.iter_batched(
                || random_problem(m, 44),
                |p| {
                    let _sol = p.solve();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("feasible_region", m), &m, |b, &m| {
            b.iter_batched(
                || random_problem(m, 45),
                |p| {
                    let _shape = feasible_region(&p.constraints, Window::default());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
