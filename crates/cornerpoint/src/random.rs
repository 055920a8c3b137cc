//! Random LP instances (replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of two-variable problems for benches,
//!   smoke tests and the `random` CLI subcommand.
//!
//! Model
//! - Constraint count from `RowCount`; coefficients uniform in `coef_range`, with a chance
//!   of zeroing one coefficient (axis-parallel rows); right-hand sides uniform in `rhs_range`.
//! - Objective coefficients uniform in `objective_range`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::plane::{Constraint, Objective, Problem};

/// Invalid sampler parameters.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GeneratorError {
    #[error("invalid generator params: {reason}")]
    InvalidParams { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

/// Constraint count distribution.
#[derive(Clone, Copy, Debug)]
pub enum RowCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl RowCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            RowCount::Fixed(n) => n,
            RowCount::Uniform { min, max } => rng.gen_range(min..=max.max(min)),
        }
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct ProblemCfg {
    pub rows: RowCount,
    /// Coefficients `a`, `b` are drawn from `[lo, hi)`.
    pub coef_range: (f64, f64),
    /// Probability that one of `a`, `b` is replaced by zero.
    pub axis_parallel_prob: f64,
    pub rhs_range: (f64, f64),
    pub objective_range: (f64, f64),
    /// Round every drawn number to this many decimals (`None` keeps full precision).
    pub decimals: Option<u32>,
}

impl Default for ProblemCfg {
    fn default() -> Self {
        Self {
            rows: RowCount::Uniform { min: 2, max: 5 },
            coef_range: (1.0, 10.0),
            axis_parallel_prob: 0.15,
            rhs_range: (10.0, 100.0),
            objective_range: (1.0, 50.0),
            decimals: Some(0),
        }
    }
}

impl ProblemCfg {
    fn validate(&self) -> Result<(), GeneratorError> {
        for (name, (lo, hi)) in [
            ("coef_range", self.coef_range),
            ("rhs_range", self.rhs_range),
            ("objective_range", self.objective_range),
        ] {
            if !(lo.is_finite() && hi.is_finite()) || lo >= hi {
                return Err(GeneratorError::invalid(format!(
                    "{name} must be a finite, non-empty interval (got [{lo}, {hi}))"
                )));
            }
        }
        if self.coef_range.0 <= 0.0 && self.coef_range.1 > 0.0 && self.decimals.is_some() {
            // Rounding could turn a row into a = b = 0.
            return Err(GeneratorError::invalid(
                "coef_range must not straddle zero when rounding is enabled",
            ));
        }
        if let Some(d) = self.decimals {
            let (lo, hi) = self.coef_range;
            if lo.abs().max(hi.abs()) <= 0.5 * 10f64.powi(-(d as i32)) {
                return Err(GeneratorError::invalid(format!(
                    "coef_range [{lo}, {hi}) rounds to zero at {d} decimals"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.axis_parallel_prob) {
            return Err(GeneratorError::invalid("axis_parallel_prob must lie in [0, 1]"));
        }
        if let RowCount::Uniform { min, max } = self.rows {
            if min > max {
                return Err(GeneratorError::invalid("rows: min > max"));
            }
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Redraw budget for rows that come out as `a = b = 0`.
const MAX_ATTEMPTS_PER_ROW: usize = 1000;

fn round_to(x: f64, decimals: Option<u32>) -> f64 {
    match decimals {
        Some(d) => {
            let s = 10f64.powi(d as i32);
            (x * s).round() / s
        }
        None => x,
    }
}

/// Draw one problem. Rows never have `a = b = 0`.
pub fn draw_problem(cfg: ProblemCfg, tok: ReplayToken) -> Result<Problem, GeneratorError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let (clo, chi) = cfg.coef_range;
    let (rlo, rhi) = cfg.rhs_range;
    let (olo, ohi) = cfg.objective_range;
    let m = cfg.rows.sample(&mut rng);
    let mut constraints = Vec::with_capacity(m);
    let mut attempts = 0usize;
    while constraints.len() < m {
        attempts += 1;
        if attempts > MAX_ATTEMPTS_PER_ROW * m {
            return Err(GeneratorError::invalid(format!(
                "only {} of {m} non-degenerate rows after {MAX_ATTEMPTS_PER_ROW} draws per row",
                constraints.len()
            )));
        }
        let mut a = round_to(rng.gen_range(clo..chi), cfg.decimals);
        let mut b = round_to(rng.gen_range(clo..chi), cfg.decimals);
        if rng.gen_bool(cfg.axis_parallel_prob) {
            if rng.gen_bool(0.5) {
                a = 0.0;
            } else {
                b = 0.0;
            }
        }
        let c = round_to(rng.gen_range(rlo..rhi), cfg.decimals);
        let row = Constraint::new(a, b, c);
        if !row.is_degenerate() {
            constraints.push(row);
        }
    }
    let objective = Objective::new(
        round_to(rng.gen_range(olo..ohi), cfg.decimals),
        round_to(rng.gen_range(olo..ohi), cfg.decimals),
    );
    Ok(Problem::new(objective, constraints))
}
