use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use cornerpoint::api::{
    draw_problem, generate_tagged, is_feasible_eps, ProblemCfg, ReplayToken, RowCount, SolveCfg,
};
use serde_json::json;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod doc;
mod input;
mod plot;
mod provenance;
mod table;

use doc::{CandidateDoc, ProblemDoc, SolutionDoc};
use input::InputArgs;
use plot::PlotCfg;
use provenance::{write_sidecar, Payload};
use table::TableStyle;

#[derive(Parser)]
#[command(name = "cornerpoint")]
#[command(about = "Maximize a two-variable linear objective by the corner-point method")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve and print the corner-point table and conclusion
    Solve(SolveArgs),
    /// Print every candidate corner point with its source as JSON
    Candidates {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Draw a reproducible random problem and print it as problem JSON
    Random {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Fixed number of constraints (default: 2 to 5)
        #[arg(long)]
        rows: Option<usize>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Debug, Default)]
struct SolveArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Prefix printed before objective values
    #[arg(long, default_value = "Rp")]
    currency: String,
    /// Feasibility tolerance (default 1e-10)
    #[arg(long)]
    eps: Option<f64>,
    /// Write the solution document here
    #[arg(long)]
    json: Option<PathBuf>,
    /// Write an SVG plot of the feasible region here
    #[arg(long)]
    plot: Option<PathBuf>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cmd.action {
        Action::Solve(args) => solve(&args, &mut out),
        Action::Candidates { input } => candidates(&input, &mut out),
        Action::Random { seed, index, rows } => random(seed, index, rows, &mut out),
        Action::Report => report(&mut out),
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

fn solve(args: &SolveArgs, out: &mut impl Write) -> Result<()> {
    let problem = args.input.collect()?;
    let cfg = match args.eps {
        Some(eps) if !(eps.is_finite() && eps >= 0.0) => {
            anyhow::bail!("--eps must be a non-negative number, got {eps}")
        }
        Some(eps_feas) => SolveCfg { eps_feas },
        None => SolveCfg::default(),
    };
    tracing::info!(
        constraints = problem.constraints.len(),
        eps = cfg.eps_feas,
        "solve"
    );
    let sol = problem
        .solve_with(cfg)
        .context("no corner point satisfies every constraint; the problem has no solution")?;

    let style = TableStyle {
        currency: args.currency.clone(),
    };
    write!(out, "{}", table::render_table(&sol, &style))?;
    write!(out, "{}", table::render_conclusion(&sol, &style))?;

    let params = json!({
        "objective": [problem.objective.a, problem.objective.b],
        "constraints": problem.constraints.len(),
        "eps": cfg.eps_feas,
    });
    if let Some(path) = &args.json {
        let tagged = generate_tagged(&problem.constraints);
        let feasible: Vec<bool> = tagged
            .iter()
            .map(|c| is_feasible_eps(c.point, &problem.constraints, cfg.eps_feas))
            .collect();
        let doc = SolutionDoc::new(&problem, &sol, &tagged, &feasible);
        ensure_parent(path)?;
        std::fs::write(path, serde_json::to_vec_pretty(&doc)?)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), "solution written");
        write_sidecar(path, Payload::new("solve", params.clone()))?;
    }
    if let Some(path) = &args.plot {
        ensure_parent(path)?;
        plot::write_svg(
            path,
            &problem.constraints,
            &problem.objective,
            &sol.feasible,
            &PlotCfg::default(),
        )?;
        tracing::info!(path = %path.display(), "plot written");
        write_sidecar(path, Payload::new("solve", params))?;
    }
    Ok(())
}

fn candidates(input: &InputArgs, out: &mut impl Write) -> Result<()> {
    let (_, constraints) = input.collect_parts()?;
    let tagged = generate_tagged(&constraints);
    tracing::info!(
        constraints = constraints.len(),
        candidates = tagged.len(),
        "candidates"
    );
    let docs: Vec<CandidateDoc> = tagged
        .iter()
        .map(|c| {
            let ok = is_feasible_eps(c.point, &constraints, SolveCfg::default().eps_feas);
            CandidateDoc::new(c, ok)
        })
        .collect();
    writeln!(out, "{}", serde_json::to_string_pretty(&docs)?)?;
    Ok(())
}

fn random(seed: u64, index: u64, rows: Option<usize>, out: &mut impl Write) -> Result<()> {
    let mut cfg = ProblemCfg::default();
    if let Some(n) = rows {
        cfg.rows = RowCount::Fixed(n);
    }
    let problem = draw_problem(cfg, ReplayToken { seed, index })
        .with_context(|| format!("drawing problem seed={seed} index={index}"))?;
    tracing::info!(seed, index, constraints = problem.constraints.len(), "random");
    writeln!(
        out,
        "{}",
        serde_json::to_string_pretty(&ProblemDoc::from(&problem))?
    )?;
    Ok(())
}

fn report(out: &mut impl Write) -> Result<()> {
    let block = Payload::new("report", json!({})).to_json(&[]);
    writeln!(out, "{}", serde_json::to_string_pretty(&block)?)?;
    Ok(())
}
