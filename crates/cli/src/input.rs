//! Input collection: problem JSON, constraint CSV, inline flags, or interactive prompts.
//!
//! Only parsing happens here, plus rejection of rows with `a = b = 0` and non-finite
//! numbers. Everything else is passed to the solver unchanged.

use anyhow::{bail, Context, Result};
use clap::Args;
use cornerpoint::api::{Constraint, Objective, Problem};
use polars::prelude::*;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::doc::ProblemDoc;

/// Shared input flags for `solve` and `candidates`.
#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// Problem JSON: {"objective": [a, b], "constraints": [[a, b, c], ...]}
    #[arg(long)]
    pub problem: Option<PathBuf>,
    /// Constraint CSV with header columns a,b,c
    #[arg(long)]
    pub csv: Option<PathBuf>,
    /// Objective coefficients "a,b" (maximize a*x1 + b*x2); overrides the problem file
    #[arg(long, allow_hyphen_values = true)]
    pub objective: Option<String>,
    /// Constraint "a,b,c" meaning a*x1 + b*x2 <= c (repeatable)
    #[arg(long = "constraint", short = 'c', allow_hyphen_values = true)]
    pub constraints: Vec<String>,
    /// Prompt for the objective and constraints on stdin
    #[arg(long, conflicts_with_all = ["problem", "csv", "objective", "constraints"])]
    pub interactive: bool,
}

impl InputArgs {
    /// Objective (if any source gave one) and the concatenated constraint list:
    /// problem file rows, then CSV rows, then inline rows.
    pub fn collect_parts(&self) -> Result<(Option<Objective>, Vec<Constraint>)> {
        if self.interactive {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let p = prompt_problem(&mut stdin.lock(), &mut stdout.lock())?;
            return Ok((Some(p.objective), p.constraints));
        }
        let mut objective = None;
        let mut constraints = Vec::new();
        if let Some(path) = &self.problem {
            let doc = ProblemDoc::read(path)?;
            objective = doc.objective();
            constraints.extend(doc.constraints());
        }
        if let Some(path) = &self.csv {
            constraints.extend(read_constraints_csv(path)?);
        }
        if let Some(s) = &self.objective {
            let (a, b) = parse_pair(s).with_context(|| format!("--objective {s:?}"))?;
            objective = Some(Objective::new(a, b));
        }
        for s in &self.constraints {
            let (a, b, c) = parse_triple(s).with_context(|| format!("--constraint {s:?}"))?;
            constraints.push(Constraint::new(a, b, c));
        }
        check_constraints(&constraints)?;
        tracing::info!(
            constraints = constraints.len(),
            has_objective = objective.is_some(),
            "input collected"
        );
        Ok((objective, constraints))
    }

    /// Full problem; the objective is mandatory.
    pub fn collect(&self) -> Result<Problem> {
        let (objective, constraints) = self.collect_parts()?;
        let Some(objective) = objective else {
            bail!("no objective given (use --objective a,b, a problem file, or --interactive)");
        };
        Ok(Problem::new(objective, constraints))
    }
}

fn parse_numbers(s: &str) -> Result<Vec<f64>> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(|t| {
            let v: f64 = t
                .parse()
                .with_context(|| format!("{t:?} is not a number"))?;
            if !v.is_finite() {
                bail!("{t:?} is not a finite number");
            }
            Ok(v)
        })
        .collect()
}

/// `"a,b"` (commas and/or whitespace).
pub fn parse_pair(s: &str) -> Result<(f64, f64)> {
    match parse_numbers(s)?.as_slice() {
        &[a, b] => Ok((a, b)),
        other => bail!("expected 2 numbers, got {}", other.len()),
    }
}

/// `"a,b,c"` (commas and/or whitespace).
pub fn parse_triple(s: &str) -> Result<(f64, f64, f64)> {
    match parse_numbers(s)?.as_slice() {
        &[a, b, c] => Ok((a, b, c)),
        other => bail!("expected 3 numbers, got {}", other.len()),
    }
}

/// Reject rows the solver cannot interpret.
pub fn check_constraints(constraints: &[Constraint]) -> Result<()> {
    for (i, h) in constraints.iter().enumerate() {
        if !(h.a.is_finite() && h.b.is_finite() && h.c.is_finite()) {
            bail!("constraint {} has a non-finite coefficient", i + 1);
        }
        if h.is_degenerate() {
            bail!("constraint {}: the x1 and x2 coefficients are both zero", i + 1);
        }
    }
    Ok(())
}

/// Constraint rows from a CSV with header `a,b,c` (extra columns are ignored).
pub fn read_constraints_csv(path: &Path) -> Result<Vec<Constraint>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening csv {}", path.display()))?
        .select([
            col("a").cast(DataType::Float64),
            col("b").cast(DataType::Float64),
            col("c").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading columns a,b,c from {}", path.display()))?;
    let column = |name: &str| -> Result<Vec<f64>> {
        df.column(name)?
            .f64()?
            .into_iter()
            .enumerate()
            .map(|(i, v)| {
                v.with_context(|| format!("row {}: missing value in column {name}", i + 1))
            })
            .collect()
    };
    let (a, b, c) = (column("a")?, column("b")?, column("c")?);
    tracing::info!(path = %path.display(), rows = df.height(), "read constraint csv");
    Ok(a
        .into_iter()
        .zip(b)
        .zip(c)
        .map(|((a, b), c)| Constraint::new(a, b, c))
        .collect())
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("unexpected end of input at prompt {:?}", prompt.trim());
    }
    Ok(line.trim().to_string())
}

fn ask_number<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<f64> {
    let line = ask(input, out, prompt)?;
    let v: f64 = line
        .parse()
        .with_context(|| format!("{line:?} is not a number"))?;
    if !v.is_finite() {
        bail!("{line:?} is not a finite number");
    }
    Ok(v)
}

/// Prompt for the objective, the number of constraints, then each constraint.
pub fn prompt_problem<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Problem> {
    writeln!(out, "Enter the objective function:")?;
    let a = ask_number(input, out, "Coefficient of x1 in the objective: ")?;
    let b = ask_number(input, out, "Coefficient of x2 in the objective: ")?;
    let count_line = ask(input, out, "\nHow many constraints? ")?;
    let count: usize = count_line
        .parse()
        .with_context(|| format!("{count_line:?} is not a constraint count"))?;
    let mut constraints = Vec::with_capacity(count);
    for i in 1..=count {
        writeln!(out, "\nConstraint {i}:")?;
        let ca = ask_number(input, out, &format!("Coefficient of x1 for constraint {i}: "))?;
        let cb = ask_number(input, out, &format!("Coefficient of x2 for constraint {i}: "))?;
        let cc = ask_number(input, out, &format!("Right-hand side of constraint {i}: "))?;
        constraints.push(Constraint::new(ca, cb, cc));
    }
    check_constraints(&constraints)?;
    Ok(Problem::new(Objective::new(a, b), constraints))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn parses_pairs_and_triples() {
        assert_eq!(parse_pair("3,2").unwrap(), (3.0, 2.0));
        assert_eq!(parse_pair(" -1.5 , 4 ").unwrap(), (-1.5, 4.0));
        assert_eq!(parse_triple("1 2 14").unwrap(), (1.0, 2.0, 14.0));
        assert_eq!(parse_triple("3,-1,0").unwrap(), (3.0, -1.0, 0.0));
        assert!(parse_pair("1").is_err());
        assert!(parse_triple("1,2,x").is_err());
        assert!(parse_triple("1,2,inf").is_err());
    }

    #[test]
    fn rejects_zero_rows() {
        let rows = [Constraint::new(1.0, 1.0, 4.0), Constraint::new(0.0, 0.0, 3.0)];
        let err = check_constraints(&rows).unwrap_err();
        assert!(err.to_string().contains("constraint 2"));
    }

    #[test]
    fn interactive_prompts_build_problem() {
        let script = "3\n2\n2\n1\n1\n10\n2\n1\n16\n";
        let mut input = Cursor::new(script.as_bytes());
        let mut out: Vec<u8> = Vec::new();
        let p = prompt_problem(&mut input, &mut out).unwrap();
        assert_eq!(p.objective, Objective::new(3.0, 2.0));
        assert_eq!(
            p.constraints,
            vec![Constraint::new(1.0, 1.0, 10.0), Constraint::new(2.0, 1.0, 16.0)]
        );
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("Constraint 2:"));
        assert!(shown.contains("Right-hand side of constraint 2: "));
    }

    #[test]
    fn interactive_input_ending_early_is_an_error() {
        let mut input = Cursor::new("3\n2\n1\n".as_bytes());
        let mut out: Vec<u8> = Vec::new();
        let err = prompt_problem(&mut input, &mut out).unwrap_err();
        assert!(err.to_string().contains("unexpected end of input"));
    }

    #[test]
    fn csv_rows_are_read_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rows.csv");
        std::fs::write(&path, "a,b,c\n1,2,14\n3,-1,0\n1,-1,2.5\n").unwrap();
        let rows = read_constraints_csv(&path).unwrap();
        assert_eq!(
            rows,
            vec![
                Constraint::new(1.0, 2.0, 14.0),
                Constraint::new(3.0, -1.0, 0.0),
                Constraint::new(1.0, -1.0, 2.5),
            ]
        );
    }

    #[test]
    fn sources_are_concatenated_and_inline_objective_wins() {
        let dir = tempdir().unwrap();
        let problem = dir.path().join("p.json");
        std::fs::write(&problem, r#"{"objective": [1, 1], "constraints": [[1, 2, 14]]}"#).unwrap();
        let args = InputArgs {
            problem: Some(problem),
            objective: Some("5,-2".to_string()),
            constraints: vec!["3,-1,0".to_string()],
            ..InputArgs::default()
        };
        let p = args.collect().unwrap();
        assert_eq!(p.objective, Objective::new(5.0, -2.0));
        assert_eq!(
            p.constraints,
            vec![Constraint::new(1.0, 2.0, 14.0), Constraint::new(3.0, -1.0, 0.0)]
        );
    }

    #[test]
    fn missing_objective_is_reported() {
        let args = InputArgs {
            constraints: vec!["1,1,10".to_string()],
            ..InputArgs::default()
        };
        assert!(args.collect_parts().unwrap().0.is_none());
        assert!(args.collect().is_err());
    }
}
