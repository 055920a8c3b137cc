//! JSON documents read and written by the CLI.
//!
//! - `ProblemDoc`: `{"objective": [a, b], "constraints": [[a, b, c], ...]}` (input and `random` output).
//! - `SolutionDoc`: candidates with sources, ordered feasible corners, values, optimum, table rows.

use anyhow::{Context, Result};
use cornerpoint::api::{Candidate, CandidateSource, Constraint, Objective, Problem, Solution};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::table::corner_label;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProblemDoc {
    #[serde(default)]
    pub objective: Option<[f64; 2]>,
    #[serde(default)]
    pub constraints: Vec<[f64; 3]>,
}

impl ProblemDoc {
    pub fn read(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("reading problem {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing problem {}", path.display()))
    }

    pub fn objective(&self) -> Option<Objective> {
        self.objective.map(|[a, b]| Objective::new(a, b))
    }

    pub fn constraints(&self) -> Vec<Constraint> {
        self.constraints
            .iter()
            .map(|&[a, b, c]| Constraint::new(a, b, c))
            .collect()
    }
}

impl From<&Problem> for ProblemDoc {
    fn from(p: &Problem) -> Self {
        Self {
            objective: Some([p.objective.a, p.objective.b]),
            constraints: p.constraints.iter().map(|h| [h.a, h.b, h.c]).collect(),
        }
    }
}

/// Human-readable candidate origin, constraint numbers are 1-based.
pub fn describe_source(source: CandidateSource) -> String {
    match source {
        CandidateSource::YIntercept(i) => format!("x2-axis intercept of constraint {}", i + 1),
        CandidateSource::XIntercept(i) => format!("x1-axis intercept of constraint {}", i + 1),
        CandidateSource::Origin => "origin".to_string(),
        CandidateSource::Intersection(i, j) => {
            format!("intersection of constraints {} and {}", i + 1, j + 1)
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct CandidateDoc {
    pub x: f64,
    pub y: f64,
    pub source: String,
    pub feasible: bool,
}

impl CandidateDoc {
    pub fn new(cand: &Candidate, feasible: bool) -> Self {
        Self {
            x: cand.point.x,
            y: cand.point.y,
            source: describe_source(cand.source),
            feasible,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct RowDoc {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct OptimumDoc {
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct SolutionDoc {
    pub problem: ProblemDoc,
    pub candidates: Vec<CandidateDoc>,
    pub ordered_feasible: Vec<[f64; 2]>,
    pub values: Vec<f64>,
    pub optimum: OptimumDoc,
    pub table: Vec<RowDoc>,
}

impl SolutionDoc {
    /// `feasible[i]` tells whether `tagged[i]` passed the filter.
    pub fn new(
        problem: &Problem,
        sol: &Solution,
        tagged: &[Candidate],
        feasible: &[bool],
    ) -> Self {
        Self {
            problem: ProblemDoc::from(problem),
            candidates: tagged
                .iter()
                .zip(feasible)
                .map(|(c, &ok)| CandidateDoc::new(c, ok))
                .collect(),
            ordered_feasible: sol.ordered_feasible.iter().map(|p| [p.x, p.y]).collect(),
            values: sol.values.clone(),
            optimum: OptimumDoc {
                x: sol.optimal_point.x,
                y: sol.optimal_point.y,
                value: sol.optimal_value,
            },
            table: sol
                .display_rows()
                .iter()
                .enumerate()
                .map(|(i, row)| RowDoc {
                    label: corner_label(i),
                    x: row.point.x,
                    y: row.point.y,
                    value: row.value,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cornerpoint::api::{generate_tagged, is_feasible, solve};

    #[test]
    fn problem_doc_parses_and_round_trips() {
        let doc: ProblemDoc =
            serde_json::from_str(r#"{"objective": [3, 2], "constraints": [[1, 1, 10]]}"#).unwrap();
        assert_eq!(doc.objective(), Some(Objective::new(3.0, 2.0)));
        assert_eq!(doc.constraints(), vec![Constraint::new(1.0, 1.0, 10.0)]);
        let p = Problem::new(doc.objective().unwrap(), doc.constraints());
        assert_eq!(ProblemDoc::from(&p), doc);
    }

    #[test]
    fn problem_doc_fields_are_optional() {
        let doc: ProblemDoc = serde_json::from_str(r#"{"constraints": [[1, 0, 4]]}"#).unwrap();
        assert!(doc.objective().is_none());
        assert_eq!(doc.constraints().len(), 1);
    }

    #[test]
    fn solution_doc_lists_sources_and_table() {
        let cs = vec![Constraint::new(1.0, 1.0, 10.0), Constraint::new(2.0, 1.0, 16.0)];
        let p = Problem::new(Objective::new(3.0, 2.0), cs.clone());
        let sol = solve(&cs, 3.0, 2.0).unwrap();
        let tagged = generate_tagged(&cs);
        let feasible: Vec<bool> = tagged.iter().map(|c| is_feasible(c.point, &cs)).collect();
        let doc = SolutionDoc::new(&p, &sol, &tagged, &feasible);
        let v = serde_json::to_value(&doc).unwrap();
        assert_eq!(v["candidates"][0]["source"], "x2-axis intercept of constraint 1");
        assert_eq!(v["candidates"].as_array().unwrap().len(), tagged.len());
        // Corners (0,10), (6,4), (8,0) and the origin; 3*6 + 2*4 = 26 is the best.
        assert_eq!(v["optimum"]["value"], 26.0);
        assert_eq!(v["table"][0]["label"], "A");
        assert_eq!(v["table"].as_array().unwrap().len(), 4);
    }
}
