//! Solve a few small problems and print their corner tables.
//!
//! Usage:
//!   cargo run -p cornerpoint --example textbook
//!   cargo run -p cornerpoint --example textbook -- random 2025

use cornerpoint::prelude::*;

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "fixed".to_string());
    match mode.as_str() {
        "fixed" => show_fixed(),
        "random" => {
            let seed = std::env::args()
                .nth(2)
                .and_then(|s| s.parse().ok())
                .unwrap_or(2025);
            show_random(seed);
        }
        _ => eprintln!("usage: textbook [fixed|random [seed]]"),
    }
}

fn show(name: &str, p: &Problem) {
    println!("{name}: maximize {}x1 + {}x2", p.objective.a, p.objective.b);
    match p.solve() {
        Ok(sol) => {
            for (i, row) in sol.display_rows().iter().enumerate() {
                println!("  #{i}: ({}, {}) -> {}", row.point.x, row.point.y, row.value);
            }
            println!(
                "  optimum ({}, {}) = {}",
                sol.optimal_point.x, sol.optimal_point.y, sol.optimal_value
            );
        }
        Err(err) => println!("  {err}"),
    }
}

fn show_fixed() {
    let textbook = Problem::new(
        Objective::new(1.0, 1.0),
        vec![
            Constraint::new(1.0, 2.0, 14.0),
            Constraint::new(3.0, -1.0, 0.0),
            Constraint::new(1.0, -1.0, 2.0),
        ],
    );
    show("textbook", &textbook);
    let single = Problem::new(Objective::new(3.0, 2.0), vec![Constraint::new(1.0, 1.0, 10.0)]);
    show("single", &single);
}

fn show_random(seed: u64) {
    for index in 0..3 {
        match draw_problem(ProblemCfg::default(), ReplayToken { seed, index }) {
            Ok(p) => show(&format!("random {seed}/{index}"), &p),
            Err(err) => eprintln!("{err}"),
        }
    }
}
