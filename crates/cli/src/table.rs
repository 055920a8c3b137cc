//! Derivation table and conclusion block.
//!
//! Layout: three columns (corner point 15, objective terms 35, value 20), 74 characters
//! wide including the `|` separators. Rows follow `Solution::display_rows`.

use cornerpoint::api::{Objective, Point, Solution};

const COL_POINT: usize = 15;
const COL_FUNC: usize = 35;
const COL_VALUE: usize = 20;
const TOTAL_WIDTH: usize = COL_POINT + COL_FUNC + COL_VALUE + 4;

/// Rendering options.
#[derive(Clone, Debug)]
pub struct TableStyle {
    /// Prefix in front of every objective value, e.g. `Rp`.
    pub currency: String,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            currency: "Rp".to_string(),
        }
    }
}

/// Shortest decimal form; whole numbers print without a fractional part (`7`, `2.5`).
pub fn fmt_num(x: f64) -> String {
    format!("{x}")
}

/// `<prefix> 1.234.567`: rounded to a whole number, `.` as thousands separator.
///
/// The sign follows the unrounded value, so `-0.2` prints as `-0`.
pub fn format_currency(value: f64, prefix: &str) -> String {
    let digits = format!("{:.0}", value.abs());
    let negative = value.is_sign_negative() && !value.is_nan();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let sign = if negative { "-" } else { "" };
    format!("{prefix} {sign}{grouped}")
}

/// Row labels `A..Z`, then `AA`, `AB`, …
pub fn corner_label(index: usize) -> String {
    let mut n = index + 1;
    let mut out = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        out.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

/// Objective terms substituted at `p`, e.g. `3(10) + 2(0)`.
///
/// The origin row always shows both terms; elsewhere zero coefficients are omitted.
pub fn objective_terms(obj: &Objective, p: Point) -> String {
    if p.x == 0.0 && p.y == 0.0 {
        return format!("{}(0) + {}(0)", fmt_num(obj.a), fmt_num(obj.b));
    }
    let mut terms = Vec::with_capacity(2);
    if obj.a != 0.0 {
        terms.push(format!("{}({})", fmt_num(obj.a), fmt_num(p.x)));
    }
    if obj.b != 0.0 {
        terms.push(format!("{}({})", fmt_num(obj.b), fmt_num(p.y)));
    }
    terms.join(" + ")
}

fn point_cell(i: usize, p: Point) -> String {
    format!("{}({},{})", corner_label(i), fmt_num(p.x), fmt_num(p.y))
}

pub fn render_table(sol: &Solution, style: &TableStyle) -> String {
    let rule = "=".repeat(TOTAL_WIDTH);
    let mut out = String::new();
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "{:^w$}\n",
        "OBJECTIVE FUNCTION VALUES AT THE CORNER POINTS",
        w = TOTAL_WIDTH
    ));
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "|{:^p$}|{:^f$}|{:^v$}|\n",
        "Corner Point",
        "Objective Function",
        "Z Value",
        p = COL_POINT,
        f = COL_FUNC,
        v = COL_VALUE
    ));
    out.push_str(&"-".repeat(TOTAL_WIDTH));
    out.push('\n');
    for (i, row) in sol.display_rows().iter().enumerate() {
        out.push_str(&format!(
            "|{:<p$}|{:<f$}|{:>v$}|\n",
            point_cell(i, row.point),
            objective_terms(&sol.objective, row.point),
            format_currency(row.value, &style.currency),
            p = COL_POINT,
            f = COL_FUNC,
            v = COL_VALUE
        ));
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

pub fn render_conclusion(sol: &Solution, style: &TableStyle) -> String {
    let x = fmt_num(sol.optimal_point.x);
    let y = fmt_num(sol.optimal_point.y);
    let mut out = String::new();
    out.push_str("\n\nCONCLUSION:\n");
    out.push_str(&"-".repeat(TOTAL_WIDTH));
    out.push('\n');
    out.push_str(&format!("The optimal solution is reached at point ({x}, {y})\n"));
    out.push_str("with:\n");
    out.push_str(&format!("- X1 (product 1) = {x} units\n"));
    out.push_str(&format!("- X2 (product 2) = {y} units\n"));
    out.push_str(&format!(
        "Optimal objective value (Z) = {}\n",
        format_currency(sol.optimal_value, &style.currency)
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cornerpoint::api::{solve, Constraint};

    #[test]
    fn numbers_drop_trailing_zero() {
        assert_eq!(fmt_num(7.0), "7");
        assert_eq!(fmt_num(2.5), "2.5");
        assert_eq!(fmt_num(-3.0), "-3");
        assert_eq!(fmt_num(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(0.0, "Rp"), "Rp 0");
        assert_eq!(format_currency(30.0, "Rp"), "Rp 30");
        assert_eq!(format_currency(1234.0, "Rp"), "Rp 1.234");
        assert_eq!(format_currency(1234567.4, "Rp"), "Rp 1.234.567");
        assert_eq!(format_currency(999999.6, "$"), "$ 1.000.000");
        assert_eq!(format_currency(-4500.0, "Rp"), "Rp -4.500");
    }

    #[test]
    fn currency_keeps_sign_of_values_rounding_to_zero() {
        assert_eq!(format_currency(-0.2, "Rp"), "Rp -0");
        assert_eq!(format_currency(-0.0, "Rp"), "Rp -0");
        assert_eq!(format_currency(0.2, "Rp"), "Rp 0");
    }

    #[test]
    fn labels_continue_past_z() {
        assert_eq!(corner_label(0), "A");
        assert_eq!(corner_label(25), "Z");
        assert_eq!(corner_label(26), "AA");
        assert_eq!(corner_label(27), "AB");
        assert_eq!(corner_label(52), "BA");
    }

    #[test]
    fn objective_terms_layout() {
        let obj = Objective::new(3.0, 2.0);
        assert_eq!(objective_terms(&obj, Point::new(0.0, 0.0)), "3(0) + 2(0)");
        assert_eq!(objective_terms(&obj, Point::new(10.0, 0.0)), "3(10) + 2(0)");
        let only_x = Objective::new(4.5, 0.0);
        assert_eq!(objective_terms(&only_x, Point::new(2.0, 6.0)), "4.5(2)");
        assert_eq!(objective_terms(&only_x, Point::new(0.0, 0.0)), "4.5(0) + 0(0)");
    }

    #[test]
    fn table_rows_have_fixed_width() {
        let sol = solve(&[Constraint::new(1.0, 1.0, 10.0)], 3.0, 2.0).unwrap();
        let table = render_table(&sol, &TableStyle::default());
        let rows: Vec<&str> = table.lines().filter(|l| l.starts_with('|')).collect();
        // header + three corners
        assert_eq!(rows.len(), 4);
        for row in &rows {
            assert_eq!(row.chars().count(), TOTAL_WIDTH);
        }
        assert!(rows[1].starts_with("|A(0,10)        |3(0) + 2(10)"));
        assert!(rows[1].ends_with("               Rp 20|"));
        assert!(rows[2].starts_with("|B(10,0)"));
        assert!(rows[3].starts_with("|C(0,0)"));
        assert!(rows[3].contains("|3(0) + 2(0)"));
    }

    #[test]
    fn conclusion_names_optimum() {
        let sol = solve(&[Constraint::new(1.0, 1.0, 10.0)], 3.0, 2.0).unwrap();
        let text = render_conclusion(&sol, &TableStyle::default());
        assert!(text.contains("point (10, 0)"));
        assert!(text.contains("- X1 (product 1) = 10 units"));
        assert!(text.contains("- X2 (product 2) = 0 units"));
        assert!(text.contains("Optimal objective value (Z) = Rp 30"));
    }
}
