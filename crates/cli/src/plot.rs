//! Feasible-region plot (SVG output).
//!
//! Draws, inside a fixed `Window` (default `[0,150]²`): grid and axes, every constraint
//! boundary, the shaded feasible region, the objective line through the origin, and the
//! feasible corner points. Everything outside the plot area is clipped.

use anyhow::{Context, Result};
use cornerpoint::api::{feasible_region, Constraint, Objective, Point, RegionShape, Window};
use std::fmt::{self, Write as _};
use std::path::Path;

use crate::table::fmt_num;

/// Line colors for constraints, cycled.
const PALETTE: [&str; 8] = [
    "rgb(66,133,244)",
    "rgb(251,188,4)",
    "rgb(103,58,183)",
    "rgb(0,188,212)",
    "rgb(233,30,99)",
    "rgb(121,85,72)",
    "rgb(255,112,67)",
    "rgb(96,125,139)",
];
const REGION_FILL: &str = "rgb(158,158,158)";
const POINT_FILL: &str = "rgb(234,67,53)";
const OBJECTIVE_STROKE: &str = "rgb(52,168,83)";

/// Canvas and window configuration.
#[derive(Clone, Copy, Debug)]
pub struct PlotCfg {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    pub window: Window,
    /// Grid lines per axis.
    pub ticks: u32,
}

impl Default for PlotCfg {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            margin: 60,
            window: Window::default(),
            ticks: 10,
        }
    }
}

/// Screen mapping for one plot.
struct Frame {
    x0: f64,
    y0: f64,
    w: f64,
    h: f64,
    window: Window,
}

impl Frame {
    fn new(cfg: &PlotCfg) -> Self {
        let m = cfg.margin as f64;
        Self {
            x0: m,
            y0: m,
            w: (cfg.width as f64 - 2.0 * m).max(1.0),
            h: (cfg.height as f64 - 2.0 * m).max(1.0),
            window: cfg.window,
        }
    }
    #[inline]
    fn sx(&self, x: f64) -> f64 {
        self.x0 + x / self.window.x_max * self.w
    }
    #[inline]
    fn sy(&self, y: f64) -> f64 {
        self.y0 + self.h - y / self.window.y_max * self.h
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Legend text for a constraint, e.g. `Constraint 1: 1x1 + 2x2 <= 14`.
pub fn constraint_label(i: usize, h: &Constraint) -> String {
    format!(
        "Constraint {}: {}x1 + {}x2 <= {}",
        i + 1,
        fmt_num(h.a),
        fmt_num(h.b),
        fmt_num(h.c)
    )
}

/// Segment of the boundary `a·x + b·y = c` spanning the window's x-range (or a vertical
/// segment when `b = 0`). `None` for degenerate rows.
pub fn boundary_segment(h: &Constraint, window: Window) -> Option<(Point, Point)> {
    if h.b != 0.0 {
        let y_at = |x: f64| (h.c - h.a * x) / h.b;
        Some((
            Point::new(0.0, y_at(0.0)),
            Point::new(window.x_max, y_at(window.x_max)),
        ))
    } else if h.a != 0.0 {
        let x = h.c / h.a;
        Some((Point::new(x, 0.0), Point::new(x, window.y_max)))
    } else {
        None
    }
}

/// Objective level line through the origin, `a·x + b·y = 0`; `None` for a flat objective.
pub fn objective_segment(obj: &Objective, window: Window) -> Option<(Point, Point)> {
    if obj.is_flat() {
        return None;
    }
    boundary_segment(&Constraint::new(obj.a, obj.b, 0.0), window)
}

/// Render the plot. `feasible` are scattered as given (no ordering needed).
pub fn render_svg(
    constraints: &[Constraint],
    objective: &Objective,
    feasible: &[Point],
    cfg: &PlotCfg,
) -> Result<String, fmt::Error> {
    let f = Frame::new(cfg);
    let mut svg = String::new();
    writeln!(
        svg,
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
<defs><clipPath id="plot-area"><rect x="{x0}" y="{y0}" width="{pw}" height="{ph}"/></clipPath></defs>
<rect width="100%" height="100%" fill="white"/>"#,
        w = cfg.width,
        h = cfg.height,
        x0 = f.x0,
        y0 = f.y0,
        pw = f.w,
        ph = f.h
    )?;
    writeln!(
        svg,
        r#"<text x="{}" y="{}" text-anchor="middle" font-family="sans-serif" font-size="16">Linear Programming: Graphical Method</text>"#,
        cfg.width as f64 / 2.0,
        f.y0 / 2.0
    )?;

    // grid + tick labels
    let ticks = cfg.ticks.max(1);
    for k in 0..=ticks {
        let gx = k as f64 * cfg.window.x_max / ticks as f64;
        let gy = k as f64 * cfg.window.y_max / ticks as f64;
        writeln!(
            svg,
            r##"<line x1="{x}" y1="{top}" x2="{x}" y2="{bottom}" stroke="#e0e0e0"/>
<text x="{x}" y="{label_y}" text-anchor="middle" font-family="sans-serif" font-size="11">{gx}</text>
<line x1="{left}" y1="{y}" x2="{right}" y2="{y}" stroke="#e0e0e0"/>
<text x="{label_x}" y="{y}" text-anchor="end" font-family="sans-serif" font-size="11">{gy}</text>"##,
            x = f.sx(gx),
            top = f.y0,
            bottom = f.y0 + f.h,
            label_y = f.y0 + f.h + 16.0,
            gx = fmt_num(gx),
            left = f.x0,
            right = f.x0 + f.w,
            y = f.sy(gy),
            label_x = f.x0 - 6.0,
            gy = fmt_num(gy),
        )?;
    }
    writeln!(
        svg,
        r#"<line x1="{l}" y1="{b}" x2="{r}" y2="{b}" stroke="black"/>
<line x1="{l}" y1="{t}" x2="{l}" y2="{b}" stroke="black"/>
<text x="{cx}" y="{xl}" text-anchor="middle" font-family="sans-serif" font-size="13">x1</text>
<text x="{yl}" y="{cy}" text-anchor="middle" font-family="sans-serif" font-size="13">x2</text>"#,
        l = f.x0,
        r = f.x0 + f.w,
        t = f.y0,
        b = f.y0 + f.h,
        cx = f.x0 + f.w / 2.0,
        xl = f.y0 + f.h + 36.0,
        yl = f.x0 - 40.0,
        cy = f.y0 + f.h / 2.0,
    )?;

    let mut legend: Vec<(String, String)> = Vec::new();

    svg.push_str("<g clip-path=\"url(#plot-area)\">\n");
    if let RegionShape::Polygon(corners) = feasible_region(constraints, cfg.window) {
        let pts: Vec<String> = corners
            .iter()
            .map(|p| format!("{:.2},{:.2}", f.sx(p.x), f.sy(p.y)))
            .collect();
        writeln!(
            svg,
            r#"<polygon points="{}" fill="{REGION_FILL}" fill-opacity="0.3" stroke="none"/>"#,
            pts.join(" ")
        )?;
        legend.push(("Feasible region".to_string(), REGION_FILL.to_string()));
    }
    for (i, h) in constraints.iter().enumerate() {
        let Some((p, q)) = boundary_segment(h, cfg.window) else {
            continue;
        };
        if !(p.iter().chain(q.iter()).all(|v| v.is_finite())) {
            continue;
        }
        let color = PALETTE[i % PALETTE.len()];
        writeln!(
            svg,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{color}" stroke-width="2"/>"#,
            f.sx(p.x),
            f.sy(p.y),
            f.sx(q.x),
            f.sy(q.y)
        )?;
        legend.push((constraint_label(i, h), color.to_string()));
    }
    if let Some((p, q)) = objective_segment(objective, cfg.window) {
        writeln!(
            svg,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{OBJECTIVE_STROKE}" stroke-width="2" stroke-dasharray="8,5"/>"#,
            f.sx(p.x),
            f.sy(p.y),
            f.sx(q.x),
            f.sy(q.y)
        )?;
        legend.push((
            format!(
                "Objective: {}x1 + {}x2",
                fmt_num(objective.a),
                fmt_num(objective.b)
            ),
            OBJECTIVE_STROKE.to_string(),
        ));
    }
    let mut scattered = 0usize;
    for p in feasible.iter().filter(|p| p.x.is_finite() && p.y.is_finite()) {
        writeln!(
            svg,
            r#"<circle cx="{:.2}" cy="{:.2}" r="5" fill="{POINT_FILL}"/>"#,
            f.sx(p.x),
            f.sy(p.y)
        )?;
        scattered += 1;
    }
    if scattered > 0 {
        legend.push(("Corner points".to_string(), POINT_FILL.to_string()));
    }
    svg.push_str("</g>\n");

    // legend, top-right
    let lx = f.x0 + f.w - 260.0;
    let ly = f.y0 + 10.0;
    writeln!(
        svg,
        r#"<rect x="{}" y="{}" width="250" height="{}" fill="white" fill-opacity="0.85" stroke="gray"/>"#,
        lx,
        ly,
        legend.len() as f64 * 18.0 + 10.0
    )?;
    for (k, (label, color)) in legend.iter().enumerate() {
        let y = ly + 18.0 * (k as f64 + 1.0);
        writeln!(
            svg,
            r#"<rect x="{}" y="{}" width="14" height="10" fill="{color}"/>
<text x="{}" y="{}" font-family="sans-serif" font-size="11">{}</text>"#,
            lx + 8.0,
            y - 9.0,
            lx + 28.0,
            y,
            escape_xml(label)
        )?;
    }
    svg.push_str("</svg>\n");
    Ok(svg)
}

/// Render and write to `path`.
pub fn write_svg(
    path: &Path,
    constraints: &[Constraint],
    objective: &Objective,
    feasible: &[Point],
    cfg: &PlotCfg,
) -> Result<()> {
    let svg = render_svg(constraints, objective, feasible, cfg).context("rendering plot")?;
    std::fs::write(path, svg).with_context(|| format!("writing plot {}", path.display()))
}
