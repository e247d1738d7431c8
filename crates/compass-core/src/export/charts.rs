//! SVG charts: timeline bars, effort shares and the dependency graph.
//!
//! Charts are plain SVG text so they can be opened in any browser without a
//! rendering backend.

use std::{
    f64::consts::{FRAC_PI_2, TAU},
    fmt::{self, Write as _},
};

use crate::models::{Plan, Task};

const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

const FONT: &str = "font-family=\"sans-serif\"";

fn color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Escapes text for use inside SVG elements and attributes.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Horizontal bar per task, offset by its days from the plan start.
pub fn timeline_svg(plan: &Plan) -> String {
    TimelineChart(plan).to_string()
}

/// Display adapter writing [`timeline_svg`] output.
pub struct TimelineChart<'a>(pub &'a Plan);

impl fmt::Display for TimelineChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const LABEL_WIDTH: f64 = 280.0;
        const CHART_WIDTH: f64 = 720.0;
        const ROW_HEIGHT: f64 = 32.0;
        const TOP: f64 = 48.0;

        let plan = self.0;
        let total_days = plan.total_duration().max(1);
        let day_width = CHART_WIDTH / f64::from(total_days);
        let rows = plan.tasks.len() as f64;
        let height = TOP + rows * ROW_HEIGHT + 56.0;
        let width = LABEL_WIDTH + CHART_WIDTH + 24.0;

        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        writeln!(f, r#"<rect width="100%" height="100%" fill="white"/>"#)?;
        writeln!(
            f,
            r#"<text x="{}" y="24" {FONT} font-size="16" font-weight="bold" text-anchor="middle">{}</text>"#,
            width / 2.0,
            escape_xml(&plan.goal)
        )?;

        // Vertical grid lines with day offsets.
        let step = tick_step(total_days);
        let axis_y = TOP + rows * ROW_HEIGHT;
        let mut day = 0;
        while day <= total_days {
            let x = LABEL_WIDTH + f64::from(day) * day_width;
            writeln!(
                f,
                r##"<line x1="{x:.1}" y1="{TOP}" x2="{x:.1}" y2="{axis_y}" stroke="#dddddd"/>"##
            )?;
            writeln!(
                f,
                r#"<text x="{x:.1}" y="{}" {FONT} font-size="11" text-anchor="middle">{day}</text>"#,
                axis_y + 16.0
            )?;
            day += step;
        }
        writeln!(
            f,
            r#"<text x="{}" y="{}" {FONT} font-size="12" text-anchor="middle">Days from start</text>"#,
            LABEL_WIDTH + CHART_WIDTH / 2.0,
            axis_y + 40.0
        )?;

        for (index, task) in plan.tasks.iter().enumerate() {
            let offset = days_from_start(plan, task);
            let x = LABEL_WIDTH + offset * day_width;
            let y = TOP + index as f64 * ROW_HEIGHT + 4.0;
            let bar_width = f64::from(task.duration_days) * day_width;
            let bar_height = ROW_HEIGHT - 8.0;

            writeln!(
                f,
                r#"<text x="{}" y="{:.1}" {FONT} font-size="12" text-anchor="end">{}</text>"#,
                LABEL_WIDTH - 8.0,
                y + bar_height / 2.0 + 4.0,
                escape_xml(&task.title)
            )?;
            writeln!(
                f,
                r#"<rect x="{x:.1}" y="{y:.1}" width="{bar_width:.1}" height="{bar_height}" fill="{}" stroke="black"><title>{} ({} to {})</title></rect>"#,
                color(index),
                escape_xml(&task.title),
                task.earliest_start,
                task.latest_end
            )?;
            writeln!(
                f,
                r#"<text x="{:.1}" y="{:.1}" {FONT} font-size="10" font-weight="bold" fill="white" text-anchor="middle">{}d</text>"#,
                x + bar_width / 2.0,
                y + bar_height / 2.0 + 4.0,
                task.duration_days
            )?;
        }

        f.write_str("</svg>\n")
    }
}

/// Pie chart of each task's share of the total duration.
pub fn effort_svg(plan: &Plan) -> String {
    EffortChart(plan).to_string()
}

/// Display adapter writing [`effort_svg`] output.
pub struct EffortChart<'a>(pub &'a Plan);

impl fmt::Display for EffortChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RADIUS: f64 = 160.0;
        const CX: f64 = 200.0;
        const CY: f64 = 220.0;

        let plan = self.0;
        let total = f64::from(plan.total_duration().max(1));
        let legend_height = plan.tasks.len() as f64 * 22.0 + 80.0;
        let height = legend_height.max(420.0);

        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="720" height="{height}" viewBox="0 0 720 {height}">"#
        )?;
        writeln!(f, r#"<rect width="100%" height="100%" fill="white"/>"#)?;
        writeln!(
            f,
            r#"<text x="360" y="28" {FONT} font-size="16" font-weight="bold" text-anchor="middle">Task Effort Distribution</text>"#
        )?;

        // Start at twelve o'clock and go clockwise.
        let mut angle = -FRAC_PI_2;
        for (index, task) in plan.tasks.iter().enumerate() {
            let fraction = f64::from(task.duration_days) / total;
            let sweep = fraction * TAU;

            if plan.tasks.len() == 1 {
                writeln!(
                    f,
                    r#"<circle cx="{CX}" cy="{CY}" r="{RADIUS}" fill="{}" stroke="white"/>"#,
                    color(index)
                )?;
            } else {
                let (x1, y1) = polar(CX, CY, RADIUS, angle);
                let (x2, y2) = polar(CX, CY, RADIUS, angle + sweep);
                let large_arc = u8::from(sweep > std::f64::consts::PI);
                writeln!(
                    f,
                    r#"<path d="M {CX} {CY} L {x1:.2} {y1:.2} A {RADIUS} {RADIUS} 0 {large_arc} 1 {x2:.2} {y2:.2} Z" fill="{}" stroke="white"/>"#,
                    color(index)
                )?;
            }

            let (lx, ly) = polar(CX, CY, RADIUS * 0.65, angle + sweep / 2.0);
            writeln!(
                f,
                r#"<text x="{lx:.1}" y="{:.1}" {FONT} font-size="11" fill="white" text-anchor="middle">{:.1}%</text>"#,
                ly + 4.0,
                fraction * 100.0
            )?;

            let legend_y = 60.0 + index as f64 * 22.0;
            writeln!(
                f,
                r#"<rect x="400" y="{legend_y}" width="14" height="14" fill="{}"/>"#,
                color(index)
            )?;
            writeln!(
                f,
                r#"<text x="420" y="{}" {FONT} font-size="12">{} ({}d)</text>"#,
                legend_y + 12.0,
                escape_xml(&task.title),
                task.duration_days
            )?;

            angle += sweep;
        }

        f.write_str("</svg>\n")
    }
}

/// Directed graph with a node per task and an arrow per dependency.
///
/// Nodes are laid out left to right in plan order. Edges between neighbours
/// are straight; longer edges arc above the row.
pub fn dependency_svg(plan: &Plan) -> String {
    DependencyGraph(plan).to_string()
}

/// Display adapter writing [`dependency_svg`] output.
pub struct DependencyGraph<'a>(pub &'a Plan);

impl fmt::Display for DependencyGraph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NODE_WIDTH: f64 = 160.0;
        const NODE_HEIGHT: f64 = 56.0;
        const GAP: f64 = 48.0;
        const MARGIN: f64 = 24.0;

        let plan = self.0;
        let count = plan.tasks.len().max(1) as f64;
        let width = MARGIN * 2.0 + count * NODE_WIDTH + (count - 1.0) * GAP;
        let node_y = 140.0;
        let height = node_y + NODE_HEIGHT + MARGIN * 2.0;

        let left_of = |position: usize| MARGIN + position as f64 * (NODE_WIDTH + GAP);
        let position_of = |id: u32| plan.tasks.iter().position(|task| task.id == id);

        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        f.write_str(
            r#"<defs><marker id="arrow" viewBox="0 0 10 10" refX="10" refY="5" markerWidth="8" markerHeight="8" orient="auto-start-reverse"><path d="M 0 0 L 10 5 L 0 10 z" fill="black"/></marker></defs>"#,
        )?;
        f.write_char('\n')?;
        writeln!(f, r#"<rect width="100%" height="100%" fill="white"/>"#)?;
        writeln!(
            f,
            r#"<text x="{}" y="28" {FONT} font-size="16" font-weight="bold" text-anchor="middle">Task Dependency Graph</text>"#,
            width / 2.0
        )?;

        for (position, task) in plan.tasks.iter().enumerate() {
            for &dependency in &task.depends_on {
                let Some(from) = position_of(dependency) else {
                    continue;
                };
                let mid_y = node_y + NODE_HEIGHT / 2.0;
                let (x1, x2) = if from < position {
                    (left_of(from) + NODE_WIDTH, left_of(position))
                } else {
                    (left_of(from), left_of(position) + NODE_WIDTH)
                };

                if from.abs_diff(position) == 1 {
                    writeln!(
                        f,
                        r#"<line x1="{x1}" y1="{mid_y}" x2="{x2}" y2="{mid_y}" stroke="black" marker-end="url(#arrow)"/>"#
                    )?;
                } else {
                    let lift = 30.0 * from.abs_diff(position) as f64;
                    let top = node_y - lift.min(node_y - 48.0);
                    let (sx, ex) = (
                        left_of(from) + NODE_WIDTH / 2.0,
                        left_of(position) + NODE_WIDTH / 2.0,
                    );
                    writeln!(
                        f,
                        r#"<path d="M {sx} {node_y} Q {} {top} {ex} {node_y}" fill="none" stroke="black" marker-end="url(#arrow)"/>"#,
                        (sx + ex) / 2.0
                    )?;
                }
            }
        }

        for (position, task) in plan.tasks.iter().enumerate() {
            let x = left_of(position);
            writeln!(
                f,
                r##"<rect x="{x}" y="{node_y}" width="{NODE_WIDTH}" height="{NODE_HEIGHT}" rx="10" fill="#87ceeb" stroke="black"/>"##
            )?;
            writeln!(
                f,
                r#"<text x="{}" y="{}" {FONT} font-size="11" font-weight="bold" text-anchor="middle">{}. {}</text>"#,
                x + NODE_WIDTH / 2.0,
                node_y + NODE_HEIGHT / 2.0 - 4.0,
                task.id,
                escape_xml(&truncate(&task.title, 24))
            )?;
            writeln!(
                f,
                r#"<text x="{}" y="{}" {FONT} font-size="10" text-anchor="middle">{}d</text>"#,
                x + NODE_WIDTH / 2.0,
                node_y + NODE_HEIGHT / 2.0 + 12.0,
                task.duration_days
            )?;
        }

        f.write_str("</svg>\n")
    }
}

fn days_from_start(plan: &Plan, task: &Task) -> f64 {
    task.earliest_start
        .since(plan.start_date)
        .map_or(0.0, |span| f64::from(span.get_days()))
}

/// Grid spacing that keeps the axis readable for long timelines.
fn tick_step(total_days: u32) -> u32 {
    match total_days {
        0..=20 => 1,
        21..=60 => 5,
        61..=180 => 10,
        181..=730 => 30,
        _ => total_days / 20,
    }
}

fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let mut short: String = s.chars().take(max_chars - 1).collect();
        short.push('…');
        short
    }
}
