//! iCalendar (ICS) export.

use crate::{
    error::{PlannerError, Result},
    models::{Plan, Task},
};

const PRODID: &str = "-//Compass//Goal Planner//EN";
const MAX_LINE_OCTETS: usize = 75;

/// Renders the plan as an iCalendar document with one all-day event per task.
///
/// Each event spans the task's whole date range; `DTEND` is exclusive, so it
/// is the day after `latest_end`. Lines end in CRLF and are folded at 75
/// octets.
pub fn plan_to_ics(plan: &Plan) -> Result<String> {
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{PRODID}"),
        "CALSCALE:GREGORIAN".to_string(),
        format!("X-WR-CALNAME:{}", escape_text(&plan.goal)),
    ];

    let stamp = format!("{}T000000Z", plan.created_on.strftime("%Y%m%d"));
    for task in &plan.tasks {
        lines.extend(event_lines(task, &stamp)?);
    }
    lines.push("END:VCALENDAR".to_string());

    let mut ics = String::new();
    for line in &lines {
        fold_line(&mut ics, line);
    }
    Ok(ics)
}

fn event_lines(task: &Task, stamp: &str) -> Result<Vec<String>> {
    let end_exclusive = task.latest_end.tomorrow().map_err(|e| {
        PlannerError::invalid_input("latest_end")
            .with_reason(format!("Task {} ends on the last supported date: {e}", task.id))
    })?;

    let mut description = format!(
        "Duration: {} day{}",
        task.duration_days,
        if task.duration_days == 1 { "" } else { "s" }
    );
    if !task.depends_on.is_empty() {
        description.push_str("\nDepends on: ");
        description.push_str(&task.depends_on_joined());
    }
    if !task.notes.is_empty() {
        description.push('\n');
        description.push_str(&task.notes);
    }

    Ok(vec![
        "BEGIN:VEVENT".to_string(),
        format!(
            "UID:task-{}-{}@compass",
            task.id,
            task.earliest_start.strftime("%Y%m%d")
        ),
        format!("DTSTAMP:{stamp}"),
        format!(
            "DTSTART;VALUE=DATE:{}",
            task.earliest_start.strftime("%Y%m%d")
        ),
        format!("DTEND;VALUE=DATE:{}", end_exclusive.strftime("%Y%m%d")),
        format!("SUMMARY:{}", escape_text(&task.title)),
        format!("DESCRIPTION:{}", escape_text(&description)),
        "END:VEVENT".to_string(),
    ])
}

/// Escapes a TEXT property value.
fn escape_text(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\r', "")
        .replace('\n', "\\n")
        .replace(',', "\\,")
        .replace(';', "\\;")
}

/// Appends `line` to `out`, folding it into continuation lines that start
/// with a single space. Never splits a UTF-8 sequence.
fn fold_line(out: &mut String, line: &str) {
    let mut width = 0;
    for ch in line.chars() {
        let len = ch.len_utf8();
        if width + len > MAX_LINE_OCTETS {
            out.push_str("\r\n ");
            // The leading space counts toward the continuation line.
            width = 1;
        }
        out.push(ch);
        width += len;
    }
    out.push_str("\r\n");
}
