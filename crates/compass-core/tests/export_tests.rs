mod common;

use common::plan_for;
use compass_core::{
    export::{
        dependency_svg, effort_svg, export_all, plan_to_csv, plan_to_ics, read_csv_file,
        read_csv_tasks, timeline_svg, DependencyGraph, EffortChart, ExportPaths, TimelineChart,
    },
    PlannerError,
};
use std::fmt::Write as _;
use tempfile::TempDir;

#[test]
fn test_csv_header_and_rows() {
    let plan = plan_for("Launch a product in 2 weeks");
    let csv = plan_to_csv(&plan).expect("Failed to write CSV");
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(
        lines[0],
        "id,title,duration_days,earliest_start,latest_end,depends_on,notes"
    );
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[1], "1,Clarify goals & metrics,1,2024-01-01,2024-01-01,,");
    assert_eq!(lines[5], "5,MVP Development,3,2024-01-07,2024-01-09,4,");
    assert_eq!(lines[8], "8,Launch & monitor metrics,1,2024-01-14,2024-01-14,7,");
}

#[test]
fn test_csv_reads_back_tasks() {
    let plan = plan_for("Research solar panel efficiency");
    let csv = plan_to_csv(&plan).expect("Failed to write CSV");

    let tasks = read_csv_tasks(csv.as_bytes()).expect("Failed to read CSV");
    assert_eq!(tasks, plan.tasks);
}

#[test]
fn test_csv_quotes_titles_with_commas() {
    let mut plan = plan_for("Write a blog post");
    plan.tasks[0].title = "Outline, audience and tone".to_string();
    plan.tasks[0].notes = "Ask \"editor\" first".to_string();

    let csv = plan_to_csv(&plan).expect("Failed to write CSV");
    assert!(csv.contains("\"Outline, audience and tone\""));

    let tasks = read_csv_tasks(csv.as_bytes()).expect("Failed to read CSV");
    assert_eq!(tasks[0].title, "Outline, audience and tone");
    assert_eq!(tasks[0].notes, "Ask \"editor\" first");
}

#[test]
fn test_csv_rejects_unknown_header() {
    let err = read_csv_tasks("task,days\nA,1\n".as_bytes()).expect_err("Header should mismatch");
    assert!(matches!(err, PlannerError::InvalidInput { ref field, .. } if field == "csv"));
}

#[test]
fn test_csv_rejects_bad_date() {
    let input = "id,title,duration_days,earliest_start,latest_end,depends_on,notes\n\
                 1,Start,1,2024-13-01,2024-01-01,,\n";
    let err = read_csv_tasks(input.as_bytes()).expect_err("Date should be rejected");
    assert!(err.to_string().contains("earliest_start"));
}

#[test]
fn test_ics_events() {
    let plan = plan_for("Launch a product in 2 weeks");
    let ics = plan_to_ics(&plan).expect("Failed to write ICS");

    assert!(ics.starts_with("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n"));
    assert!(ics.ends_with("END:VCALENDAR\r\n"));
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 8);
    assert_eq!(ics.matches("END:VEVENT").count(), 8);

    // MVP Development runs 2024-01-07..=2024-01-09
    assert!(ics.contains("UID:task-5-20240107@compass\r\n"));
    assert!(ics.contains("DTSTART;VALUE=DATE:20240107\r\nDTEND;VALUE=DATE:20240110\r\n"));
    assert!(ics.contains("SUMMARY:MVP Development\r\n"));
    assert!(ics.contains("DESCRIPTION:Duration: 3 days\\nDepends on: 4\r\n"));
    assert!(ics.contains("DTSTAMP:20240101T000000Z\r\n"));

    for line in ics.split("\r\n") {
        assert!(line.len() <= 75, "line too long: {line}");
    }
}

#[test]
fn test_svg_charts() {
    let plan = plan_for("Write a blog post in 6 days");

    let timeline = timeline_svg(&plan);
    assert!(timeline.starts_with("<svg"));
    assert!(timeline.trim_end().ends_with("</svg>"));
    assert!(timeline.contains("Define outline &amp; audience"));
    assert!(timeline.contains("Days from start"));

    let effort = effort_svg(&plan);
    assert!(effort.contains("Task Effort Distribution"));
    assert_eq!(effort.matches("<path").count(), 6);

    let dependency = dependency_svg(&plan);
    assert!(dependency.contains("Task Dependency Graph"));
    assert_eq!(dependency.matches("marker-end=").count(), 5);
}

#[test]
fn test_charts_write_into_any_formatter() {
    let plan = plan_for("Launch a product in 2 weeks");

    let mut combined = String::new();
    write!(combined, "{}", TimelineChart(&plan)).expect("Failed to write timeline");
    let timeline_len = combined.len();
    write!(combined, "{}{}", EffortChart(&plan), DependencyGraph(&plan))
        .expect("Failed to write charts");

    assert_eq!(&combined[..timeline_len], timeline_svg(&plan));
    assert_eq!(
        combined,
        [timeline_svg(&plan), effort_svg(&plan), dependency_svg(&plan)].concat()
    );
    assert_eq!(combined.matches("</svg>").count(), 3);
}

#[test]
fn test_export_all_writes_every_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let out_dir = temp_dir.path().join("output_plan");
    let plan = plan_for("Launch a product in 2 weeks");

    let paths = export_all(&plan, &out_dir).expect("Failed to export plan");
    assert_eq!(paths, ExportPaths::in_dir(&out_dir));

    for path in paths.all() {
        let contents = std::fs::read_to_string(path).expect("Failed to read export");
        assert!(!contents.is_empty(), "{} is empty", path.display());
    }

    let tasks = read_csv_file(&paths.csv).expect("Failed to read CSV back");
    assert_eq!(tasks, plan.tasks);

    // Exporting again replaces the files
    export_all(&plan, &out_dir).expect("Failed to export plan twice");
}
