//! CSV export and re-import of plan tasks.

use std::{fs::File, io, path::Path};

use jiff::civil::Date;

use crate::{
    error::{PlannerError, Result},
    models::{Plan, Task},
};

/// Column order of the exported CSV.
pub const CSV_HEADER: [&str; 7] = [
    "id",
    "title",
    "duration_days",
    "earliest_start",
    "latest_end",
    "depends_on",
    "notes",
];

/// Writes one row per task, preceded by [`CSV_HEADER`].
///
/// Dates are ISO `YYYY-MM-DD` and `depends_on` is a comma-joined list of IDs.
pub fn write_csv<W: io::Write>(plan: &Plan, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(CSV_HEADER)
        .map_err(|e| PlannerError::csv("Failed to write CSV header", e))?;

    for task in &plan.tasks {
        csv_writer
            .write_record([
                task.id.to_string(),
                task.title.clone(),
                task.duration_days.to_string(),
                task.earliest_start.to_string(),
                task.latest_end.to_string(),
                task.depends_on_joined(),
                task.notes.clone(),
            ])
            .map_err(|e| PlannerError::csv(format!("Failed to write CSV row for task {}", task.id), e))?;
    }

    csv_writer
        .flush()
        .map_err(|e| PlannerError::csv("Failed to flush CSV output", e.into()))
}

/// Renders the plan's CSV into a string.
pub fn plan_to_csv(plan: &Plan) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(plan, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| {
        PlannerError::invalid_input("csv").with_reason(format!("Output is not UTF-8: {e}"))
    })
}

/// Writes the plan's CSV to `path`, replacing any existing file.
pub fn write_csv_file(plan: &Plan, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| PlannerError::file_system(path, e))?;
    write_csv(plan, file)
}

/// Reads tasks back from CSV produced by [`write_csv`].
///
/// # Errors
///
/// Returns `PlannerError::Csv` if the input is not readable CSV and
/// `PlannerError::InvalidInput` if the header or a field is malformed.
pub fn read_csv_tasks<R: io::Read>(reader: R) -> Result<Vec<Task>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| PlannerError::csv("Failed to read CSV header", e))?;
    if headers.iter().ne(CSV_HEADER) {
        return Err(PlannerError::invalid_input("csv").with_reason(format!(
            "Expected header '{}', got '{}'",
            CSV_HEADER.join(","),
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    let mut tasks = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|e| PlannerError::csv("Failed to read CSV row", e))?;
        let row = index + 1;
        let field = |column: usize| record.get(column).unwrap_or("").trim();

        tasks.push(Task {
            id: parse_field(row, "id", field(0), str::parse)?,
            title: record.get(1).unwrap_or("").to_string(),
            duration_days: parse_field(row, "duration_days", field(2), str::parse)?,
            earliest_start: parse_field(row, "earliest_start", field(3), str::parse::<Date>)?,
            latest_end: parse_field(row, "latest_end", field(4), str::parse::<Date>)?,
            depends_on: parse_field(row, "depends_on", field(5), Task::parse_depends_on)?,
            notes: record.get(6).unwrap_or("").to_string(),
        });
    }

    Ok(tasks)
}

/// Reads tasks back from a CSV file.
pub fn read_csv_file(path: &Path) -> Result<Vec<Task>> {
    let file = File::open(path).map_err(|e| PlannerError::file_system(path, e))?;
    read_csv_tasks(file)
}

fn parse_field<T, E: std::fmt::Display>(
    row: usize,
    column: &str,
    raw: &str,
    parse: impl FnOnce(&str) -> std::result::Result<T, E>,
) -> Result<T> {
    parse(raw).map_err(|e| {
        PlannerError::invalid_input("csv").with_reason(format!("Row {row}, column {column} ('{raw}'): {e}"))
    })
}
