//! Exporters for generated plans.
//!
//! Every exporter reads a [`Plan`] and never changes it. Each format has its
//! own hand-written serializer so date formatting stays explicit:
//!
//! - [`tabular`]: CSV rows, readable back into tasks
//! - [`calendar`]: iCalendar all-day events
//! - [`charts`]: SVG timeline, effort-share and dependency charts

use std::path::{Path, PathBuf};

use log::info;

use crate::{
    error::{PlannerError, Result},
    models::Plan,
};

pub mod calendar;
pub mod charts;
pub mod tabular;

pub use calendar::plan_to_ics;
pub use charts::{
    dependency_svg, effort_svg, timeline_svg, DependencyGraph, EffortChart, TimelineChart,
};
pub use tabular::{plan_to_csv, read_csv_file, read_csv_tasks, write_csv, write_csv_file, CSV_HEADER};

/// Files written by [`export_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub csv: PathBuf,
    pub ics: PathBuf,
    pub timeline: PathBuf,
    pub effort: PathBuf,
    pub dependency: PathBuf,
}

impl ExportPaths {
    /// Standard file names inside `out_dir`.
    pub fn in_dir(out_dir: &Path) -> Self {
        Self {
            csv: out_dir.join("plan.csv"),
            ics: out_dir.join("plan.ics"),
            timeline: out_dir.join("gantt.svg"),
            effort: out_dir.join("effort.svg"),
            dependency: out_dir.join("dependency.svg"),
        }
    }

    /// All paths in the order they are written.
    pub fn all(&self) -> [&Path; 5] {
        [
            self.csv.as_path(),
            self.ics.as_path(),
            self.timeline.as_path(),
            self.effort.as_path(),
            self.dependency.as_path(),
        ]
    }
}

/// Writes every export format into `out_dir`, creating it if needed.
///
/// Existing files with the same names are replaced.
pub fn export_all(plan: &Plan, out_dir: &Path) -> Result<ExportPaths> {
    std::fs::create_dir_all(out_dir).map_err(|e| PlannerError::file_system(out_dir, e))?;

    let paths = ExportPaths::in_dir(out_dir);

    write_csv_file(plan, &paths.csv)?;
    write_text(&paths.ics, &plan_to_ics(plan)?)?;
    write_text(&paths.timeline, &timeline_svg(plan))?;
    write_text(&paths.effort, &effort_svg(plan))?;
    write_text(&paths.dependency, &dependency_svg(plan))?;

    info!(
        "exported {} tasks to {}",
        plan.tasks.len(),
        out_dir.display()
    );
    Ok(paths)
}

fn write_text(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|e| PlannerError::file_system(path, e))
}
