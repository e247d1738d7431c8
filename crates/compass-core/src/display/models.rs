//! Display implementations for domain models.
//!
//! All output is markdown so it renders in the terminal and reads well as
//! plain text in MCP responses.

use std::fmt;

use crate::{
    export::ExportPaths,
    models::{Plan, ProjectSummary, SavedProject, Task, TemplateKind},
};

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} ({} {}, {} to {})",
            self.id,
            self.title,
            self.duration_days,
            day_word(self.duration_days),
            self.earliest_start,
            self.latest_end
        )
    }
}

impl Plan {
    /// Task table shared by plan and saved-project output.
    fn fmt_task_table(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tasks.is_empty() {
            return writeln!(f, "No tasks in this plan.");
        }

        writeln!(f, "| # | Task | Days | Start | End | Depends on |")?;
        writeln!(f, "|---|------|-----:|-------|-----|------------|")?;
        for task in &self.tasks {
            let depends = if task.depends_on.is_empty() {
                "-".to_string()
            } else {
                task.depends_on_joined()
            };
            writeln!(
                f,
                "| {} | {} | {} | {} | {} | {} |",
                task.id,
                escape_cell(&task.title),
                task.duration_days,
                task.earliest_start,
                task.latest_end,
                depends
            )?;
        }
        Ok(())
    }

    fn fmt_metadata(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Template: {}", self.template)?;
        writeln!(f, "- Start: {}", self.start_date)?;
        writeln!(f, "- End: {}", self.end_date())?;
        writeln!(
            f,
            "- Timeline: {} {}",
            self.total_days,
            day_word(self.total_days)
        )?;
        writeln!(f, "- Created: {}", self.created_on)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Plan: {}", self.goal.trim())?;
        writeln!(f)?;
        self.fmt_metadata(f)?;
        writeln!(f)?;
        writeln!(f, "## Tasks")?;
        writeln!(f)?;
        self.fmt_task_table(f)
    }
}

impl fmt::Display for SavedProject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.plan.goal.trim())?;
        writeln!(f)?;
        self.plan.fmt_metadata(f)?;
        writeln!(f)?;
        writeln!(f, "## Tasks")?;
        writeln!(f)?;
        self.plan.fmt_task_table(f)
    }
}

impl fmt::Display for ProjectSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} (ID: {}) ({} {})",
            self.goal.trim(),
            self.id,
            self.task_count,
            if self.task_count == 1 { "task" } else { "tasks" }
        )?;
        writeln!(f)?;
        writeln!(f, "- **Template**: {}", self.template)?;
        match self.end_date {
            Some(end) => writeln!(f, "- **Schedule**: {} to {end}", self.start_date)?,
            None => writeln!(f, "- **Schedule**: starts {}", self.start_date)?,
        }
        writeln!(f, "- **Created**: {}", self.created_on)?;
        writeln!(f)
    }
}

impl fmt::Display for ExportPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- CSV: {}", self.csv.display())?;
        writeln!(f, "- Calendar: {}", self.ics.display())?;
        writeln!(f, "- Timeline chart: {}", self.timeline.display())?;
        writeln!(f, "- Effort chart: {}", self.effort.display())?;
        writeln!(f, "- Dependency graph: {}", self.dependency.display())
    }
}

fn day_word(days: u32) -> &'static str {
    if days == 1 { "day" } else { "days" }
}

/// Keeps a pipe in a title from splitting a markdown table cell.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
