//! Saved project types read back from the store.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Plan, TemplateKind};

/// Summary row for a stored project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectSummary {
    /// Store-assigned project ID
    pub id: u64,
    /// Goal text of the plan
    pub goal: String,
    /// Date the plan was generated on
    pub created_on: Date,
    /// First day of the timeline
    pub start_date: Date,
    /// Template cluster used
    pub template: TemplateKind,
    /// Number of tasks stored for the project
    pub task_count: u32,
    /// Last day of the timeline, when the project has tasks
    pub end_date: Option<Date>,
}

/// A plan together with the ID it was stored under.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedProject {
    pub id: u64,
    pub plan: Plan,
}

impl From<&SavedProject> for ProjectSummary {
    fn from(saved: &SavedProject) -> Self {
        Self {
            id: saved.id,
            goal: saved.plan.goal.clone(),
            created_on: saved.plan.created_on,
            start_date: saved.plan.start_date,
            template: saved.plan.template,
            task_count: saved.plan.tasks.len() as u32,
            end_date: saved.plan.tasks.last().map(|task| task.latest_end),
        }
    }
}
