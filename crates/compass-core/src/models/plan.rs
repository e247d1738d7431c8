//! Plan model definition and related functionality.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Task, TemplateKind};

/// A complete generated schedule for a goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plan {
    /// Goal text exactly as it was entered
    pub goal: String,

    /// Date the plan was generated on
    pub created_on: Date,

    /// First day of the timeline
    pub start_date: Date,

    /// Resolved timeline length; equals the sum of task durations
    pub total_days: u32,

    /// Template cluster the tasks were drawn from
    pub template: TemplateKind,

    /// Tasks in execution order
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Plan {
    /// Last day of the timeline, or the start date for a plan without tasks.
    pub fn end_date(&self) -> Date {
        self.tasks
            .last()
            .map_or(self.start_date, |task| task.latest_end)
    }

    /// Sum of all task durations.
    pub fn total_duration(&self) -> u32 {
        self.tasks.iter().map(|task| task.duration_days).sum()
    }
}
