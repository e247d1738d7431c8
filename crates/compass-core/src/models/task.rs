//! Task model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// One step of a generated schedule.
///
/// Tasks form a strict chain: the first task has no dependencies and every
/// later task depends on exactly the task before it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// 1-based position in the plan, assigned in generation order
    pub id: u32,

    /// Title taken from the template catalog
    pub title: String,

    /// Length of the task in whole days (at least 1)
    pub duration_days: u32,

    /// First day of the task
    pub earliest_start: Date,

    /// Last day of the task, inclusive
    pub latest_end: Date,

    /// IDs of the tasks that must finish first
    #[serde(default)]
    pub depends_on: Vec<u32>,

    /// Free-form notes, empty for generated tasks
    #[serde(default)]
    pub notes: String,
}

impl Task {
    /// Comma-joined dependency IDs, as written to CSV and the store.
    pub fn depends_on_joined(&self) -> String {
        self.depends_on
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Parses a comma-joined dependency list. Blank input yields no
    /// dependencies.
    pub fn parse_depends_on(raw: &str) -> Result<Vec<u32>, std::num::ParseIntError> {
        raw.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::parse)
            .collect()
    }
}
