//! Task inserts and queries.

use rusqlite::{params, types::Type, Transaction};

use super::project_queries::date_column;
use crate::{
    error::{DatabaseResultExt, Result},
    models::Task,
};

const INSERT_TASK_SQL: &str = "INSERT INTO tasks (project_id, position, title, duration_days, earliest_start, latest_end, depends_on, notes) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const SELECT_TASKS_SQL: &str = "SELECT title, duration_days, earliest_start, latest_end, depends_on, notes FROM tasks WHERE project_id = ?1 ORDER BY position, id";

impl super::Database {
    /// Inserts one task row inside an open transaction.
    pub(super) fn insert_task(
        tx: &Transaction<'_>,
        project_id: u64,
        position: u32,
        task: &Task,
    ) -> Result<()> {
        tx.execute(
            INSERT_TASK_SQL,
            params![
                project_id as i64,
                position,
                task.title,
                task.duration_days,
                task.earliest_start.to_string(),
                task.latest_end.to_string(),
                task.depends_on_joined(),
                task.notes,
            ],
        )
        .db_context("Failed to insert task")?;
        Ok(())
    }

    /// Retrieves the tasks of a project in plan order.
    ///
    /// Task IDs are renumbered 1..n in that order.
    pub fn get_tasks(&self, project_id: u64) -> Result<Vec<Task>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TASKS_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(params![project_id as i64], |row| {
                let raw_depends: String = row.get(4)?;
                let depends_on = Task::parse_depends_on(&raw_depends).map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
                })?;

                Ok(Task {
                    id: 0,
                    title: row.get(0)?,
                    duration_days: row.get(1)?,
                    earliest_start: date_column(row, 2)?,
                    latest_end: date_column(row, 3)?,
                    depends_on,
                    notes: row.get(5)?,
                })
            })
            .db_context("Failed to query tasks")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read task rows")?;

        Ok(rows
            .into_iter()
            .enumerate()
            .map(|(index, task)| Task {
                id: index as u32 + 1,
                ..task
            })
            .collect())
    }
}
