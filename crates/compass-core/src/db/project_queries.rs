//! Project inserts and queries.

use jiff::civil::Date;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{Plan, ProjectSummary, SavedProject, TemplateKind},
};

const INSERT_PROJECT_SQL: &str = "INSERT INTO projects (goal, created_on, start_date, template, total_days) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_PROJECT_SQL: &str =
    "SELECT goal, created_on, start_date, template, total_days FROM projects WHERE id = ?1";
const SELECT_SUMMARIES_SQL: &str = "SELECT id, goal, created_on, start_date, template, task_count, end_date FROM project_summaries ORDER BY id DESC";

impl super::Database {
    /// Saves a plan and its tasks in a single transaction and returns the new
    /// project ID.
    pub fn insert_plan(&mut self, plan: &Plan) -> Result<u64> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_PROJECT_SQL,
            params![
                plan.goal,
                plan.created_on.to_string(),
                plan.start_date.to_string(),
                plan.template.as_str(),
                plan.total_days,
            ],
        )
        .db_context("Failed to insert project")?;

        let project_id = tx.last_insert_rowid() as u64;

        for (position, task) in plan.tasks.iter().enumerate() {
            Self::insert_task(&tx, project_id, position as u32, task)?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(project_id)
    }

    /// Retrieves a saved project with its tasks.
    pub fn get_project(&self, id: u64) -> Result<Option<SavedProject>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PROJECT_SQL)
            .db_context("Failed to prepare query")?;

        let plan = stmt
            .query_row(params![id as i64], |row| {
                Ok(Plan {
                    goal: row.get(0)?,
                    created_on: date_column(row, 1)?,
                    start_date: date_column(row, 2)?,
                    template: template_column(row, 3)?,
                    total_days: row.get(4)?,
                    tasks: Vec::new(),
                })
            })
            .optional()
            .db_context("Failed to query project")?;

        let Some(mut plan) = plan else {
            return Ok(None);
        };

        plan.tasks = self.get_tasks(id)?;
        Ok(Some(SavedProject { id, plan }))
    }

    /// Lists saved projects, newest first.
    pub fn list_projects(&self, limit: Option<u32>) -> Result<Vec<ProjectSummary>> {
        let query = match limit {
            Some(limit) => format!("{SELECT_SUMMARIES_SQL} LIMIT {limit}"),
            None => SELECT_SUMMARIES_SQL.to_string(),
        };

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let summaries = stmt
            .query_map([], |row| {
                let end_date = match row.get::<_, Option<String>>(6)? {
                    Some(raw) => Some(parse_date(6, &raw)?),
                    None => None,
                };

                Ok(ProjectSummary {
                    id: row.get::<_, i64>(0)? as u64,
                    goal: row.get(1)?,
                    created_on: date_column(row, 2)?,
                    start_date: date_column(row, 3)?,
                    template: template_column(row, 4)?,
                    task_count: row.get(5)?,
                    end_date,
                })
            })
            .db_context("Failed to query projects")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read project rows")?;

        Ok(summaries)
    }
}

/// Reads an ISO date stored as TEXT.
pub(super) fn date_column(row: &Row<'_>, index: usize) -> rusqlite::Result<Date> {
    let raw: String = row.get(index)?;
    parse_date(index, &raw)
}

fn parse_date(index: usize, raw: &str) -> rusqlite::Result<Date> {
    raw.parse::<Date>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

fn template_column(row: &Row<'_>, index: usize) -> rusqlite::Result<TemplateKind> {
    let raw: String = row.get(index)?;
    raw.parse::<TemplateKind>().map_err(|message| {
        rusqlite::Error::FromSqlConversionFailure(
            index,
            Type::Text,
            Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, message)),
        )
    })
}
