//! Database schema initialization and migrations.

use log::info;

use crate::error::{DatabaseResultExt, Result};

/// Columns added after the first schema version: (table, column, definition).
const ADDED_COLUMNS: [(&str, &str, &str); 3] = [
    ("projects", "template", "TEXT NOT NULL DEFAULT 'generic'"),
    ("projects", "total_days", "INTEGER NOT NULL DEFAULT 0"),
    ("tasks", "position", "INTEGER NOT NULL DEFAULT 0"),
];

/// Objects that depend on migrated columns, created after migrations run.
const DERIVED_SCHEMA_SQL: &str = "
CREATE INDEX IF NOT EXISTS idx_tasks_project_position ON tasks(project_id, position);

CREATE VIEW IF NOT EXISTS project_summaries AS
SELECT
    p.id AS id,
    p.goal AS goal,
    p.created_on AS created_on,
    p.start_date AS start_date,
    p.template AS template,
    COUNT(t.id) AS task_count,
    MAX(t.latest_end) AS end_date
FROM projects p
LEFT JOIN tasks t ON t.project_id = p.id
GROUP BY p.id;
";

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        self.connection
            .execute_batch(DERIVED_SCHEMA_SQL)
            .db_context("Failed to create indexes and views")?;

        Ok(())
    }

    /// Adds columns missing from databases created by older versions.
    fn apply_migrations(&self) -> Result<()> {
        for (table, column, definition) in ADDED_COLUMNS {
            if self.has_column(table, column)? {
                continue;
            }

            info!("migrating database: adding {table}.{column}");
            self.connection
                .execute(
                    &format!("ALTER TABLE {table} ADD COLUMN {column} {definition}"),
                    [],
                )
                .db_context(&format!("Failed to add {column} column to {table} table"))?;
        }

        Ok(())
    }

    fn has_column(&self, table: &str, column: &str) -> Result<bool> {
        self.connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2",
                [table, column],
                |row| row.get::<_, i64>(0),
            )
            .map(|count| count > 0)
            .db_context("Failed to inspect table columns")
    }
}
