//! Database operations and SQLite management for saved plans.
//!
//! A saved plan is one `projects` row plus one `tasks` row per task. The
//! store is append-only: plans are inserted and read back, never updated.
//!
//! Schema setup runs once per process through [`Database::initialize`];
//! every later connection uses [`Database::open`].

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod project_queries;
pub mod task_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens the database and creates or upgrades the schema.
    pub fn initialize<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db = Self::open(path)?;
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a connection to an already initialized database.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;
        Ok(Self { connection })
    }
}
