//! High-level planner API for generating, exporting and saving plans.
//!
//! The [`Planner`] is the entry point shared by the CLI and the MCP server:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Interfaces    │    │     Planner     │    │   schedule/     │
//! │  (CLI, MCP)     │───▶│ (plan_ops,      │───▶│   export/       │
//! │                 │    │  project_ops)   │    │   db/           │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Generation is pure and synchronous. Store and file work run on tokio's
//! blocking pool, one SQLite connection per call, so the planner holds no
//! shared connection and needs no locking.
//!
//! # Examples
//!
//! ```rust,no_run
//! use compass_core::{PlannerBuilder, params::GeneratePlan};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("/tmp/compass.db"))
//!     .build()
//!     .await?;
//!
//! let plan = planner.generate_plan(&GeneratePlan {
//!     goal: "Launch a product in 2 weeks".to_string(),
//!     start_date: Some("2024-01-01".to_string()),
//!     max_days: None,
//! })?;
//! let project_id = planner.save_plan(&plan).await?;
//! println!("Saved {} tasks as project {project_id}", plan.tasks.len());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

pub mod builder;
pub mod plan_ops;
pub mod project_ops;


pub use builder::PlannerBuilder;

/// Main planner interface.
#[derive(Debug, Clone)]
pub struct Planner {
    pub(crate) db_path: PathBuf,
}

impl Planner {
    /// Creates a planner for an already initialized database.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the project database.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }
}
