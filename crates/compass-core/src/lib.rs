//! Core library for the Compass goal planner.
//!
//! This crate turns a free-text goal such as "Launch a product in 2 weeks"
//! into a dated, sequential schedule of tasks, and provides the exporters and
//! the project store that persist it.
//!
//! # Pipeline
//!
//! ```text
//! goal text ──▶ duration hint ──▶ template ──▶ allocation ──▶ dated tasks
//!                (schedule::duration) (catalog)  (allocation)   (sequencing)
//! ```
//!
//! - [`schedule`]: goal parsing, template catalog, day allocation and
//!   sequencing
//! - [`export`]: CSV, iCalendar and SVG chart files
//! - [`db`]: SQLite project store
//! - [`planner`]: async facade shared by the CLI and the MCP server
//!
//! # Display Architecture
//!
//! Domain models implement [`std::fmt::Display`] as markdown, and the
//! [`display`] wrappers format collections and operation outcomes, so every
//! interface prints the same output.
//!
//! # Quick Start
//!
//! ```rust
//! use compass_core::{params::GeneratePlan, schedule::generate_as_of};
//! use jiff::civil::date;
//!
//! let plan = generate_as_of(
//!     &GeneratePlan {
//!         goal: "Launch a product in 2 weeks".to_string(),
//!         start_date: Some("2024-01-01".to_string()),
//!         max_days: None,
//!     },
//!     date(2023, 12, 20),
//! )?;
//!
//! assert_eq!(plan.tasks.len(), 8);
//! assert_eq!(plan.end_date(), date(2024, 1, 14));
//! # Ok::<(), compass_core::PlannerError>(())
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod params;
pub mod planner;
pub mod schedule;

// Re-export commonly used types
pub use db::Database;
pub use display::{CreateResult, OperationStatus, ProjectSummaries};
pub use error::{PlannerError, Result};
pub use export::{export_all, ExportPaths};
pub use models::{Plan, ProjectSummary, SavedProject, Task, TaskTemplate, TemplateKind};
pub use params::{CreatePlan, GeneratePlan, Id, ListProjects};
pub use planner::{Planner, PlannerBuilder};
pub use schedule::{generate, generate_as_of};
