//! Data models for generated plans and their tasks.
//!
//! A [`Plan`] is built once, in full, by [`crate::schedule`] and is treated
//! as read-only by everything downstream: the exporters in
//! [`crate::export`], the store in [`crate::db`] and the markdown formatting
//! in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use compass_core::models::{Plan, Task, TemplateKind};
//! use jiff::civil::date;
//!
//! let plan = Plan {
//!     goal: "Ship the newsletter".to_string(),
//!     created_on: date(2024, 1, 1),
//!     start_date: date(2024, 1, 1),
//!     total_days: 2,
//!     template: TemplateKind::Generic,
//!     tasks: vec![Task {
//!         id: 1,
//!         title: "Clarify the goal".to_string(),
//!         duration_days: 2,
//!         earliest_start: date(2024, 1, 1),
//!         latest_end: date(2024, 1, 2),
//!         depends_on: vec![],
//!         notes: String::new(),
//!     }],
//! };
//! assert_eq!(plan.end_date(), date(2024, 1, 2));
//! ```

pub mod plan;
pub mod project;
pub mod task;
pub mod template;

#[cfg(test)]
mod tests;

pub use plan::Plan;
pub use project::{ProjectSummary, SavedProject};
pub use task::Task;
pub use template::{TaskTemplate, TemplateKind};
