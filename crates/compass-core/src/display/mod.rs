//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]),
//! while collections and operation outcomes get newtype wrappers so the CLI
//! and the MCP server print exactly the same markdown:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Formatted     │
//! │  (Plan, Task)   │───▶│ & Result Types  │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: [`ProjectSummaries`]
//! - [`results`]: [`CreateResult`] for generate/save/export outcomes
//! - [`status`]: [`OperationStatus`] one-line confirmations
//! - [`models`]: Display implementations for domain models
//!
//! # Examples
//!
//! ```rust
//! use compass_core::{display::CreateResult, params::GeneratePlan, schedule::generate_as_of};
//! use jiff::civil::date;
//!
//! let plan = generate_as_of(
//!     &GeneratePlan {
//!         goal: "Write a blog post in 6 days".to_string(),
//!         ..Default::default()
//!     },
//!     date(2024, 5, 1),
//! )
//! .unwrap();
//!
//! let output = CreateResult::new(plan).with_project_id(3).to_string();
//! assert!(output.contains("Saved project with ID: 3"));
//! assert!(output.contains("| 1 | Define outline & audience |"));
//! ```

pub mod collections;
pub mod models;
pub mod results;
pub mod status;

pub use collections::ProjectSummaries;
pub use results::CreateResult;
pub use status::OperationStatus;
