//! Parameter structures for compass operations
//!
//! These structures are shared by every interface (CLI, MCP) and carry no
//! framework-specific derives apart from serde and, behind the `schema`
//! feature, `schemars::JsonSchema`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Interface layers convert their own argument types into these with
//! `From`/`.into()`. Dates travel as strings and are parsed by the core so
//! that every interface reports the same validation errors.

use std::path::PathBuf;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Generic parameters for operations requiring just an ID.
///
/// Used for operations like show_project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the saved project
    pub id: u64,
}

/// Parameters for generating a plan from a goal.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct GeneratePlan {
    /// Free-text goal, e.g. "Launch a product in 2 weeks"
    pub goal: String,
    /// First day of the plan: YYYY-MM-DD, "today", "tomorrow" or "in N days".
    /// Defaults to today.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Upper bound on the timeline length in days; 0 means no cap
    #[serde(default)]
    pub max_days: Option<u32>,
}

/// Parameters for generating a plan and handing it to the exporters and the
/// store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreatePlan {
    #[serde(flatten)]
    pub generate: GeneratePlan,
    /// Save the plan to the project database
    #[serde(default)]
    pub save: bool,
    /// Folder to write CSV, ICS and chart files to. Nothing is exported
    /// when omitted.
    #[serde(default)]
    pub out_dir: Option<PathBuf>,
}

/// Parameters for listing saved projects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListProjects {
    /// Show at most this many projects, newest first
    #[serde(default)]
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_plan_flattens_generate_fields() {
        let params: CreatePlan = serde_json::from_str(
            r#"{"goal": "Launch a product", "max_days": 10, "save": true}"#,
        )
        .expect("Failed to parse params");

        assert_eq!(params.generate.goal, "Launch a product");
        assert_eq!(params.generate.max_days, Some(10));
        assert_eq!(params.generate.start_date, None);
        assert!(params.save);
        assert!(params.out_dir.is_none());
    }

    #[test]
    fn test_generate_plan_optional_fields_default() {
        let params: GeneratePlan =
            serde_json::from_str(r#"{"goal": "Write a blog post"}"#).expect("Failed to parse");
        assert_eq!(
            params,
            GeneratePlan {
                goal: "Write a blog post".to_string(),
                start_date: None,
                max_days: None,
            }
        );
    }

    #[test]
    fn test_list_projects_default_has_no_limit() {
        let params: ListProjects = serde_json::from_str("{}").expect("Failed to parse");
        assert!(params.limit.is_none());
    }
}
