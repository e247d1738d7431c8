//! MCP tool handlers implementation

use std::path::{Component, Path, PathBuf};

use compass_core::{
    display::{CreateResult, OperationStatus},
    params as core, Planner, PlannerError,
};
use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

// Core params get their JsonSchema from the `schema` feature; the wrapper
// adds the transparent serde container the tool router deserializes into.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type Id = McpParams<core::Id>;
pub type CreatePlan = McpParams<core::CreatePlan>;
pub type ListProjects = McpParams<core::ListProjects>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers<'a> {
    planner: &'a Planner,
    export_root: &'a Path,
}

impl<'a> McpHandlers<'a> {
    pub fn new(planner: &'a Planner, export_root: &'a Path) -> Self {
        Self {
            planner,
            export_root,
        }
    }

    pub async fn generate_plan(&self, Parameters(params): Parameters<CreatePlan>) -> McpResult {
        debug!("generate_plan: {params:?}");

        let mut params = params.as_ref().clone();
        params.out_dir = params
            .out_dir
            .map(|requested| resolve_out_dir(self.export_root, &requested))
            .transpose()?;

        let result: CreateResult = self
            .planner
            .create_plan(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to generate plan", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn list_projects(&self, Parameters(params): Parameters<ListProjects>) -> McpResult {
        debug!("list_projects: {params:?}");

        let projects = self
            .planner
            .list_projects(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list projects", &e))?;

        let result = format!("# Saved Projects\n\n{projects}");
        Ok(CallToolResult::success(vec![Content::text(result)]))
    }

    pub async fn show_project(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_project: {params:?}");

        match self.planner.show_project(params.as_ref()).await {
            Ok(project) => Ok(CallToolResult::success(vec![Content::text(
                project.to_string(),
            )])),
            // A missing project is a tool-level failure the model can act on,
            // not a protocol error.
            Err(e @ PlannerError::ProjectNotFound { .. }) => {
                let status = OperationStatus::failure(format!(
                    "{e}. Use 'list_projects' to see saved project IDs."
                ));
                Ok(CallToolResult::error(vec![Content::text(
                    status.to_string(),
                )]))
            }
            Err(e) => Err(to_mcp_error("Failed to show project", &e)),
        }
    }
}

/// Places a client-supplied export folder under `root`.
///
/// Only plain relative paths are accepted; absolute paths and `..` segments
/// are rejected so a tool call cannot write outside the server's folder.
fn resolve_out_dir(root: &Path, requested: &Path) -> Result<PathBuf, ErrorData> {
    let escapes = requested.components().any(|component| {
        matches!(
            component,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes || requested.as_os_str().is_empty() {
        return Err(ErrorData::invalid_params(
            format!(
                "Invalid out_dir '{}': use a relative folder inside the server's working directory",
                requested.display()
            ),
            None,
        ));
    }
    Ok(root.join(requested))
}
