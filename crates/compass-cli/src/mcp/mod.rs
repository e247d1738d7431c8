//! MCP server implementation for Compass
//!
//! This module implements the Model Context Protocol server for Compass, so
//! AI assistants can generate schedules and browse saved projects.

use std::{future::Future, path::PathBuf};

use anyhow::Result;
use compass_core::Planner;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{CreatePlan, Id, ListProjects, McpResult};

/// MCP server for Compass
#[derive(Clone)]
pub struct CompassMcpServer {
    planner: Planner,
    export_root: PathBuf,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl CompassMcpServer {
    /// Create a new Compass MCP server. `out_dir` arguments are resolved
    /// inside `export_root`.
    pub fn new(planner: Planner, export_root: PathBuf) -> Self {
        Self {
            planner,
            export_root,
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers<'_> {
        handlers::McpHandlers::new(&self.planner, &self.export_root)
    }

    #[tool(
        name = "generate_plan",
        description = "Turn a free-text goal into a dated, sequential task schedule. The goal may include a duration hint ('in 10 days', 'in 3 weeks', 'by 2024-06-30'); otherwise the plan spans 14 days. Optional: start_date (YYYY-MM-DD, 'today', 'tomorrow', 'in N days'), max_days (upper bound on the timeline; 0 means no cap), save=true to store the plan as a project, out_dir (a relative folder inside the server's working directory) to write CSV, ICS and SVG chart files. Returns the task table with start and end dates."
    )]
    async fn generate_plan(&self, params: Parameters<CreatePlan>) -> McpResult {
        self.handlers().generate_plan(params).await
    }

    #[tool(
        name = "list_projects",
        description = "List saved projects, newest first, with their template, task count and date range. Use limit to show only the most recent ones."
    )]
    async fn list_projects(&self, params: Parameters<ListProjects>) -> McpResult {
        self.handlers().list_projects(params).await
    }

    #[tool(
        name = "show_project",
        description = "Show a saved project by ID with its full task schedule, durations and dependencies."
    )]
    async fn show_project(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_project(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for CompassMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "compass".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(r#"Compass turns a goal into a dated schedule of sequential tasks.

## How plans are built
- The goal picks a template by keyword: launch (product, launch, mvp, release), writing (write, blog, article, ebook, post), research (research, paper, study, experiment), or a generic template.
- The timeline length comes from the goal ('in N days', 'in N weeks', 'by YYYY-MM-DD') and defaults to 14 days. max_days caps it.
- Days are split across tasks in proportion to their effort; every task gets at least one day and each task depends on the one before it.

## Tools
- `generate_plan`: build a plan; pass save=true to keep it and a relative out_dir to export files
- `list_projects`: see saved projects
- `show_project`: open a saved project by ID"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: CompassMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Compass MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    // Set up signal handlers for graceful shutdown
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
