//! Compass CLI Application
//!
//! Command-line interface for the compass goal planner.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use compass_core::{params::ListProjects, PlannerBuilder};
use log::info;
use mcp::{run_stdio_server, CompassMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Compass started");

    match command {
        Some(Generate(args)) => Cli::new(planner, renderer).generate(args).await,
        Some(Project { command }) => {
            Cli::new(planner, renderer)
                .handle_project_command(command)
                .await
        }
        Some(Serve) => {
            info!("Starting Compass MCP server");
            let export_root =
                std::env::current_dir().context("Failed to resolve working directory")?;
            run_stdio_server(CompassMcpServer::new(planner, export_root))
                .await
                .context("MCP server failed")
        }
        None => {
            Cli::new(planner, renderer)
                .list_projects(&ListProjects::default())
                .await
        }
    }
}
