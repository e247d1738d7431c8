//! Command-line argument wrappers and command handlers
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types with `From`, so core params stay free of clap:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```
//!
//! [`Cli`] runs the commands against a [`Planner`] and prints the markdown
//! produced by the core `Display` implementations through the
//! [`TerminalRenderer`].

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use compass_core::{
    params::{CreatePlan, GeneratePlan, Id, ListProjects},
    Planner,
};
use log::debug;

use crate::renderer::TerminalRenderer;

/// Generate a schedule from a goal
///
/// The goal may carry a duration hint: "in 10 days", "in 3 weeks" or
/// "by 2024-06-30". Without one the schedule spans 14 days.
#[derive(Args)]
pub struct GenerateArgs {
    /// Free-text goal, e.g. "Launch a product in 2 weeks"
    pub goal: String,
    /// First day of the plan: YYYY-MM-DD, "today", "tomorrow" or "in N days"
    #[arg(short, long = "start", value_name = "DATE")]
    pub start: Option<String>,
    /// Upper bound on the timeline length in days; 0 means no cap
    #[arg(long, value_name = "N")]
    pub max_days: Option<u32>,
    /// Folder to write plan.csv, plan.ics and the SVG charts to
    #[arg(short, long, value_name = "DIR", default_value = "output_plan")]
    pub out: PathBuf,
    /// Save the plan to the project database
    #[arg(long)]
    pub save: bool,
    /// Print the plan without writing any files
    #[arg(long)]
    pub no_export: bool,
}

impl From<GenerateArgs> for CreatePlan {
    fn from(val: GenerateArgs) -> Self {
        CreatePlan {
            generate: GeneratePlan {
                goal: val.goal,
                start_date: val.start,
                max_days: val.max_days,
            },
            save: val.save,
            out_dir: (!val.no_export).then_some(val.out),
        }
    }
}

/// List saved projects
#[derive(Args)]
pub struct ListProjectsArgs {
    /// Show at most this many projects, newest first
    #[arg(short = 'n', long)]
    pub limit: Option<u32>,
}

impl From<ListProjectsArgs> for ListProjects {
    fn from(val: ListProjectsArgs) -> Self {
        ListProjects { limit: val.limit }
    }
}

/// Show a saved project with its full schedule
#[derive(Args)]
pub struct ShowProjectArgs {
    /// ID of the project to display
    pub id: u64,
}

impl From<ShowProjectArgs> for Id {
    fn from(val: ShowProjectArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List saved projects, newest first
    #[command(alias = "l")]
    List(ListProjectsArgs),
    /// Show a saved project
    #[command(alias = "s")]
    Show(ShowProjectArgs),
}

/// Runs CLI commands and renders their output.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn generate(&self, args: GenerateArgs) -> Result<()> {
        let params = CreatePlan::from(args);
        debug!("generate: {params:?}");

        let result = self
            .planner
            .create_plan(&params)
            .await
            .context("Failed to generate plan")?;

        self.renderer.render(&result.to_string())
    }

    pub async fn handle_project_command(&self, command: ProjectCommands) -> Result<()> {
        match command {
            ProjectCommands::List(args) => self.list_projects(&args.into()).await,
            ProjectCommands::Show(args) => self.show_project(&args.into()).await,
        }
    }

    pub async fn list_projects(&self, params: &ListProjects) -> Result<()> {
        let projects = self
            .planner
            .list_projects(params)
            .await
            .context("Failed to list projects")?;

        self.renderer
            .render(&format!("# Saved Projects\n\n{projects}"))
    }

    async fn show_project(&self, params: &Id) -> Result<()> {
        let project = self
            .planner
            .show_project(params)
            .await
            .context("Failed to show project")?;

        self.renderer.render(&project.to_string())
    }
}
