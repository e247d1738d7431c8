use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{GenerateArgs, ProjectCommands};

/// Turn a free-text goal into a dated task schedule
///
/// Compass reads a goal such as "Launch a product in 2 weeks", picks a task
/// template, spreads the available days across the tasks and writes the
/// schedule out as CSV, an iCalendar file and SVG charts. Plans can be saved
/// to a local project database, and the same operations are available to AI
/// assistants through an MCP (Model Context Protocol) server.
#[derive(Parser)]
#[command(version, about, name = "compass")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/compass/compass.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Compass CLI
///
/// - `generate`: build a schedule from a goal, export it and optionally save it
/// - `project`: browse saved projects
/// - `serve`: start the MCP server for AI assistant integration
///
/// Without a command, saved projects are listed.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a schedule from a goal
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Browse saved projects
    #[command(alias = "p")]
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Start the MCP server
    Serve,
}
