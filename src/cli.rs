//! Command-line interface definition for Supatask
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for registration, sign-in, and the todo, project,
//! and note collections.

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Supatask - todo, project, and note client for a Supabase backend
///
/// Every invocation is one round trip: commands that write data sign in
/// first using the given credentials, perform the operation, and exit.
#[derive(Parser, Debug, Clone)]
#[command(name = "supatask")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Account email (also read from SUPATASK_EMAIL)
    #[arg(long, env = "SUPATASK_EMAIL", global = true)]
    pub email: Option<String>,

    /// Account password (also read from SUPATASK_PASSWORD)
    #[arg(long, env = "SUPATASK_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Supatask
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Register a new account
    Register,

    /// Sign in and print the account's user id
    Login,

    /// Manage todos
    Todos {
        /// Todo subcommand
        #[command(subcommand)]
        command: TodoCommand,
    },

    /// Manage projects
    Projects {
        /// Project subcommand
        #[command(subcommand)]
        command: ProjectCommand,
    },

    /// Manage notes
    Notes {
        /// Note subcommand
        #[command(subcommand)]
        command: NoteCommand,
    },
}

/// Todo subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum TodoCommand {
    /// List todos, newest first
    List {
        /// Only todos belonging to this project
        #[arg(short, long)]
        project: Option<Uuid>,
    },

    /// Add a todo
    Add {
        /// Title of the todo
        title: String,

        /// Attach the todo to this project
        #[arg(short, long)]
        project: Option<Uuid>,
    },

    /// Set a todo's completion flag
    Toggle {
        /// Id of the todo
        id: Uuid,

        /// New completion state
        #[arg(long)]
        done: bool,
    },

    /// Delete a todo
    Rm {
        /// Id of the todo
        id: Uuid,
    },
}

/// Project subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ProjectCommand {
    /// List projects, newest first
    List,

    /// Add a project
    Add {
        /// Name of the project
        name: String,
    },

    /// Delete a project
    Rm {
        /// Id of the project
        id: Uuid,
    },
}

/// Note subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum NoteCommand {
    /// List notes, newest first
    List {
        /// Only notes belonging to this project
        #[arg(short, long)]
        project: Option<Uuid>,
    },

    /// Add a note
    Add {
        /// Title of the note
        title: String,

        /// Body text of the note
        #[arg(short, long)]
        body: String,

        /// Attach the note to this project
        #[arg(short, long)]
        project: Option<Uuid>,
    },

    /// Delete a note
    Rm {
        /// Id of the note
        id: Uuid,
    },
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
