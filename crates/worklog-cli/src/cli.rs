use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "worklog")]
#[command(about = "Worklog - track time spent on tasks", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the worklog API
    #[arg(long, env = "WORKLOG_API_URL", default_value = "http://localhost:8080")]
    pub api_url: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage users
    Users {
        #[command(subcommand)]
        command: UserCommands,
    },

    /// Start a timer for a user on a task
    Start {
        /// User ID
        user_id: i64,

        /// Task ID
        task_id: i64,
    },

    /// Stop the running timer for a user on a task
    Stop {
        /// User ID
        user_id: i64,

        /// Task ID
        task_id: i64,
    },

    /// Show worklogs of a user, longest first
    Worklogs {
        /// User ID
        user_id: i64,

        /// Only logs started at or after this RFC 3339 time
        #[arg(long)]
        start: Option<String>,

        /// Only logs ended at or before this RFC 3339 time
        #[arg(long)]
        end: Option<String>,
    },

    /// Show statistics
    Stats,

    /// Start API server
    Serve {
        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,
    },
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// List users
    List {
        /// Filter by passport number
        #[arg(long)]
        passport: Option<String>,

        /// Number of users to skip
        #[arg(long, default_value = "0")]
        skip: usize,

        /// Limit number of results
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Create a user
    Create {
        /// Passport number
        passport: String,
    },

    /// Change a user's passport number
    Update {
        /// User ID
        id: i64,

        /// New passport number
        passport: String,
    },

    /// Delete a user
    Delete {
        /// User ID
        id: i64,
    },
}
