use clap::Subcommand;
use tm_core::{Status, StatusCommand};

/// Commands that run against a loaded board
#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// Show every lane with its tasks
    Board,

    /// List tasks in board order
    List {
        /// Only tasks in this lane: pending, progress, done or archived
        #[arg(long)]
        lane: Option<Status>,
    },

    /// Create a task
    Create {
        /// Lane to create the task in
        #[arg(long)]
        lane: Status,

        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD), ignored without a start date
        #[arg(long)]
        end: Option<String>,
    },

    /// Move a task to another lane, or delete it with "delete"
    Move {
        id: i64,

        /// pending, progress, done, archived or delete
        command: StatusCommand,
    },

    /// Delete a task
    Delete { id: i64 },
}
