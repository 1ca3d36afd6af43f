use crate::task_commands::TaskCommands;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the session
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    #[command(flatten)]
    Tasks(TaskCommands),
}
