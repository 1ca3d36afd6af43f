//! tm - Task Master board CLI
//!
//! # Examples
//!
//! ```bash
//! # Log in and store the session under .tm/
//! tm login --email ada@example.test --password secret
//!
//! # Show every lane with its count
//! tm board
//!
//! # Create a task in the "In Progress" lane
//! tm create --lane progress --title "Write report" --description "Q1" --start 2024-02-01
//!
//! # Move or delete a task
//! tm move 12 done
//! tm delete 12
//! ```

use std::process::ExitCode;

use clap::Parser;
use tm_cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match tm_cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
