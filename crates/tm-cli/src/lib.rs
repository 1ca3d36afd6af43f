//! tm-cli
//!
//! Command-line front end for the task board. Exposed as a library so the
//! argument parsing and rendering can be tested without a server.

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod render;
pub mod task_commands;


pub use app::run;
pub use cli::Cli;
pub use error::{CliError, Result as CliResult};
