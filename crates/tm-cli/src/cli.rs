use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tm")]
#[command(about = "Task Master kanban board")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Task API URL (overrides api.base_url from .tm/config.toml)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Pretty-print JSON output (implies --json)
    #[arg(long, global = true)]
    pub pretty: bool,
}

impl Cli {
    pub fn wants_json(&self) -> bool {
        self.json || self.pretty
    }
}
