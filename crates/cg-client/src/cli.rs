use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "cg")]
#[command(about = "Campus guidance API client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// API base URL (overrides CG_API_BASE_URL and config.toml)
    #[arg(long, global = true)]
    pub(crate) base_url: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
