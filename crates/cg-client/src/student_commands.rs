use crate::args::ListArgs;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum StudentCommands {
    /// Student directory
    List {
        #[command(flatten)]
        filters: ListArgs,
    },
}
