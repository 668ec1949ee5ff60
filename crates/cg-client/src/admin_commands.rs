use crate::args::{ListArgs, RangeArgs};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum AdminCommands {
    /// List user accounts
    Users {
        #[command(flatten)]
        filters: ListArgs,
    },
    /// Users, messages and analytics in one call; partial failures are reported per source
    Overview {
        #[command(flatten)]
        range: RangeArgs,
    },
}
