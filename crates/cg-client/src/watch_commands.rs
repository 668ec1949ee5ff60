use crate::args::InboxRole;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum WatchCommands {
    /// Print the unread count whenever it changes; press Enter to refresh now
    Unread {
        #[arg(long, value_enum)]
        role: InboxRole,
        /// Poll interval in seconds (defaults to polling.interval_secs)
        #[arg(long)]
        interval: Option<u64>,
    },
}
