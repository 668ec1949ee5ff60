use crate::args::InboxRole;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum MessageCommands {
    /// List messages in one inbox
    List {
        #[arg(long, value_enum)]
        role: InboxRole,
    },
    /// Merge several inboxes, de-duplicated by id
    Inbox {
        /// Inboxes to merge, in priority order
        #[arg(long, value_enum, value_delimiter = ',', required = true)]
        roles: Vec<InboxRole>,
    },
    /// Send a message
    Send {
        #[arg(long, value_enum)]
        role: InboxRole,
        /// Recipient user ID
        #[arg(long)]
        to: String,
        #[arg(long)]
        subject: Option<String>,
        #[arg(long)]
        body: String,
    },
    /// Mark a message as read
    Read {
        #[arg(long, value_enum)]
        role: InboxRole,
        /// Message ID
        id: String,
    },
    /// Unread message count
    Unread {
        #[arg(long, value_enum)]
        role: InboxRole,
    },
}
