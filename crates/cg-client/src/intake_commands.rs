use crate::args::ListArgs;

use chrono::NaiveDate;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum IntakeCommands {
    /// Submit a counseling request (student)
    Submit {
        #[arg(long)]
        concern: String,
        #[arg(long)]
        description: Option<String>,
        /// Urgency (e.g., low, medium, high)
        #[arg(long)]
        urgency: Option<String>,
        /// Preferred date (YYYY-MM-DD)
        #[arg(long)]
        preferred_date: Option<NaiveDate>,
    },
    /// Own requests (student)
    Mine,
    /// Request queue (counselor)
    List {
        #[command(flatten)]
        filters: ListArgs,
    },
    /// Change a request's status (counselor)
    Update {
        /// Intake request ID
        id: String,
        #[arg(long)]
        status: String,
        #[arg(long)]
        notes: Option<String>,
    },
}
