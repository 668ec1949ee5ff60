use crate::args::ListArgs;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum ReferralCommands {
    /// File a referral (faculty)
    Create {
        #[arg(long)]
        student_name: String,
        #[arg(long)]
        student_id: Option<String>,
        #[arg(long)]
        reason: String,
        #[arg(long)]
        urgency: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Own referrals (faculty)
    Mine,
    /// All referrals (counselor)
    List {
        #[command(flatten)]
        filters: ListArgs,
    },
    /// Change a referral's status (counselor)
    Update {
        /// Referral ID
        id: String,
        #[arg(long)]
        status: String,
        #[arg(long)]
        notes: Option<String>,
    },
}
