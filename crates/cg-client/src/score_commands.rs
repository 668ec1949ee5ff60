use crate::args::ListArgs;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum ScoreCommands {
    /// List recorded scores
    List {
        #[command(flatten)]
        filters: ListArgs,
    },
    /// Record a score
    Save {
        #[arg(long)]
        student_id: String,
        /// Assessment category
        #[arg(long)]
        category: String,
        #[arg(long)]
        score: f64,
        #[arg(long)]
        remarks: Option<String>,
    },
}
