use crate::args::ListArgs;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum AppointmentCommands {
    /// Counselor calendar
    List {
        #[command(flatten)]
        filters: ListArgs,
    },
    /// Own appointments (student)
    Mine,
}
