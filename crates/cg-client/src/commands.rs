use crate::{
    admin_commands::AdminCommands, appointment_commands::AppointmentCommands, args::RangeArgs,
    auth_commands::AuthCommands, intake_commands::IntakeCommands,
    message_commands::MessageCommands, referral_commands::ReferralCommands,
    score_commands::ScoreCommands, session_commands::SessionCommands,
    student_commands::StudentCommands, watch_commands::WatchCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Login, registration and logout
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },

    /// Locally stored session
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },

    /// Role-scoped messages
    Message {
        #[command(subcommand)]
        action: MessageCommands,
    },

    /// Counseling intake requests
    Intake {
        #[command(subcommand)]
        action: IntakeCommands,
    },

    /// Faculty referrals
    Referral {
        #[command(subcommand)]
        action: ReferralCommands,
    },

    /// Appointments
    Appointment {
        #[command(subcommand)]
        action: AppointmentCommands,
    },

    /// Admin analytics summary
    Analytics {
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Manual assessment scores
    Score {
        #[command(subcommand)]
        action: ScoreCommands,
    },

    /// Student directory
    Student {
        #[command(subcommand)]
        action: StudentCommands,
    },

    /// Admin operations
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },

    /// Poll a counter until interrupted
    Watch {
        #[command(subcommand)]
        action: WatchCommands,
    },
}
