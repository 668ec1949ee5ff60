use clap::Subcommand;

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Log in and store the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Requested role (e.g., student)
        #[arg(long)]
        role: Option<String>,
    },
    /// Show the current user as the server sees it
    Me,
    /// Re-fetch the current user into the stored session
    Refresh,
    /// Log out (the local session is always cleared)
    Logout,
}
