use clap::Subcommand;

#[derive(Subcommand)]
pub enum SessionCommands {
    /// Print the stored session with the token masked
    Show,
    /// Print the dashboard path for the stored user's role
    Home,
    /// Forget the stored session without contacting the server
    Clear,
}
