use clap::{Args, Subcommand};

/// Session commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Exchange email and password for a session token.
    Login(AuthLoginArgs),
    /// Forget the stored session token.
    Logout,
    /// Show the stored session and its role, without contacting the server.
    Status,
    /// Ask the auth service whether the stored token is still accepted.
    Validate,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long)]
    pub email: String,
    /// Password (prefer --password-stdin to keep it out of shell history).
    #[arg(long, conflicts_with = "password_stdin", required_unless_present = "password_stdin")]
    pub password: Option<String>,
    /// Read the password from the first line of stdin.
    #[arg(long)]
    pub password_stdin: bool,
}
