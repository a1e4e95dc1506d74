use clap::Subcommand;

use crate::cli::subcommands::{AuthCommands, PatientCommands, UserCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Login, logout, and session inspection.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Patient records.
    Patient {
        #[command(subcommand)]
        action: PatientCommands,
    },
    /// User accounts.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
}
