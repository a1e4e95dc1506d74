use clap::{Args, Subcommand, ValueEnum};

/// Account administration (ADMIN only).
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// Create a login for another user.
    Create(UserCreateArgs),
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum RoleArg {
    #[default]
    User,
    Admin,
}

impl RoleArg {
    #[must_use]
    pub const fn as_claim(self) -> &'static str {
        match self {
            Self::User => pm_core::Role::USER,
            Self::Admin => pm_core::Role::ADMIN,
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct UserCreateArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long, value_enum, default_value_t = RoleArg::User, ignore_case = true)]
    pub role: RoleArg,
}
