use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `pm` binary.
#[derive(Debug, Parser)]
#[command(name = "pm", version, about = "Patient management API client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Keep the session token in memory only for this invocation
    #[arg(long, global = true)]
    pub ephemeral: bool,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            ephemeral: self.ephemeral,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};
    use crate::cli::subcommands::user::RoleArg;
    use crate::cli::subcommands::{AuthCommands, PatientCommands, UserCommands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["pm", "--format", "table", "--verbose", "patient", "list"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Patient {
                action: PatientCommands::List
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["pm", "auth", "status", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(!cli.global_flags().ephemeral);
    }

    #[test]
    fn login_requires_a_password_source() {
        assert!(Cli::try_parse_from(["pm", "auth", "login", "--email", "a@b.com"]).is_err());
        assert!(
            Cli::try_parse_from([
                "pm",
                "auth",
                "login",
                "--email",
                "a@b.com",
                "--password-stdin"
            ])
            .is_ok()
        );
    }

    #[test]
    fn login_rejects_both_password_sources() {
        let parsed = Cli::try_parse_from([
            "pm",
            "auth",
            "login",
            "--email",
            "a@b.com",
            "--password",
            "password123",
            "--password-stdin",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn patient_create_requires_all_fields() {
        let parsed = Cli::try_parse_from([
            "pm", "patient", "create", "--name", "Jane", "--email", "jane@example.com",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn patient_update_fields_are_optional() {
        let cli = Cli::try_parse_from(["pm", "patient", "update", "p1", "--address", "2 Side St"])
            .expect("cli should parse");
        let Commands::Patient {
            action: PatientCommands::Update(args),
        } = cli.command
        else {
            panic!("expected patient update");
        };
        assert_eq!(args.id, "p1");
        assert_eq!(args.address.as_deref(), Some("2 Side St"));
        assert!(args.name.is_none());
    }

    #[test]
    fn user_role_defaults_to_user_and_ignores_case() {
        let cli = Cli::try_parse_from([
            "pm", "user", "create", "--email", "n@test.com", "--password", "password123",
        ])
        .expect("cli should parse");
        let Commands::User {
            action: UserCommands::Create(args),
        } = cli.command
        else {
            panic!("expected user create");
        };
        assert_eq!(args.role, RoleArg::User);

        let cli = Cli::try_parse_from([
            "pm", "user", "create", "--email", "n@test.com", "--password", "password123",
            "--role", "ADMIN",
        ])
        .expect("cli should parse");
        let Commands::User {
            action: UserCommands::Create(args),
        } = cli.command
        else {
            panic!("expected user create");
        };
        assert_eq!(args.role, RoleArg::Admin);
    }

    #[test]
    fn logout_parses() {
        let cli = Cli::try_parse_from(["pm", "auth", "logout"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Auth {
                action: AuthCommands::Logout
            }
        ));
    }
}
