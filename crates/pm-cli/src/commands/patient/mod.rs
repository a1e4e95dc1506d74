mod create;
mod delete;
mod list;
mod update;

use pm_core::entities::Patient;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PatientCommands;
use crate::context::AppContext;
use crate::output::Tabular;

/// Handle `pm patient <subcommand>`.
pub async fn handle(
    action: &PatientCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PatientCommands::List => list::handle(ctx, flags).await,
        PatientCommands::Create(args) => create::handle(args, ctx, flags).await,
        PatientCommands::Update(args) => update::handle(args, ctx, flags).await,
        PatientCommands::Delete(args) => delete::handle(args, ctx, flags).await,
    }
}

impl Tabular for Patient {
    const HEADERS: &'static [&'static str] = &["id", "name", "email", "address", "dob"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.email.clone(),
            self.address.clone(),
            self.date_of_birth_display().to_string(),
        ]
    }
}
