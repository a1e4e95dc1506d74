use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::patient::PatientDeleteArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct PatientDeleteResponse {
    status: &'static str,
    id: String,
}

pub async fn handle(
    args: &PatientDeleteArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if args.id.trim().is_empty() {
        anyhow::bail!("Delete patient failed: patient id is required");
    }
    if !args.yes {
        anyhow::bail!("refusing to delete patient '{}' without --yes", args.id);
    }
    let token = ctx.require_token()?;

    ctx.api
        .delete_patient(&token, &args.id)
        .await
        .map_err(|e| ctx.failure("Delete patient", e))?;

    output(
        &PatientDeleteResponse {
            status: "Patient deleted",
            id: args.id.clone(),
        },
        flags.format,
    )
}
