use pm_core::entities::{Patient, PatientInput};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::patient::PatientCreateArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct PatientCreateResponse {
    status: &'static str,
    patient: Option<Patient>,
}

pub async fn handle(
    args: &PatientCreateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let token = ctx.require_token()?;
    let input = PatientInput::new(&args.name, &args.email, &args.address, &args.date_of_birth)
        .with_registered_date(&args.registered_date);
    input
        .validate()
        .map_err(|e| anyhow::anyhow!("Save patient failed: {e}"))?;

    let patient = ctx
        .api
        .create_patient(&token, &input)
        .await
        .map_err(|e| ctx.failure("Save patient", e))?;

    output(
        &PatientCreateResponse {
            status: "Patient created",
            patient,
        },
        flags.format,
    )
}
