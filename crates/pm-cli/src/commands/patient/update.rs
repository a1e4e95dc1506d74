use pm_core::entities::{Patient, PatientInput};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::patient::PatientUpdateArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct PatientUpdateResponse {
    status: &'static str,
    id: String,
    patient: Option<Patient>,
}

pub async fn handle(
    args: &PatientUpdateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let token = ctx.require_token()?;

    let patients = ctx
        .api
        .list_patients(&token)
        .await
        .map_err(|e| ctx.failure("Get patients", e))?;
    let current = patients
        .iter()
        .find(|p| p.id == args.id)
        .ok_or_else(|| anyhow::anyhow!("Save patient failed: no patient with id '{}'", args.id))?;

    let input = merge(current, args);
    input
        .validate()
        .map_err(|e| anyhow::anyhow!("Save patient failed: {e}"))?;

    let patient = ctx
        .api
        .update_patient(&token, &args.id, &input)
        .await
        .map_err(|e| ctx.failure("Save patient", e))?;

    output(
        &PatientUpdateResponse {
            status: "Patient updated",
            id: args.id.clone(),
            patient,
        },
        flags.format,
    )
}

/// Current record with the provided fields replaced.
fn merge(current: &Patient, args: &PatientUpdateArgs) -> PatientInput {
    let base = current.to_input();
    PatientInput::new(
        args.name.as_deref().unwrap_or(&base.name),
        args.email.as_deref().unwrap_or(&base.email),
        args.address.as_deref().unwrap_or(&base.address),
        args.date_of_birth.as_deref().unwrap_or(&base.date_of_birth),
    )
}
