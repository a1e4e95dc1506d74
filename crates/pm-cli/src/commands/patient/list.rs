use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_rows;

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let token = ctx.require_token()?;
    let patients = ctx
        .api
        .list_patients(&token)
        .await
        .map_err(|e| ctx.failure("Get patients", e))?;
    tracing::info!(count = patients.len(), "Patients loaded");
    output_rows(&patients, flags.format)
}
