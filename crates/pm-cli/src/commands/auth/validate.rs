use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::{AppContext, SESSION_EXPIRED};
use crate::output::output;

#[derive(Serialize)]
struct AuthValidateResponse {
    valid: bool,
    note: Option<&'static str>,
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let token = ctx.require_token()?;
    let valid = ctx
        .api
        .validate_token(&token)
        .await
        .map_err(|e| ctx.failure("Validate session", e))?;

    if !valid {
        ctx.session.clear()?;
    }

    output(
        &AuthValidateResponse {
            valid,
            note: (!valid).then_some(SESSION_EXPIRED),
        },
        flags.format,
    )
}
