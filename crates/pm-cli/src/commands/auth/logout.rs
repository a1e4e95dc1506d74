use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    status: &'static str,
    cleared: bool,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.session.clear()?;
    output(
        &AuthLogoutResponse {
            status: "Logged out",
            cleared: true,
        },
        flags.format,
    )
}
