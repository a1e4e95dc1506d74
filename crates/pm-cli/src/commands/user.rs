use pm_core::entities::{CreateUserRequest, UserResponse};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::cli::subcommands::user::UserCreateArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct UserCreateResponse {
    status: &'static str,
    user: Option<UserResponse>,
}

/// Handle `pm user <subcommand>`.
pub async fn handle(
    action: &UserCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UserCommands::Create(args) => create(args, ctx, flags).await,
    }
}

async fn create(args: &UserCreateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let token = ctx.require_token()?;
    // Client-side gate only; the auth service enforces the role itself.
    if !ctx.session.role().is_admin() {
        anyhow::bail!("Only ADMIN can add users");
    }

    let request = CreateUserRequest::new(&args.email, &args.password, args.role.as_claim());
    request
        .validate()
        .map_err(|e| anyhow::anyhow!("Add user failed: {e}"))?;

    let user = ctx
        .api
        .create_user(&token, &request)
        .await
        .map_err(|e| ctx.failure("Add user", e))?;

    output(
        &UserCreateResponse {
            status: "User created",
            user,
        },
        flags.format,
    )
}
