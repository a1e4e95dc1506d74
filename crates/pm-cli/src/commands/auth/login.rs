use std::io::BufRead;

use anyhow::Context;
use pm_core::entities::LoginRequest;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    status: &'static str,
    authenticated: bool,
    role: String,
}

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let password = match &args.password {
        Some(password) => password.clone(),
        None => read_password_line(std::io::stdin().lock())?,
    };

    let credentials = LoginRequest::new(&args.email, &password);
    credentials
        .validate()
        .map_err(|e| anyhow::anyhow!("Login failed: {e}"))?;

    let token = ctx
        .api
        .login(&credentials)
        .await
        .map_err(|e| anyhow::anyhow!("Login failed: {e}"))?;
    ctx.session
        .save_token(&token)
        .context("failed to persist session token")?;

    output(
        &AuthLoginResponse {
            status: "Login successful",
            authenticated: true,
            role: pm_auth::extract_role(&token).label().to_string(),
        },
        flags.format,
    )
}

/// First line of `reader` without its line terminator.
fn read_password_line(mut reader: impl BufRead) -> anyhow::Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
