use chrono::Utc;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    role: Option<String>,
    admin: bool,
    subject: Option<String>,
    expires_at: Option<String>,
    expired: Option<bool>,
    note: Option<String>,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&status(ctx), flags.format)
}

fn status(ctx: &AppContext) -> AuthStatusResponse {
    if !ctx.session.is_logged_in() {
        return AuthStatusResponse {
            authenticated: false,
            role: None,
            admin: false,
            subject: None,
            expires_at: None,
            expired: None,
            note: Some("no stored session".into()),
        };
    }

    let role = ctx.session.role();
    match ctx.session.claims() {
        Some(claims) => AuthStatusResponse {
            authenticated: true,
            role: Some(role.label().to_string()),
            admin: role.is_admin(),
            subject: claims.subject.clone(),
            expires_at: claims.expires_at.map(|t| t.to_rfc3339()),
            expired: Some(claims.is_expired(Utc::now())),
            note: None,
        },
        None => AuthStatusResponse {
            authenticated: true,
            role: Some(role.label().to_string()),
            admin: false,
            subject: None,
            expires_at: None,
            expired: None,
            note: Some("token payload is not readable; role unknown".into()),
        },
    }
}
