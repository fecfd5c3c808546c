/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

It exposes one handler module per command group:

- `auth`     — Registration and sign-in
- `todos`    — Todo listing and mutation
- `projects` — Project listing and mutation
- `notes`    — Note listing and mutation

Handlers are intentionally small: each one builds (or signs in) a
[`SupabaseClient`], performs a single API call, and renders the result.
Error rendering happens here and in `main` — the client itself never logs.
*/

pub mod auth;
pub mod notes;
pub mod projects;
pub mod todos;

use uuid::Uuid;

use crate::config::Config;
use crate::error::{Result, SupataskError};
use crate::supabase::SupabaseClient;

/// Build a client, signing in first when credentials were provided.
///
/// List commands work without credentials (the backend decides whether
/// unauthenticated reads are allowed); mutating commands follow up with
/// [`acting_user_id`], which requires the sign-in to have happened.
pub async fn connect(
    config: &Config,
    email: Option<&str>,
    password: Option<&str>,
) -> Result<SupabaseClient> {
    let client = SupabaseClient::new(&config.supabase);
    if let (Some(email), Some(password)) = (email, password) {
        client.sign_in(email, password).await?;
        tracing::debug!("signed in as {}", email);
    }
    Ok(client)
}

/// The acting user id for mutating calls.
///
/// Requires a live session; the id comes from the auth response's user
/// record or, failing that, from the access token's `sub` claim.
pub fn acting_user_id(client: &SupabaseClient) -> Result<Uuid> {
    let session = client.session().ok_or_else(|| {
        SupataskError::Authentication(
            "not signed in: pass --email/--password or set SUPATASK_EMAIL/SUPATASK_PASSWORD"
                .to_string(),
        )
    })?;
    session.user_id().ok_or_else(|| {
        SupataskError::Authentication("session carries no usable user id".to_string()).into()
    })
}

/// Require both credentials to be present, for commands that cannot run
/// without them.
pub fn require_credentials<'a>(
    email: Option<&'a str>,
    password: Option<&'a str>,
) -> Result<(&'a str, &'a str)> {
    match (email, password) {
        (Some(email), Some(password)) => Ok((email, password)),
        _ => Err(SupataskError::Authentication(
            "both --email and --password are required (or SUPATASK_EMAIL/SUPATASK_PASSWORD)"
                .to_string(),
        )
        .into()),
    }
}
