//! Registration and sign-in handlers.

use colored::Colorize;

use crate::config::Config;
use crate::error::Result;
use crate::supabase::{jwt, SupabaseClient};

/// Handle `supatask register`.
///
/// Registers the account and reports the new user id when the backend
/// returns one. The response's access token, if any, is deliberately not
/// kept: projects that require email confirmation hand out tokens that are
/// not usable sessions yet.
pub async fn register(config: &Config, email: &str, password: &str) -> Result<()> {
    let client = SupabaseClient::new(&config.supabase);
    let auth = client.sign_up(email, password).await?;

    match &auth.user {
        Some(user) => println!("{} registered {} (user id {})", "ok:".green().bold(), email, user.id),
        None => println!("{} registered {}", "ok:".green().bold(), email),
    }
    if auth.access_token.is_none() {
        println!("no session was issued; the project may require email confirmation");
    }
    Ok(())
}

/// Handle `supatask login`.
///
/// Signs in and prints the user id the backend knows the account by,
/// taken from the auth response or decoded out of the access token.
pub async fn login(config: &Config, email: &str, password: &str) -> Result<()> {
    let client = SupabaseClient::new(&config.supabase);
    let auth = client.sign_in(email, password).await?;

    let user_id = auth
        .user
        .as_ref()
        .map(|user| user.id)
        .or_else(|| auth.access_token.as_deref().and_then(jwt::user_id_from_token));
    match user_id {
        Some(id) => println!("{} signed in as {} (user id {})", "ok:".green().bold(), email, id),
        None => println!("{} signed in as {}", "ok:".green().bold(), email),
    }
    Ok(())
}
