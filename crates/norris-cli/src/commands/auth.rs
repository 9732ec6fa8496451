//! Account and session commands.

use super::utils::{ensure_active_session_id, prompt, render_error};
use crate::context::AppContext;
use anyhow::{Result, bail};
use norris_core::user::RegistrationDraft;

/// `norris register <username>` — prompts for a password twice and creates
/// the account. Does not log the session in; mirrors the register-then-login
/// flow of the interactive units.
pub async fn register(context: &AppContext, username: String) -> Result<()> {
    let password = prompt("Password")?;
    let password_confirm = prompt("Password (again)")?;

    match context
        .auth
        .register(RegistrationDraft::new(username, password, password_confirm))
        .await
    {
        Ok(user) => {
            println!("Registered {}. Run `norris login {}` to sign in.", user.username, user.username);
            Ok(())
        }
        Err(err) if err.is_validation() => bail!(render_error(&err)),
        Err(err) => Err(err.into()),
    }
}

/// `norris login <username>` — authenticates and binds the user to the
/// active session.
pub async fn login(context: &AppContext, username: String) -> Result<()> {
    let session_id = ensure_active_session_id(context)?;
    let password = prompt("Password")?;

    match context.auth.login(&session_id, &username, &password).await {
        Ok(user) => {
            println!("Logged in as {}.", user.username);
            Ok(())
        }
        Err(err) if err.is_auth_failure() => bail!(render_error(&err)),
        Err(err) => Err(err.into()),
    }
}

/// `norris logout` — clears the active session's user.
pub async fn logout(context: &AppContext) -> Result<()> {
    let session_id = ensure_active_session_id(context)?;
    context.auth.logout(&session_id).await?;
    println!("Logged out.");
    Ok(())
}

/// `norris whoami` — shows the active session's user, if any.
pub async fn whoami(context: &AppContext) -> Result<()> {
    let session_id = ensure_active_session_id(context)?;
    match context.auth.current_user(&session_id).await? {
        Some(user) => println!("{}", user.username),
        None => println!("Not logged in."),
    }
    Ok(())
}

/// `norris token <username>` — authenticates and prints a bearer token for
/// API use.
pub async fn token(context: &AppContext, username: String) -> Result<()> {
    let password = prompt("Password")?;
    match context.auth.issue_token(&username, &password).await {
        Ok(token) => {
            println!("{}", token.token);
            if let Some(expires_at) = token.expires_at {
                eprintln!("Expires at {}.", expires_at.to_rfc3339());
            }
            Ok(())
        }
        Err(err) if err.is_auth_failure() => bail!(render_error(&err)),
        Err(err) => Err(err.into()),
    }
}
