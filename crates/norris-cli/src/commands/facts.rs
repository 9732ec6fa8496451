//! Fact browsing and authoring commands.

use super::utils::{ensure_active_session_id, render_error};
use crate::context::AppContext;
use anyhow::{Result, bail};
use norris_core::error::NorrisError;
use norris_core::fact::{Fact, FactDraft};

/// `norris random` — one random fact, never repeating within the session
/// until every fact has been shown.
pub async fn random(context: &AppContext) -> Result<()> {
    let session_id = ensure_active_session_id(context)?;
    match context.random.next_fact(Some(&session_id)).await {
        Ok((fact, _session)) => {
            println!("{}", fact.text);
            Ok(())
        }
        Err(err @ NorrisError::Exhausted) => bail!(render_error(&err)),
        Err(err) => Err(err.into()),
    }
}

/// `norris list` — all facts, one per line.
pub async fn list(context: &AppContext) -> Result<()> {
    let facts = context.facts.list().await?;
    if facts.is_empty() {
        println!("No facts yet.");
        return Ok(());
    }
    for fact in facts {
        print_fact(&fact);
    }
    Ok(())
}

/// `norris show <id>` — one fact with its metadata.
pub async fn show(context: &AppContext, id: u64) -> Result<()> {
    match context.facts.get(id).await {
        Ok(fact) => {
            print_fact(&fact);
            Ok(())
        }
        Err(err) if err.is_not_found() => bail!(render_error(&err)),
        Err(err) => Err(err.into()),
    }
}

/// `norris add <text>` — creates a fact; requires a logged-in session. The
/// capability check happens here, at the boundary, before the core operation
/// is invoked.
pub async fn add(context: &AppContext, text: String) -> Result<()> {
    let session_id = ensure_active_session_id(context)?;
    let Some(user) = context.auth.current_user(&session_id).await? else {
        bail!("You must be logged in to add facts. Run `norris login <username>` first.");
    };

    match context.facts.create(FactDraft::new(text), Some(user.id)).await {
        Ok(fact) => {
            println!("Created fact {}.", fact.id);
            Ok(())
        }
        Err(err) if err.is_validation() => bail!(render_error(&err)),
        Err(err) => Err(err.into()),
    }
}

fn print_fact(fact: &Fact) {
    println!("[{}] {}", fact.id, fact.text);
}
