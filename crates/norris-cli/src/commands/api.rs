//! Programmatic API commands.
//!
//! Every subcommand presents a bearer token and goes through the token-gated
//! facade; failures are reported with the status code a wire transport would
//! carry (400 validation, 401 authentication, 404 not found).

use crate::context::AppContext;
use anyhow::{Result, bail};
use norris_application::status_code_for;
use norris_core::error::NorrisError;
use norris_core::fact::FactDraft;

pub async fn list(context: &AppContext, token: String) -> Result<()> {
    match context.api.list_facts(&token).await {
        Ok(facts) => {
            for fact in facts {
                println!("[{}] {}", fact.id, fact.text);
            }
            Ok(())
        }
        Err(err) => fail(err),
    }
}

pub async fn show(context: &AppContext, token: String, id: u64) -> Result<()> {
    match context.api.get_fact(&token, id).await {
        Ok(fact) => {
            println!("[{}] {}", fact.id, fact.text);
            Ok(())
        }
        Err(err) => fail(err),
    }
}

pub async fn add(context: &AppContext, token: String, text: String) -> Result<()> {
    match context.api.create_fact(&token, FactDraft::new(text)).await {
        Ok(fact) => {
            println!("201 Created fact {}.", fact.id);
            Ok(())
        }
        Err(err) => fail(err),
    }
}

pub async fn update(context: &AppContext, token: String, id: u64, text: String) -> Result<()> {
    match context.api.update_fact(&token, id, FactDraft::new(text)).await {
        Ok(fact) => {
            println!("200 Updated fact {}.", fact.id);
            Ok(())
        }
        Err(err) => fail(err),
    }
}

pub async fn delete(context: &AppContext, token: String, id: u64) -> Result<()> {
    match context.api.delete_fact(&token, id).await {
        Ok(()) => {
            println!("204 Deleted fact {}.", id);
            Ok(())
        }
        Err(err) => fail(err),
    }
}

fn fail(err: NorrisError) -> Result<()> {
    bail!("{} {}", status_code_for(&err), err)
}
