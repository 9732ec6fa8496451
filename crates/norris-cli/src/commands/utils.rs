//! Shared helpers for CLI commands.

use crate::context::AppContext;
use anyhow::{Context, Result};
use norris_core::error::NorrisError;
use std::io::{BufRead, Write};

/// Reads the active session id stored for this installation, if any.
pub fn load_active_session_id(context: &AppContext) -> Option<String> {
    let id = std::fs::read_to_string(context.active_session_file())
        .ok()?
        .trim()
        .to_string();
    if id.is_empty() { None } else { Some(id) }
}

/// Records the active session id, the CLI's equivalent of a session cookie.
pub fn store_active_session_id(context: &AppContext, session_id: &str) -> Result<()> {
    let path = context.active_session_file();
    std::fs::write(&path, format!("{}\n", session_id))
        .with_context(|| format!("failed to write {:?}", path))
}

/// Returns the active session id, minting and storing a fresh one if needed.
pub fn ensure_active_session_id(context: &AppContext) -> Result<String> {
    if let Some(id) = load_active_session_id(context) {
        return Ok(id);
    }
    let session = norris_core::session::Session::new();
    store_active_session_id(context, &session.id)?;
    Ok(session.id)
}

/// Prompts on stderr and reads one line from stdin.
pub fn prompt(label: &str) -> Result<String> {
    eprint!("{}: ", label);
    std::io::stderr().flush().ok();
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read input")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Renders a domain error for terminal display, expanding field-level
/// validation messages onto their own lines.
pub fn render_error(err: &NorrisError) -> String {
    if err.is_validation() {
        let mut out = String::from("Invalid input:");
        for field_error in err.field_errors() {
            out.push_str(&format!("\n  - {}", field_error));
        }
        out
    } else {
        err.to_string()
    }
}
