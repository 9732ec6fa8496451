//! Fact input validation.
//!
//! A `FactDraft` holds raw user input for a create or update operation and
//! validates it into field-level errors, mirroring an HTML form: the request
//! is rejected as a whole, with one message per offending field.

use crate::error::{FieldError, NorrisError, Result};

/// Maximum allowed length of a fact's text, in characters.
pub const MAX_FACT_TEXT_LEN: usize = 255;

/// Raw, unvalidated input for a fact's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactDraft {
    pub text: String,
}

impl FactDraft {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Validates the draft and returns the cleaned text.
    ///
    /// Leading and trailing whitespace is trimmed before validation, so a
    /// whitespace-only submission counts as empty.
    ///
    /// # Errors
    ///
    /// Returns `NorrisError::Validation` with one `FieldError` per violated
    /// rule: empty text, or text longer than [`MAX_FACT_TEXT_LEN`].
    pub fn validate(&self) -> Result<String> {
        let text = self.text.trim();
        let mut errors = Vec::new();

        if text.is_empty() {
            errors.push(FieldError::new("text", "this field is required"));
        } else if text.chars().count() > MAX_FACT_TEXT_LEN {
            errors.push(FieldError::new(
                "text",
                format!("must be at most {} characters", MAX_FACT_TEXT_LEN),
            ));
        }

        if errors.is_empty() {
            Ok(text.to_string())
        } else {
            Err(NorrisError::validation(errors))
        }
    }
}
