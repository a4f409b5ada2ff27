//! Name/description validation rules
//!
//! These run on every creation and every full-text mutation, not only at
//! creation time.

use crate::error::{MedleyError, Result};

/// Maximum playlist name length in characters
pub const MAX_NAME_LEN: usize = 100;

/// Maximum playlist description length in characters
pub const MAX_DESCRIPTION_LEN: usize = 250;

/// Allowed characters: Unicode letters and digits, space, `_`, `-`, `.`,
/// general punctuation (U+2000-U+206F), and a handful of emoji ranges.
fn is_allowed_char(c: char) -> bool {
    c.is_alphanumeric()
        || matches!(c, ' ' | '_' | '-' | '.')
        || ('\u{2000}'..='\u{206F}').contains(&c)
        || c == '\u{2B50}'
        || ('\u{2600}'..='\u{26FF}').contains(&c)
}

fn check_text(text: &str, limit: usize) -> Result<()> {
    if text.chars().count() > limit {
        return Err(MedleyError::invalid_input(format!(
            "text exceeds {limit} characters"
        )));
    }
    if let Some(c) = text.chars().find(|c| !is_allowed_char(*c)) {
        return Err(MedleyError::invalid_input(format!(
            "text contains invalid character {c:?}"
        )));
    }
    Ok(())
}

/// Validate a playlist name: non-blank, at most 100 chars, restricted charset
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(MedleyError::invalid_input("playlist name is blank"));
    }
    check_text(name, MAX_NAME_LEN)
}

/// Validate a playlist description: at most 250 chars, restricted charset
///
/// Empty descriptions are valid.
pub fn validate_description(description: &str) -> Result<()> {
    check_text(description, MAX_DESCRIPTION_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_names() {
        assert!(validate_name("Chill Vibes").is_ok());
        assert!(validate_name("road-trip_2024.v1").is_ok());
        assert!(validate_name("Sommer ☀").is_ok());
    }

    #[test]
    fn rejects_blank_names() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn rejects_oversized_names() {
        let long = "a".repeat(MAX_NAME_LEN + 1);
        assert!(validate_name(&long).is_err());
        assert!(validate_name(&"a".repeat(MAX_NAME_LEN)).is_ok());
    }

    #[test]
    fn rejects_invalid_characters() {
        assert!(validate_name("no/slashes").is_err());
        assert!(validate_name("no<tags>").is_err());
    }

    #[test]
    fn empty_description_is_valid() {
        assert!(validate_description("").is_ok());
    }

    #[test]
    fn description_limit_is_250() {
        assert!(validate_description(&"b".repeat(MAX_DESCRIPTION_LEN)).is_ok());
        assert!(validate_description(&"b".repeat(MAX_DESCRIPTION_LEN + 1)).is_err());
    }
}
