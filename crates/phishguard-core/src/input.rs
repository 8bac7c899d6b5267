//! Caller-level validation of the raw candidate string.
//!
//! This runs before the engine is invoked and is not a risk signal: rejected
//! input never produces a `ScanResult`.

use thiserror::Error;

/// Why a candidate string was rejected before scanning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("no URL given")]
    Empty,
    #[error("'{0}' does not look like a URL (no '.' found)")]
    MissingDot(String),
}

/// Trim `raw` and reject empty strings or strings without a `.`.
///
/// Returns the trimmed slice on success.
pub fn check_input(raw: &str) -> Result<&str, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    if !trimmed.contains('.') {
        return Err(InputError::MissingDot(trimmed.to_string()));
    }
    Ok(trimmed)
}
