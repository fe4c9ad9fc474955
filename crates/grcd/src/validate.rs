//! Task description validation.
//!
//! Two deliberately strict rules, checked in order; the first failing rule's
//! message is surfaced to the caller verbatim.

use grc_common::LookupError;
use once_cell::sync::Lazy;
use regex::Regex;

static TASK_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").unwrap());

const MSG_CHARSET: &str =
    "Compliance Task must contain only letters and spaces (no numbers or special characters).";
const MSG_LENGTH: &str = "Compliance Task must be longer than 20 characters.";

/// Validate a task description.
pub fn validate_task(task: &str) -> Result<(), LookupError> {
    if !TASK_PATTERN.is_match(task) {
        return Err(LookupError::InvalidRequest(MSG_CHARSET.to_string()));
    }
    if task.trim().chars().count() <= 20 {
        return Err(LookupError::InvalidRequest(MSG_LENGTH.to_string()));
    }
    Ok(())
}
