//! Boolean parsing from conventional tokens

use crate::error::{BasicError, Result};

/// Recognized affirmative token
pub const TRUE: &str = "true";
/// Recognized negative token
pub const FALSE: &str = "false";
/// Recognized affirmative token
pub const YES: &str = "yes";
/// Recognized negative token
pub const NO: &str = "no";

/// Parse a boolean from a conventional token, ignoring case
///
/// `"yes"` and `"true"` are true; `"no"` and `"false"` are false.
///
/// # Errors
///
/// Returns an `InvalidArgument` error for any other input.
pub fn parse(s: &str) -> Result<bool> {
    if s.eq_ignore_ascii_case(YES) || s.eq_ignore_ascii_case(TRUE) {
        Ok(true)
    } else if s.eq_ignore_ascii_case(NO) || s.eq_ignore_ascii_case(FALSE) {
        Ok(false)
    } else {
        Err(BasicError::invalid_argument(format!(
            "cannot parse '{s}' as a boolean"
        )))
    }
}

/// Parse a boolean, treating blank input as absent
///
/// # Errors
///
/// Returns an `InvalidArgument` error for non-blank input that is not a
/// recognized token.
pub fn parse_opt(s: &str) -> Result<Option<bool>> {
    if s.trim().is_empty() {
        Ok(None)
    } else {
        parse(s).map(Some)
    }
}
