//! Character classification helpers

use crate::error::{BasicError, Result};

/// Basic Latin vowels, both cases
pub const VOWELS: &str = "aeiouAEIOU";

/// Basic Latin consonants, both cases
pub const CONSONANTS: &str = "bcdfghjklmnpqrstvwxyzBCDFGHJKLMNPQRSTVWXYZ";

/// True when the character is a basic Latin vowel
#[must_use]
pub fn is_vowel(ch: char) -> bool {
    VOWELS.contains(ch)
}

/// True when the character is a basic Latin consonant
#[must_use]
pub fn is_consonant(ch: char) -> bool {
    CONSONANTS.contains(ch)
}

/// Character index of the first consonant in `s`
#[must_use]
pub fn index_of_consonant(s: &str) -> Option<usize> {
    s.chars().position(is_consonant)
}

/// Character index of the first consonant at or after `from`
#[must_use]
pub fn index_of_consonant_from(s: &str, from: usize) -> Option<usize> {
    s.chars()
        .enumerate()
        .skip(from)
        .find(|&(_, c)| is_consonant(c))
        .map(|(i, _)| i)
}

/// Character index of the first consonant in the range `from..to`
///
/// # Errors
///
/// Returns an `InvalidArgument` error when `to` exceeds the string length
/// or `from` is greater than `to`.
pub fn index_of_consonant_in(s: &str, from: usize, to: usize) -> Result<Option<usize>> {
    let len = s.chars().count();
    if to > len {
        return Err(BasicError::invalid_argument(format!(
            "range end {to} exceeds string length {len}"
        )));
    }
    if from > to {
        return Err(BasicError::invalid_argument(
            "range start must not be greater than range end",
        ));
    }
    Ok(s.chars()
        .enumerate()
        .take(to)
        .skip(from)
        .find(|&(_, c)| is_consonant(c))
        .map(|(i, _)| i))
}
