//! String inspection, conversion, and similarity helpers
//!
//! Character-class checks, case conversion, padding, quoted-aware
//! splitting, and Levenshtein-based similarity search. All functions
//! operate on `&str` and return owned values; indices are character
//! indices, not byte offsets.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{BasicError, Result};

/// The empty string
pub const EMPTY: &str = "";

/// ISO Latin digits, whole string
pub static DIGITS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[0-9]+$").expect("valid digits regex"));

/// ISO basic Latin alphabet, whole string
pub static BASIC_LATIN_ALPHABET_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[A-Za-z]+$").expect("valid alphabet regex"));

/// Any character outside the basic Latin alphabet and digits
pub static NOT_ALPHANUMERIC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new("[^A-Za-z0-9]").expect("valid not-alphanumeric regex"));

/// A run of consecutive whitespace
pub static CONSECUTIVE_WHITESPACE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// True when `s` is non-empty and contains only ASCII digits
#[must_use]
pub fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// True when `s` is non-empty and contains only letters
#[must_use]
pub fn is_alphabetic(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphabetic)
}

/// True when `s` is non-empty and contains only letters and digits
#[must_use]
pub fn is_alphanumeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphanumeric)
}

/// True when `s` is composed only of ISO basic Latin alphabet characters
#[must_use]
pub fn is_basic_latin(s: &str) -> bool {
    BASIC_LATIN_ALPHABET_REGEX.is_match(s)
}

/// Upper-case the first character of `s`
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Upper-case the character at character index `index`
///
/// # Errors
///
/// Returns an `InvalidArgument` error when `index` is out of bounds.
pub fn capitalize_at(s: &str, index: usize) -> Result<String> {
    map_char_at(s, index, true)
}

/// Lower-case the first character of `s`
#[must_use]
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-case the character at character index `index`
///
/// # Errors
///
/// Returns an `InvalidArgument` error when `index` is out of bounds.
pub fn decapitalize_at(s: &str, index: usize) -> Result<String> {
    map_char_at(s, index, false)
}

fn map_char_at(s: &str, index: usize, upper: bool) -> Result<String> {
    let mut out = String::with_capacity(s.len());
    let mut found = false;
    for (i, c) in s.chars().enumerate() {
        if i == index {
            found = true;
            if upper {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
        } else {
            out.push(c);
        }
    }
    if found {
        Ok(out)
    } else {
        Err(BasicError::invalid_argument(format!(
            "index {index} out of bounds for a string of {} characters",
            s.chars().count()
        )))
    }
}

/// Concatenate `s` with itself `times` times, separated by `separator`
///
/// A `times` below 2 returns the string unchanged.
#[must_use]
pub fn repeat_with_separator(s: &str, times: usize, separator: &str) -> String {
    let mut out = String::from(s);
    for _ in 1..times {
        out.push_str(separator);
        out.push_str(s);
    }
    out
}

/// Count occurrences of `c` in `s`
#[must_use]
pub fn occurrences(s: &str, c: char) -> usize {
    s.chars().filter(|&x| x == c).count()
}

/// Count occurrences of each character of `chars` in `s`
///
/// The result is positional: `result[i]` counts `chars[i]`.
#[must_use]
pub fn occurrences_of(s: &str, chars: &[char]) -> Vec<usize> {
    chars.iter().map(|&c| occurrences(s, c)).collect()
}

/// Collapse every whitespace run in `s` into a single space
#[must_use]
pub fn remove_consecutive_spaces(s: &str) -> String {
    CONSECUTIVE_WHITESPACE_REGEX.replace_all(s, " ").into_owned()
}

/// Replace every character outside the basic Latin alphabet and digits
#[must_use]
pub fn replace_not_alphanumeric(s: &str, replacement: &str) -> String {
    NOT_ALPHANUMERIC_REGEX.replace_all(s, replacement).into_owned()
}

/// Lower camel case from a sequence of words
///
/// # Errors
///
/// Returns an `InvalidArgument` error when no words are supplied.
pub fn lower_camel_case_words(words: &[&str]) -> Result<String> {
    let Some((first, rest)) = words.split_first() else {
        return Err(BasicError::invalid_argument(
            "at least one word is required",
        ));
    };
    let mut out = first.to_lowercase();
    for word in rest {
        out.push_str(&capitalize(&word.to_lowercase()));
    }
    Ok(out)
}

/// Lower camel case of `text`, splitting on spaces, underscores, and hyphens
#[must_use]
pub fn lower_camel_case(text: &str) -> String {
    lower_camel_case_with(text, &[' ', '_', '-'])
}

/// Lower camel case of `text`, splitting on the given separators
#[must_use]
pub fn lower_camel_case_with(text: &str, separators: &[char]) -> String {
    let words: Vec<&str> = text
        .split(|c| separators.contains(&c))
        .filter(|w| !w.is_empty())
        .collect();
    lower_camel_case_words(&words).unwrap_or_default()
}

/// Left-fill `s` with `c` up to `size` characters
///
/// # Errors
///
/// Returns an `InvalidArgument` error when `size` is smaller than the
/// string length.
pub fn pad_start(s: &str, size: usize, c: char) -> Result<String> {
    let len = s.chars().count();
    if size < len {
        return Err(BasicError::invalid_argument(
            "the specified size must be at least the string length",
        ));
    }
    let mut out = String::with_capacity(size);
    for _ in len..size {
        out.push(c);
    }
    out.push_str(s);
    Ok(out)
}

/// Right-fill `s` with `c` up to `size` characters
///
/// # Errors
///
/// Returns an `InvalidArgument` error when `size` is smaller than the
/// string length.
pub fn pad_end(s: &str, size: usize, c: char) -> Result<String> {
    let len = s.chars().count();
    if size < len {
        return Err(BasicError::invalid_argument(
            "the specified size must be at least the string length",
        ));
    }
    let mut out = String::with_capacity(size);
    out.push_str(s);
    for _ in len..size {
        out.push(c);
    }
    Ok(out)
}

/// True when `key` equals one of the candidates
#[must_use]
pub fn matches_any(key: &str, candidates: &[&str]) -> bool {
    candidates.iter().any(|c| *c == key)
}

/// True when `key` equals one of the candidates, ignoring case
#[must_use]
pub fn matches_any_ignore_case(key: &str, candidates: &[&str]) -> bool {
    let key = key.to_lowercase();
    candidates.iter().any(|c| c.to_lowercase() == key)
}

/// Split on `separator`, treating double-quoted sections as opaque
///
/// Quotes are kept in the fields; empty fields, including a trailing one,
/// are preserved.
#[must_use]
pub fn split_escaping_quoted(input: &str, separator: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for c in input.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
            current.push(c);
        } else if c == separator && !in_quotes {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    fields.push(current);
    fields
}

/// Levenshtein edit distance between two strings
///
/// The minimum number of single-character insertions, deletions, or
/// substitutions required to change one string into the other.
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    // Two-row optimization instead of the full matrix
    let mut prev_row: Vec<usize> = (0..=b_len).collect();
    let mut curr_row: Vec<usize> = vec![0; b_len + 1];

    for (i, a_char) in a.chars().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b.chars().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_len]
}

/// Every candidate at minimum edit distance from `key`
///
/// Ties are all reported, in candidate order, without duplicates. An empty
/// candidate sequence yields an empty result.
#[must_use]
pub fn similars<'a, I>(key: &str, candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut min = usize::MAX;
    let mut out: Vec<String> = Vec::new();
    for candidate in candidates {
        let distance = edit_distance(key, candidate);
        if distance < min {
            min = distance;
            out.clear();
            out.push(candidate.to_string());
        } else if distance == min && !out.iter().any(|s| s == candidate) {
            out.push(candidate.to_string());
        }
    }
    out
}
