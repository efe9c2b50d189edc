//! Read-side file helpers and typed loaders
//!
//! Thin wrappers over `std::fs` plus serde-backed loaders for JSON and
//! YAML files. Listing, traversal, and deletion are deliberately absent.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::Result;

/// Read a whole UTF-8 file into a string
///
/// # Errors
///
/// Returns an `Io` error when the file cannot be read.
pub fn read_to_string(path: impl AsRef<Path>) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Read a UTF-8 file as a vector of lines
///
/// # Errors
///
/// Returns an `Io` error when the file cannot be read.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    Ok(read_to_string(path)?.lines().map(str::to_string).collect())
}

/// The first line of a UTF-8 file, if it has one
///
/// # Errors
///
/// Returns an `Io` error when the file cannot be read.
pub fn first_line(path: impl AsRef<Path>) -> Result<Option<String>> {
    Ok(read_to_string(path)?.lines().next().map(str::to_string))
}

/// True when the path's extension equals `extension`, ignoring case
#[must_use]
pub fn has_extension(path: impl AsRef<Path>, extension: &str) -> bool {
    path.as_ref()
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

/// True when the path names a CSV file
#[must_use]
pub fn is_csv(path: impl AsRef<Path>) -> bool {
    has_extension(path, "csv")
}

/// Deserialize a JSON file into any owned type
///
/// # Errors
///
/// Returns an `Io` error when the file cannot be read or a
/// `Serialization` error when its contents do not deserialize.
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading JSON file");
    let text = read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Deserialize a YAML file into any owned type
///
/// # Errors
///
/// Returns an `Io` error when the file cannot be read or a
/// `Serialization` error when its contents do not deserialize.
pub fn load_yaml<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading YAML file");
    let text = read_to_string(path)?;
    Ok(serde_yaml::from_str(&text)?)
}
