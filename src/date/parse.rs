//! Strict parsing of text against date layout templates
//!
//! A parse attempt either consumes the template's full token layout over
//! the whole input or fails definitively. Structural mismatches and
//! out-of-range field values are distinct failure kinds; the inference
//! engine relies on that distinction.

use chrono::format::ParseErrorKind;
use chrono::{NaiveDate, NaiveDateTime};

use super::pattern::ISO_8601;
use super::template;
use crate::error::{BasicError, Result};

/// Parse `text` strictly against one template
///
/// The template must be a pure date layout; templates carrying time-of-day
/// tokens belong to [`parse_datetime`]. A two-digit `yy` token maps values
/// 00–68 to 2000–2068 and 69–99 to 1969–1999 (the pivot year is 69); a
/// `yyyy` token takes the year exactly as written, so `"03/08/16"` under
/// `MM/dd/yyyy` is year 16, not 2016.
///
/// # Errors
///
/// Returns an `InvalidArgument` error for a malformed template, a
/// `ParseError` when the text does not conform to the template's token
/// layout, or an `InvalidFieldValue` when the text conforms structurally
/// but a field value is out of range (day 99, month 30, Feb 29 of a
/// non-leap year).
pub fn parse(text: &str, template: &str) -> Result<NaiveDate> {
    let compiled = template::compiled(template)?;
    if compiled.has_time {
        return Err(BasicError::invalid_argument(format!(
            "template '{template}' carries time tokens, use parse_datetime"
        )));
    }
    NaiveDate::parse_from_str(text, compiled.chrono_format.as_ref())
        .map_err(|err| classify(&err, text, template))
}

/// Parse `text` against several templates as one combined grammar
///
/// The templates are tried in declaration order; the first one that yields
/// a date wins. A template that fails, structurally or on field values,
/// simply does not participate in the match.
///
/// # Errors
///
/// Returns an `InvalidArgument` error for a malformed template, or a
/// `ParseError` when no template matches.
pub fn parse_any(text: &str, templates: &[&str]) -> Result<NaiveDate> {
    for template in templates {
        let compiled = template::compiled(template)?;
        if compiled.has_time {
            return Err(BasicError::invalid_argument(format!(
                "template '{template}' carries time tokens, use parse_datetime"
            )));
        }
        if let Ok(date) = NaiveDate::parse_from_str(text, compiled.chrono_format.as_ref()) {
            return Ok(date);
        }
    }
    Err(BasicError::parse(
        format!("text matches none of the {} supplied templates", templates.len()),
        text,
    ))
}

/// Parse an ISO 8601 calendar date (`yyyy-MM-dd`)
///
/// # Errors
///
/// Returns a `ParseError` or `InvalidFieldValue` like [`parse`].
pub fn parse_iso(text: &str) -> Result<NaiveDate> {
    parse(text, ISO_8601.template())
}

/// Parse `text` strictly against a date-and-time template
///
/// The template must carry hour and minute tokens; seconds are optional
/// and default to zero when the template omits them.
///
/// # Errors
///
/// Returns an `InvalidArgument` error for a template without time tokens,
/// otherwise fails like [`parse`].
pub fn parse_datetime(text: &str, template: &str) -> Result<NaiveDateTime> {
    let compiled = template::compiled(template)?;
    if !compiled.has_time {
        return Err(BasicError::invalid_argument(format!(
            "template '{template}' carries no time tokens, use parse"
        )));
    }
    NaiveDateTime::parse_from_str(text, compiled.chrono_format.as_ref())
        .map_err(|err| classify(&err, text, template))
}

/// Split chrono's failure modes into the crate's two parse failure kinds
fn classify(err: &chrono::format::ParseError, text: &str, template: &str) -> BasicError {
    match err.kind() {
        ParseErrorKind::OutOfRange | ParseErrorKind::Impossible => BasicError::invalid_field_value(
            "a field value is out of range for the calendar",
            text,
            template,
        ),
        _ => BasicError::parse_with_template(
            "text does not conform to the template layout",
            text,
            template,
        ),
    }
}
