//! Format inference for ambiguous date strings
//!
//! Inference never picks a winner: the text is tried against every
//! template in the supplied order and every successful interpretation is
//! reported. Zero results means the text is unparseable, one means it is
//! unambiguous, and several mean the caller has an ambiguity to resolve.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use super::parse::parse;
use super::pattern::NUMERIC_DATE_FORMATS;

/// One successful interpretation of a date string
///
/// Re-parsing `original_text` with `format` deterministically reproduces
/// `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferredDate {
    /// The calendar date this interpretation produced
    pub date: NaiveDate,
    /// The template that produced it
    pub format: String,
    /// The text the date was parsed from
    pub original_text: String,
}

/// Infer every interpretation of `text` under the default numeric catalog
///
/// Equivalent to [`inferred_dates_with`] over
/// [`NUMERIC_DATE_FORMATS`](super::pattern::NUMERIC_DATE_FORMATS).
#[must_use]
pub fn inferred_dates(text: &str) -> Vec<InferredDate> {
    inferred_dates_with(text, &NUMERIC_DATE_FORMATS)
}

/// Infer every interpretation of `text` under the supplied templates
///
/// Each template is visited exactly once, in the supplied order,
/// regardless of earlier successes; a text may legitimately match more
/// than one template and all such matches are reported. A failed attempt,
/// whether the text did not conform to the layout or a field value was
/// out of range, is discarded silently. Never fails; a text matching
/// nothing yields an empty vector.
#[must_use]
pub fn inferred_dates_with(text: &str, templates: &[&str]) -> Vec<InferredDate> {
    let mut matches = Vec::new();
    for template in templates {
        match parse(text, template) {
            Ok(date) => matches.push(InferredDate {
                date,
                format: (*template).to_string(),
                original_text: text.to_string(),
            }),
            // Only the two parse failure kinds mean "this template did not
            // match"; anything else is a caller-supplied unusable template.
            Err(err) if err.is_parse_failure() => {
                trace!(template, %err, "template did not match");
            }
            Err(err) => {
                warn!(template, %err, "skipping unusable template");
            }
        }
    }
    matches
}

/// True when `text` parses under at least one default-catalog template
#[must_use]
pub fn is_parsable(text: &str) -> bool {
    !inferred_dates(text).is_empty()
}

/// True when `text` parses under at least one of the supplied templates
#[must_use]
pub fn is_parsable_with(text: &str, templates: &[&str]) -> bool {
    !inferred_dates_with(text, templates).is_empty()
}
