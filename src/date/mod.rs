//! Date patterns, strict parsing, and format inference
//!
//! The catalog of supported layouts lives in [`pattern`]; [`parse`] turns
//! text into calendar dates against one layout or several; [`inferred_dates`]
//! reports every layout an ambiguous text conforms to.

mod infer;
mod parse;
mod pattern;
mod template;

pub use infer::{
    InferredDate, inferred_dates, inferred_dates_with, is_parsable, is_parsable_with,
};
pub use parse::{parse, parse_any, parse_datetime, parse_iso};
pub use pattern::{
    DAY_MONTH_YEAR_NUMERIC, ISO_8601, MONTH_DAY_YEAR_NUMERIC, NUMERIC_DATE_FORMATS, Pattern,
    PatternGroup, YEAR_MONTH_DAY_NUMERIC,
};

use chrono::{Days, Local, NaiveDate};

use crate::error::{BasicError, Result};

/// Today's local calendar date
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Yesterday's local calendar date
#[must_use]
pub fn yesterday() -> NaiveDate {
    let today = today();
    today.checked_sub_days(Days::new(1)).unwrap_or(today)
}

/// Tomorrow's local calendar date
#[must_use]
pub fn tomorrow() -> NaiveDate {
    let today = today();
    today.checked_add_days(Days::new(1)).unwrap_or(today)
}

/// Render a date through a template from the parser's vocabulary
///
/// # Errors
///
/// Returns an `InvalidArgument` error for a malformed template or one
/// carrying time tokens.
pub fn format_date(date: NaiveDate, template: &str) -> Result<String> {
    let compiled = template::compiled(template)?;
    if compiled.has_time {
        return Err(BasicError::invalid_argument(format!(
            "template '{template}' carries time tokens, cannot format a plain date"
        )));
    }
    Ok(date.format(compiled.chrono_format.as_ref()).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_relative_days_are_ordered() {
        assert!(yesterday() < today());
        assert!(today() < tomorrow());
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2016, 3, 8).unwrap();
        assert_eq!(format_date(date, "yyyy-MM-dd").unwrap(), "2016-03-08");
        assert_eq!(format_date(date, "MM/dd/yyyy").unwrap(), "03/08/2016");
        assert_eq!(format_date(date, "ddMMyyyy").unwrap(), "08032016");
        assert!(format_date(date, "yyyy-MM-dd HH:mm").is_err());
    }

    #[test]
    fn test_format_then_parse_round_trips() {
        use crate::enums::NamedVariants;

        let date = NaiveDate::from_ymd_opt(2016, 3, 8).unwrap();
        for pattern in Pattern::variants() {
            let rendered = format_date(date, pattern.template()).unwrap();
            assert_eq!(pattern.parse(&rendered).unwrap(), date);
        }
    }
}
