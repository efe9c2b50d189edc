//! Integration tests for the date inference engine public surface

use basic_core::date::{
    self, MONTH_DAY_YEAR_NUMERIC, NUMERIC_DATE_FORMATS, Pattern, PatternGroup,
};
use basic_core::error::BasicError;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn ambiguous_two_digit_year_slash_date_has_interpretations() {
    let inferred = date::inferred_dates("02/03/09");
    assert!(!inferred.is_empty());
    for interpretation in &inferred {
        assert_eq!(interpretation.original_text, "02/03/09");
        assert_eq!(
            date::parse(&interpretation.original_text, &interpretation.format).unwrap(),
            interpretation.date
        );
    }
}

#[test]
fn out_of_range_day_matches_nothing() {
    assert!(date::inferred_dates("99/08/2013").is_empty());
    assert!(!date::is_parsable("99/08/2013"));
}

#[test]
fn non_leap_february_29_matches_nothing() {
    assert!(date::inferred_dates("29/02/2018").is_empty());
    assert!(date::inferred_dates("02/29/2018").is_empty());
}

#[test]
fn leap_february_29_is_accepted() {
    let inferred = date::inferred_dates("29/02/2016");
    assert_eq!(inferred.len(), 1);
    assert_eq!(inferred[0].format, "dd/MM/yyyy");
    assert_eq!(inferred[0].date, date(2016, 2, 29));
}

#[test]
fn single_template_parse_is_strict_about_separators() {
    assert_eq!(
        date::parse("3/8/2016", "MM/dd/yyyy").unwrap(),
        date(2016, 3, 8)
    );
    let err = date::parse("3/8/2016", "MM-dd-yyyy").unwrap_err();
    assert!(matches!(err, BasicError::ParseError { .. }));
}

#[test]
fn two_digit_year_text_is_accepted_by_four_digit_token() {
    assert!(date::is_parsable_with(
        "03/08/16",
        &MONTH_DAY_YEAR_NUMERIC.templates()
    ));
    // The year is taken as written
    assert_eq!(
        date::parse("03/08/16", "MM/dd/yyyy").unwrap(),
        date(16, 3, 8)
    );
}

#[test]
fn inference_count_matches_individual_parses() {
    for text in ["02/03/09", "2-13-2016", "20160308", "99/08/2013", "garbage"] {
        let successes = NUMERIC_DATE_FORMATS
            .iter()
            .filter(|template| date::parse(text, template).is_ok())
            .count();
        assert_eq!(date::inferred_dates(text).len(), successes, "text: {text}");
    }
}

#[test]
fn group_parse_uses_declaration_order() {
    let group = PatternGroup::new(
        Pattern::MmDdYyyySlash,
        Pattern::DdMmYyyySlash,
        &[],
    );
    assert_eq!(group.parse("02/03/2009").unwrap(), date(2009, 2, 3));

    let flipped = PatternGroup::new(
        Pattern::DdMmYyyySlash,
        Pattern::MmDdYyyySlash,
        &[],
    );
    assert_eq!(flipped.parse("02/03/2009").unwrap(), date(2009, 3, 2));
}

#[test]
fn group_construction_enforces_minimum_arity() {
    let err = PatternGroup::from_slice(&[Pattern::YyyyMmDdHyphen]).unwrap_err();
    assert!(matches!(err, BasicError::InvalidArgument { .. }));
}
