//! The closed catalog of date layout templates
//!
//! Nine numeric layouts: each of the three field orderings (year-first,
//! month-first, day-first) in a hyphenated, slashed, and compact-digit
//! variant. The catalog is closed; adding a layout means adding a variant.

use std::fmt;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::enums::NamedVariants;
use crate::error::{BasicError, Result};

/// A single named date layout template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pattern {
    /// `yyyy-MM-dd`
    YyyyMmDdHyphen,
    /// `yyyy/MM/dd`
    YyyyMmDdSlash,
    /// `yyyyMMdd`
    YyyyMmDdCompact,
    /// `MM-dd-yyyy`
    MmDdYyyyHyphen,
    /// `MM/dd/yyyy`
    MmDdYyyySlash,
    /// `MMddyyyy`
    MmDdYyyyCompact,
    /// `dd-MM-yyyy`
    DdMmYyyyHyphen,
    /// `dd/MM/yyyy`
    DdMmYyyySlash,
    /// `ddMMyyyy`
    DdMmYyyyCompact,
}

impl Pattern {
    /// The template string for this layout
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::YyyyMmDdHyphen => "yyyy-MM-dd",
            Self::YyyyMmDdSlash => "yyyy/MM/dd",
            Self::YyyyMmDdCompact => "yyyyMMdd",
            Self::MmDdYyyyHyphen => "MM-dd-yyyy",
            Self::MmDdYyyySlash => "MM/dd/yyyy",
            Self::MmDdYyyyCompact => "MMddyyyy",
            Self::DdMmYyyyHyphen => "dd-MM-yyyy",
            Self::DdMmYyyySlash => "dd/MM/yyyy",
            Self::DdMmYyyyCompact => "ddMMyyyy",
        }
    }

    /// Parse `text` strictly against this layout
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` when the text does not conform to the layout,
    /// or an `InvalidFieldValue` when a field value is out of range.
    pub fn parse(self, text: &str) -> Result<NaiveDate> {
        super::parse::parse(text, self.template())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template())
    }
}

impl NamedVariants for Pattern {
    fn variants() -> &'static [Self] {
        &[
            Self::YyyyMmDdHyphen,
            Self::YyyyMmDdSlash,
            Self::YyyyMmDdCompact,
            Self::MmDdYyyyHyphen,
            Self::MmDdYyyySlash,
            Self::MmDdYyyyCompact,
            Self::DdMmYyyyHyphen,
            Self::DdMmYyyySlash,
            Self::DdMmYyyyCompact,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            Self::YyyyMmDdHyphen => "YYYY_MM_DD_HYPHEN",
            Self::YyyyMmDdSlash => "YYYY_MM_DD_SLASH",
            Self::YyyyMmDdCompact => "YYYY_MM_DD_COMPACT",
            Self::MmDdYyyyHyphen => "MM_DD_YYYY_HYPHEN",
            Self::MmDdYyyySlash => "MM_DD_YYYY_SLASH",
            Self::MmDdYyyyCompact => "MM_DD_YYYY_COMPACT",
            Self::DdMmYyyyHyphen => "DD_MM_YYYY_HYPHEN",
            Self::DdMmYyyySlash => "DD_MM_YYYY_SLASH",
            Self::DdMmYyyyCompact => "DD_MM_YYYY_COMPACT",
        }
    }
}

/// The hyphenated year-month-day layout, ISO 8601 calendar dates
pub const ISO_8601: Pattern = Pattern::YyyyMmDdHyphen;

/// An immutable, ordered collection of at least two related patterns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternGroup {
    patterns: Vec<Pattern>,
}

impl PatternGroup {
    /// Create a group from at least two patterns
    ///
    /// The two-pattern minimum is carried by the signature; `rest` may be
    /// empty.
    #[must_use]
    pub fn new(first: Pattern, second: Pattern, rest: &[Pattern]) -> Self {
        let mut patterns = Vec::with_capacity(2 + rest.len());
        patterns.push(first);
        patterns.push(second);
        patterns.extend_from_slice(rest);
        Self { patterns }
    }

    /// Create a group from a slice of patterns
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error when fewer than 2 patterns are
    /// supplied; a group of fewer patterns is not meaningful.
    pub fn from_slice(patterns: &[Pattern]) -> Result<Self> {
        if patterns.len() < 2 {
            return Err(BasicError::invalid_argument(format!(
                "a pattern group requires at least 2 patterns, got {}",
                patterns.len()
            )));
        }
        Ok(Self {
            patterns: patterns.to_vec(),
        })
    }

    /// The patterns in declaration order
    #[must_use]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// The template strings, order-preserving with [`PatternGroup::patterns`]
    #[must_use]
    pub fn templates(&self) -> Vec<&'static str> {
        self.patterns.iter().map(|p| p.template()).collect()
    }

    /// Parse `text` against the group's templates in declaration order
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` when no template in the group matches.
    pub fn parse(&self, text: &str) -> Result<NaiveDate> {
        super::parse::parse_any(text, &self.templates())
    }
}

/// Year-first layouts: hyphenated, slashed, compact
pub static YEAR_MONTH_DAY_NUMERIC: Lazy<PatternGroup> = Lazy::new(|| {
    PatternGroup::new(
        Pattern::YyyyMmDdHyphen,
        Pattern::YyyyMmDdSlash,
        &[Pattern::YyyyMmDdCompact],
    )
});

/// Month-first layouts: hyphenated, slashed, compact
pub static MONTH_DAY_YEAR_NUMERIC: Lazy<PatternGroup> = Lazy::new(|| {
    PatternGroup::new(
        Pattern::MmDdYyyyHyphen,
        Pattern::MmDdYyyySlash,
        &[Pattern::MmDdYyyyCompact],
    )
});

/// Day-first layouts: hyphenated, slashed, compact
pub static DAY_MONTH_YEAR_NUMERIC: Lazy<PatternGroup> = Lazy::new(|| {
    PatternGroup::new(
        Pattern::DdMmYyyyHyphen,
        Pattern::DdMmYyyySlash,
        &[Pattern::DdMmYyyyCompact],
    )
});

/// The default inference catalog: all nine numeric templates
///
/// Concatenation of [`YEAR_MONTH_DAY_NUMERIC`], [`MONTH_DAY_YEAR_NUMERIC`],
/// and [`DAY_MONTH_YEAR_NUMERIC`], in that fixed order.
pub static NUMERIC_DATE_FORMATS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut formats = YEAR_MONTH_DAY_NUMERIC.templates();
    formats.extend(MONTH_DAY_YEAR_NUMERIC.templates());
    formats.extend(DAY_MONTH_YEAR_NUMERIC.templates());
    formats
});

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_templates_are_closed_catalog() {
        assert_eq!(Pattern::variants().len(), 9);
        assert_eq!(Pattern::YyyyMmDdSlash.template(), "yyyy/MM/dd");
        assert_eq!(Pattern::MmDdYyyyCompact.template(), "MMddyyyy");
        assert_eq!(ISO_8601.template(), "yyyy-MM-dd");
    }

    #[test]
    fn test_named_lookup() {
        assert_eq!(
            Pattern::from_name("DD_MM_YYYY_SLASH"),
            Some(Pattern::DdMmYyyySlash)
        );
        assert_eq!(
            Pattern::from_conventional_name("yyyy mm dd compact"),
            Some(Pattern::YyyyMmDdCompact)
        );
        assert_eq!(Pattern::from_name("YYYY_WW_DD"), None);
    }

    #[test]
    fn test_group_construction_requires_two_patterns() {
        let err = PatternGroup::from_slice(&[Pattern::YyyyMmDdHyphen]).unwrap_err();
        assert!(matches!(err, BasicError::InvalidArgument { .. }));
        let err = PatternGroup::from_slice(&[]).unwrap_err();
        assert!(matches!(err, BasicError::InvalidArgument { .. }));

        let group =
            PatternGroup::from_slice(&[Pattern::YyyyMmDdHyphen, Pattern::YyyyMmDdSlash]).unwrap();
        assert_eq!(group.patterns().len(), 2);
    }

    #[test]
    fn test_group_templates_preserve_order() {
        let group = PatternGroup::new(
            Pattern::DdMmYyyySlash,
            Pattern::MmDdYyyySlash,
            &[Pattern::YyyyMmDdSlash],
        );
        assert_eq!(
            group.templates(),
            vec!["dd/MM/yyyy", "MM/dd/yyyy", "yyyy/MM/dd"]
        );
        let from_patterns: Vec<&str> = group.patterns().iter().map(|p| p.template()).collect();
        assert_eq!(group.templates(), from_patterns);
    }

    #[test]
    fn test_default_catalog_order() {
        assert_eq!(
            *NUMERIC_DATE_FORMATS,
            vec![
                "yyyy-MM-dd",
                "yyyy/MM/dd",
                "yyyyMMdd",
                "MM-dd-yyyy",
                "MM/dd/yyyy",
                "MMddyyyy",
                "dd-MM-yyyy",
                "dd/MM/yyyy",
                "ddMMyyyy",
            ]
        );
    }
}
