//! Name-based lookup for closed enums
//!
//! Closed catalogs in this crate (such as [`crate::date::Pattern`]) expose
//! their variants and constant names through [`NamedVariants`], which
//! provides exact, case-insensitive, and conventional-name lookup without
//! any runtime registration.

/// A closed enum whose variants carry stable constant names
pub trait NamedVariants: Sized + Copy + 'static {
    /// All variants in declaration order
    fn variants() -> &'static [Self];

    /// The constant name of this variant
    fn name(&self) -> &'static str;

    /// The constant names of all variants, in declaration order
    fn names() -> Vec<&'static str> {
        Self::variants().iter().map(NamedVariants::name).collect()
    }

    /// Look up a variant by its exact constant name
    fn from_name(name: &str) -> Option<Self> {
        Self::variants().iter().copied().find(|v| v.name() == name)
    }

    /// Look up a variant by constant name, ignoring ASCII case
    fn from_name_ignore_case(name: &str) -> Option<Self> {
        Self::variants()
            .iter()
            .copied()
            .find(|v| v.name().eq_ignore_ascii_case(name))
    }

    /// Look up a variant by the conventional form of a free-text name
    ///
    /// The text is upper-cased and spaces become underscores before the
    /// exact lookup, so `"yyyy mm dd hyphen"` resolves the constant named
    /// `YYYY_MM_DD_HYPHEN`.
    fn from_conventional_name(name: &str) -> Option<Self> {
        Self::from_name(&conventional_name(name))
    }
}

/// Convert a free-text name to constant-name convention
///
/// Upper-cases the text and replaces spaces with underscores.
#[must_use]
pub fn conventional_name(name: &str) -> String {
    name.trim().to_uppercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Color {
        Red,
        DarkBlue,
    }

    impl NamedVariants for Color {
        fn variants() -> &'static [Self] {
            &[Self::Red, Self::DarkBlue]
        }

        fn name(&self) -> &'static str {
            match self {
                Self::Red => "RED",
                Self::DarkBlue => "DARK_BLUE",
            }
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(Color::names(), vec!["RED", "DARK_BLUE"]);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Color::from_name("DARK_BLUE"), Some(Color::DarkBlue));
        assert_eq!(Color::from_name("dark_blue"), None);
        assert_eq!(Color::from_name_ignore_case("dark_blue"), Some(Color::DarkBlue));
    }

    #[test]
    fn test_conventional_name() {
        assert_eq!(conventional_name("dark blue"), "DARK_BLUE");
        assert_eq!(Color::from_conventional_name("dark blue"), Some(Color::DarkBlue));
        assert_eq!(Color::from_conventional_name("green"), None);
    }
}
