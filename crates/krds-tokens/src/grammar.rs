// ABOUTME: Compound token name grammar: namespace-[theme-]category-segments
// ABOUTME: Parses names into facets and renders human readable descriptions

use krds_types::{NAMESPACE, TokenCategory};
use std::fmt;

/// Theme segment of a token name.
///
/// Broader than `krds_types::Theme`: `high-contrast` is a valid scope in
/// names even though artifacts are only generated for light and dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeScope {
    Light,
    Dark,
    HighContrast,
}

impl ThemeScope {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeScope::Light => "light",
            ThemeScope::Dark => "dark",
            ThemeScope::HighContrast => "high-contrast",
        }
    }
}

impl fmt::Display for ThemeScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural problems that prevent a name from being split into facets
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenNameError {
    #[error("token name is empty")]
    Empty,

    #[error("token name '{0}' contains an empty segment")]
    EmptySegment(String),

    #[error("token name '{0}' has no category segment")]
    MissingCategory(String),
}

/// Facets of a parsed token name, borrowed from the name itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenName<'a> {
    raw: &'a str,
    namespace: &'a str,
    theme: Option<ThemeScope>,
    category_segment: &'a str,
    category: Option<TokenCategory>,
    segments: Vec<&'a str>,
}

impl<'a> TokenName<'a> {
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    pub fn namespace(&self) -> &'a str {
        self.namespace
    }

    pub fn has_default_namespace(&self) -> bool {
        self.namespace == NAMESPACE
    }

    pub fn theme(&self) -> Option<ThemeScope> {
        self.theme
    }

    pub fn is_theme_neutral(&self) -> bool {
        self.theme.is_none()
    }

    /// `None` when the category segment is outside the fixed enumeration
    pub fn category(&self) -> Option<TokenCategory> {
        self.category
    }

    pub fn category_segment(&self) -> &'a str {
        self.category_segment
    }

    /// Segments after the category, in name order
    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    pub fn subcategory(&self) -> Option<&'a str> {
        self.segments.first().copied()
    }

    pub fn property(&self) -> Option<&'a str> {
        self.segments.get(1).copied()
    }

    pub fn modifier(&self) -> Option<&'a str> {
        self.segments.get(2).copied()
    }

    pub fn state(&self) -> Option<&'a str> {
        self.segments.get(3).copied()
    }

    /// Segments after the category joined back with `-`
    pub fn path(&self) -> String {
        self.segments.join("-")
    }
}

/// Split a compound token name into its facets.
///
/// Unknown categories are not an error; the returned name reports
/// `category() == None` and category-scoped lookups treat it as not found.
pub fn parse(name: &str) -> Result<TokenName<'_>, TokenNameError> {
    if name.is_empty() {
        return Err(TokenNameError::Empty);
    }

    let segments: Vec<&str> = name.split('-').collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(TokenNameError::EmptySegment(name.to_string()));
    }

    let (namespace, rest) = match segments.split_first() {
        Some((namespace, rest)) => (*namespace, rest),
        None => return Err(TokenNameError::Empty),
    };

    let (theme, rest) = match rest {
        ["high", "contrast", tail @ ..] => (Some(ThemeScope::HighContrast), tail),
        ["light", tail @ ..] => (Some(ThemeScope::Light), tail),
        ["dark", tail @ ..] => (Some(ThemeScope::Dark), tail),
        _ => (None, rest),
    };

    let Some((category_segment, tail)) = rest.split_first() else {
        return Err(TokenNameError::MissingCategory(name.to_string()));
    };

    Ok(TokenName {
        raw: name,
        namespace,
        theme,
        category_segment: *category_segment,
        category: TokenCategory::from_segment(category_segment),
        segments: tail.to_vec(),
    })
}

/// Human readable description of a token name, tolerant of any length.
///
/// `krds-light-color-primary-background-default` becomes
/// `Color token (light theme): primary background default`.
pub fn describe(name: &str) -> String {
    let Ok(parsed) = parse(name) else {
        return format!("Design token: {name}");
    };

    let Some(category) = parsed.category() else {
        let mut words = vec![parsed.category_segment()];
        words.extend_from_slice(parsed.segments());
        return format!("Design token: {}", words.join(" "));
    };

    let mut description = format!("{} token", category.label());
    if let Some(theme) = parsed.theme() {
        description.push_str(&format!(" ({theme} theme)"));
    }
    if !parsed.segments().is_empty() {
        description.push_str(": ");
        description.push_str(&parsed.segments().join(" "));
    }
    description
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_theme_scoped_name() {
        let name = parse("krds-light-color-primary-background-default").unwrap();
        assert_eq!(name.namespace(), "krds");
        assert!(name.has_default_namespace());
        assert_eq!(name.theme(), Some(ThemeScope::Light));
        assert_eq!(name.category(), Some(TokenCategory::Color));
        assert_eq!(name.subcategory(), Some("primary"));
        assert_eq!(name.property(), Some("background"));
        assert_eq!(name.modifier(), Some("default"));
        assert_eq!(name.state(), None);
        assert_eq!(name.path(), "primary-background-default");
    }

    #[test]
    fn test_parse_theme_neutral_name() {
        let name = parse("krds-spacing-4").unwrap();
        assert!(name.is_theme_neutral());
        assert_eq!(name.category(), Some(TokenCategory::Spacing));
        assert_eq!(name.segments(), &["4"]);
    }

    #[test]
    fn test_parse_high_contrast_spans_two_segments() {
        let name = parse("krds-high-contrast-color-text-basic").unwrap();
        assert_eq!(name.theme(), Some(ThemeScope::HighContrast));
        assert_eq!(name.category(), Some(TokenCategory::Color));
        assert_eq!(name.segments(), &["text", "basic"]);
    }

    #[test]
    fn test_unknown_category_is_unparsed_not_an_error() {
        let name = parse("krds-palette-blue-50").unwrap();
        assert_eq!(name.category(), None);
        assert_eq!(name.category_segment(), "palette");

        // "high" without "contrast" is an ordinary (unknown) category segment
        let name = parse("krds-high-color").unwrap();
        assert_eq!(name.theme(), None);
        assert_eq!(name.category(), None);
    }

    #[test]
    fn test_structural_errors() {
        assert_eq!(parse(""), Err(TokenNameError::Empty));
        assert!(matches!(parse("krds--color"), Err(TokenNameError::EmptySegment(_))));
        assert!(matches!(parse("krds-color-"), Err(TokenNameError::EmptySegment(_))));
        assert!(matches!(parse("krds"), Err(TokenNameError::MissingCategory(_))));
        assert!(matches!(parse("krds-dark"), Err(TokenNameError::MissingCategory(_))));
    }

    #[test]
    fn test_long_names_keep_every_segment() {
        let name = parse("krds-dark-component-button-primary-background-hover-pressed-x").unwrap();
        assert_eq!(name.category(), Some(TokenCategory::Component));
        assert_eq!(name.segments().len(), 6);
        assert_eq!(name.state(), Some("hover"));
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            describe("krds-light-color-primary-background-default"),
            "Color token (light theme): primary background default"
        );
        assert_eq!(describe("krds-spacing-4"), "Spacing token: 4");
        assert_eq!(describe("krds-shadow"), "Shadow token");
        assert_eq!(describe("krds-palette-blue-50"), "Design token: palette blue 50");
        assert_eq!(describe("not--valid"), "Design token: not--valid");
        assert_eq!(
            describe("krds-high-contrast-color-text-basic"),
            "Color token (high-contrast theme): text basic"
        );
    }
}
