// ABOUTME: Extracts size, state and type facets from free-form variant identifiers
// ABOUTME: Pattern matching sits behind the VariantResolver trait so the vocabulary can change

use once_cell::sync::Lazy;
use regex::Regex;

pub const SIZES: [&str; 5] = ["xsmall", "small", "medium", "large", "xlarge"];
pub const STATES: [&str; 6] = ["disabled", "hover", "focus", "active", "readonly", "error"];
pub const TYPES: [&str; 4] = ["success", "warning", "error", "info"];

/// Boolean HTML attributes, in priority order
pub const STATE_ATTRIBUTES: [&str; 3] = ["disabled", "readonly", "checked"];

/// Facet extraction over a single variant identifier.
///
/// Every method is total: an identifier without the facet yields `None`
/// (or `""` for attributes), never an error.
pub trait VariantResolver {
    fn size<'v>(&self, variant: &'v str) -> Option<&'v str>;

    fn state<'v>(&self, variant: &'v str) -> Option<&'v str>;

    /// Semantic type, e.g. `success` in `alert_type_success.html`
    fn kind<'v>(&self, variant: &'v str) -> Option<&'v str>;

    /// Attribute fragment such as `" disabled"`, or `""`
    fn state_attributes(&self, variant: &str) -> &'static str;
}

/// A vocabulary word delimited by `_`, `-`, `.` or either end of the string
fn word_pattern(words: &[&str]) -> Regex {
    let pattern = format!(r"(?:^|[_.-])({})(?:[_.-]|$)", words.join("|"));
    Regex::new(&pattern).expect("vocabulary words are plain identifiers")
}

static SIZE_PATTERN: Lazy<Regex> = Lazy::new(|| word_pattern(&SIZES));
static STATE_PATTERN: Lazy<Regex> = Lazy::new(|| word_pattern(&STATES));

/// `<c>_type_<t>`, `<c>_<t>`, `<t>_<c>`, tried in that order
static TYPE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    let types = TYPES.join("|");
    [
        format!(r"_type_({types})(?:\.html)?$"),
        format!(r"^[a-z0-9-]+_({types})(?:\.html)?$"),
        format!(r"^({types})_[a-z0-9-]+(?:\.html)?$"),
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("type patterns are valid"))
    .collect()
});

static ATTRIBUTE_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    [(" disabled", "disabled"), (" readonly", "readonly"), (" checked", "checked")]
        .into_iter()
        .map(|(fragment, word)| (fragment, word_pattern(&[word])))
        .collect()
});

fn first_group<'v>(pattern: &Regex, variant: &'v str) -> Option<&'v str> {
    pattern
        .captures(variant)
        .and_then(|captures| captures.get(1))
        .map(|found| found.as_str())
}

/// Default resolver matching the fixed vocabularies with regular expressions
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternResolver;

impl VariantResolver for PatternResolver {
    fn size<'v>(&self, variant: &'v str) -> Option<&'v str> {
        first_group(&SIZE_PATTERN, variant)
    }

    fn state<'v>(&self, variant: &'v str) -> Option<&'v str> {
        first_group(&STATE_PATTERN, variant)
    }

    fn kind<'v>(&self, variant: &'v str) -> Option<&'v str> {
        TYPE_PATTERNS
            .iter()
            .find_map(|pattern| first_group(pattern, variant))
    }

    fn state_attributes(&self, variant: &str) -> &'static str {
        ATTRIBUTE_PATTERNS
            .iter()
            .find(|(_, pattern)| pattern.is_match(variant))
            .map(|(fragment, _)| *fragment)
            .unwrap_or("")
    }
}

/// Size facet of `variant`, `""` when absent
pub fn extract_size(variant: Option<&str>) -> &str {
    variant.and_then(|v| PatternResolver.size(v)).unwrap_or("")
}

/// State facet of `variant`, `""` when absent
pub fn extract_state(variant: Option<&str>) -> &str {
    variant.and_then(|v| PatternResolver.state(v)).unwrap_or("")
}

/// Type facet of `variant`, `""` when absent
pub fn extract_type(variant: Option<&str>) -> &str {
    variant.and_then(|v| PatternResolver.kind(v)).unwrap_or("")
}

pub fn state_attributes(variant: Option<&str>) -> &'static str {
    variant.map_or("", |v| PatternResolver.state_attributes(v))
}

/// The three facets of one variant identifier, each extracted independently
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VariantFacets<'v> {
    pub size: Option<&'v str>,
    pub state: Option<&'v str>,
    pub kind: Option<&'v str>,
}

impl<'v> VariantFacets<'v> {
    pub fn resolve<R>(resolver: &R, variant: Option<&'v str>) -> Self
    where
        R: VariantResolver + ?Sized,
    {
        let Some(variant) = variant else {
            return Self::default();
        };
        Self {
            size: resolver.size(variant),
            state: resolver.state(variant),
            kind: resolver.kind(variant),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.size.is_none() && self.state.is_none() && self.kind.is_none()
    }

    /// `base`, then size, then state, space separated; absent facets add nothing
    pub fn class_list(&self, base: &str) -> String {
        [Some(base), self.size, self.state]
            .into_iter()
            .flatten()
            .filter(|class| !class.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
