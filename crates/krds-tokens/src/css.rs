// ABOUTME: CSS custom-property emission for a theme-filtered token set
// ABOUTME: Renders the :root block, the dark override block, and shared rule formatting

use indexmap::IndexMap;
use krds_logging::debug;
use krds_types::Theme;

use crate::catalog::TokenCatalog;
use crate::theme::is_scoped_to;
use crate::utilities;

pub const ROOT_SELECTOR: &str = ":root";
pub const DARK_SELECTOR: &str = "[data-theme=\"dark\"]";

/// Custom property name for a token: `--<tokenName>`
pub fn css_var_name(token_name: &str) -> String {
    format!("--{token_name}")
}

/// `var(--<tokenName>)` reference for use inside declarations
pub fn var_ref(token_name: &str) -> String {
    format!("var(--{token_name})")
}

/// One CSS rule with declarations kept in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssRule {
    selector: String,
    declarations: Vec<(String, String)>,
}

impl CssRule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    pub fn decl(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push((property.into(), value.into()));
        self
    }

    pub fn push(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.declarations.push((property.into(), value.into()));
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Append the rule as `selector {`, 2-space indented declarations, `}`
    pub fn render_into(&self, out: &mut String) {
        out.push_str(&self.selector);
        out.push_str(" {\n");
        for (property, value) in &self.declarations {
            out.push_str(&format!("  {property}: {value};\n"));
        }
        out.push_str("}\n");
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }
}

/// Render rules separated by a single blank line
pub fn render_rules(rules: &[CssRule]) -> String {
    let mut out = String::new();
    for (index, rule) in rules.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        rule.render_into(&mut out);
    }
    out
}

/// What `emit_stylesheet_with` appends after the variable blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylesheetOptions {
    /// Color-role, spacing and component base classes
    pub utilities: bool,
}

impl Default for StylesheetOptions {
    fn default() -> Self {
        Self { utilities: true }
    }
}

/// Custom properties of every token visible under `theme`, in catalog order
pub fn emit_variables(tokens: &TokenCatalog, theme: Theme) -> IndexMap<String, String> {
    tokens
        .visible(theme)
        .map(|(name, value)| (css_var_name(name), value.to_string()))
        .collect()
}

/// Full stylesheet with the default options
pub fn emit_stylesheet(tokens: &TokenCatalog, theme: Theme) -> String {
    emit_stylesheet_with(tokens, theme, &StylesheetOptions::default())
}

/// Full stylesheet.
///
/// `:root` always holds the theme-neutral and light-scoped tokens. When
/// generating for dark, a `[data-theme="dark"]` block follows that
/// re-declares only the dark-scoped tokens; it is omitted when there are none.
pub fn emit_stylesheet_with(
    tokens: &TokenCatalog,
    theme: Theme,
    options: &StylesheetOptions,
) -> String {
    let mut root = CssRule::new(ROOT_SELECTOR);
    for (name, value) in tokens.visible(Theme::Light) {
        root.push(css_var_name(name), value);
    }

    let mut out = root.render();

    let mut dark_count = 0;
    if theme.is_dark() {
        let mut dark = CssRule::new(DARK_SELECTOR);
        for (name, value) in tokens.iter().filter(|(name, _)| is_scoped_to(name, Theme::Dark)) {
            dark.push(css_var_name(name), value);
            dark_count += 1;
        }
        if !dark.is_empty() {
            out.push('\n');
            dark.render_into(&mut out);
        }
    }

    let mut utility_count = 0;
    if options.utilities {
        let rules = utilities::emit_utility_rules(tokens, theme);
        utility_count = rules.len();
        if !rules.is_empty() {
            out.push('\n');
            out.push_str(&render_rules(&rules));
        }
    }

    debug!(
        theme = %theme,
        token_count = tokens.len(),
        dark_overrides = dark_count,
        utility_rules = utility_count,
        "Emitted stylesheet"
    );

    out
}
