// ABOUTME: Utility-class rules derived from color, spacing and component tokens
// ABOUTME: Selector names are a compatibility surface for consuming stylesheets

use krds_types::{Theme, TokenCategory};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::TokenCatalog;
use crate::css::{CssRule, var_ref};
use crate::grammar;

/// `krds-<theme>-color-[<group>-]<role>[-<variant>]`
static COLOR_ROLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^krds-(?P<theme>light|dark)-color-(?:(?P<group>[a-z0-9]+)-)??(?P<role>text|background|border)(?P<variant>(?:-[a-z0-9]+)*)$",
    )
    .expect("color role pattern is valid")
});

/// Directional spacing classes: (class prefix, property)
const SPACING_CLASSES: [(&str, &str); 8] = [
    ("mt", "margin-top"),
    ("mr", "margin-right"),
    ("mb", "margin-bottom"),
    ("ml", "margin-left"),
    ("pt", "padding-top"),
    ("pr", "padding-right"),
    ("pb", "padding-bottom"),
    ("pl", "padding-left"),
];

fn role_property(role: &str) -> &'static str {
    match role {
        "text" => "color",
        "background" => "background-color",
        _ => "border-color",
    }
}

/// Every utility rule for `theme`: color roles, spacing, component bases
pub fn emit_utility_rules(tokens: &TokenCatalog, theme: Theme) -> Vec<CssRule> {
    let mut rules = color_role_rules(tokens, theme);
    rules.extend(spacing_rules(tokens, theme));
    rules.extend(component_base_rules());
    rules
}

/// `.krds-<theme>-<role>[-<group>][-<variant>]` classes over color tokens
pub fn color_role_rules(tokens: &TokenCatalog, theme: Theme) -> Vec<CssRule> {
    tokens
        .visible(theme)
        .filter_map(|(name, _)| {
            let captures = COLOR_ROLE.captures(name)?;
            let role = &captures["role"];

            let mut class = format!("krds-{}-{}", &captures["theme"], role);
            if let Some(group) = captures.name("group") {
                class.push('-');
                class.push_str(group.as_str());
            }
            class.push_str(&captures["variant"]);

            Some(CssRule::new(format!(".{class}")).decl(role_property(role), var_ref(name)))
        })
        .collect()
}

/// Eight margin/padding classes per spacing token
pub fn spacing_rules(tokens: &TokenCatalog, theme: Theme) -> Vec<CssRule> {
    let mut rules = Vec::new();
    for (name, _) in tokens.visible(theme) {
        let Ok(parsed) = grammar::parse(name) else {
            continue;
        };
        if parsed.category() != Some(TokenCategory::Spacing) || parsed.segments().is_empty() {
            continue;
        }

        let step = parsed.path();
        for (prefix, property) in SPACING_CLASSES {
            rules.push(CssRule::new(format!(".krds-{prefix}-{step}")).decl(property, var_ref(name)));
        }
    }
    rules
}

/// Fixed base classes for the button, input and card families
pub fn component_base_rules() -> Vec<CssRule> {
    vec![
        CssRule::new(".krds-btn")
            .decl("display", "inline-flex")
            .decl("align-items", "center")
            .decl("justify-content", "center")
            .decl("height", var_ref("krds-sizing-height-medium"))
            .decl("padding", format!("0 {}", var_ref("krds-spacing-4")))
            .decl(
                "border",
                format!("{} solid transparent", var_ref("krds-border-width-default")),
            )
            .decl("border-radius", var_ref("krds-border-radius-medium"))
            .decl("font-family", var_ref("krds-typography-font-family-base"))
            .decl("font-size", var_ref("krds-typography-font-size-body-medium"))
            .decl("cursor", "pointer"),
        CssRule::new(".krds-input")
            .decl("width", "100%")
            .decl("height", var_ref("krds-sizing-height-medium"))
            .decl("padding", format!("0 {}", var_ref("krds-spacing-3")))
            .decl(
                "border",
                format!(
                    "{} solid {}",
                    var_ref("krds-border-width-default"),
                    var_ref("krds-light-color-border-gray")
                ),
            )
            .decl("border-radius", var_ref("krds-border-radius-medium"))
            .decl("font-family", var_ref("krds-typography-font-family-base"))
            .decl("font-size", var_ref("krds-typography-font-size-body-medium")),
        CssRule::new(".krds-card")
            .decl("display", "flex")
            .decl("flex-direction", "column")
            .decl("padding", var_ref("krds-spacing-6"))
            .decl(
                "border",
                format!(
                    "{} solid {}",
                    var_ref("krds-border-width-default"),
                    var_ref("krds-light-color-border-gray-light")
                ),
            )
            .decl("border-radius", var_ref("krds-border-radius-large"))
            .decl(
                "background-color",
                var_ref("krds-light-color-background-white"),
            ),
    ]
}
