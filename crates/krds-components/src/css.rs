// ABOUTME: Per-category CSS builders for synthesized templates
// ABOUTME: Values are always var(--krds-...) references, never literals

use krds_tokens::{CssRule, render_rules, var_ref};

fn sel(class: &str, suffix: &str) -> String {
    format!(".{class}{suffix}")
}

fn border(color_token: &str) -> String {
    format!(
        "{} solid {}",
        var_ref("krds-border-width-default"),
        var_ref(color_token)
    )
}

/// Sizes shared by buttons and links: (size, height token, font-size token)
const CONTROL_SIZES: [(&str, &str, &str); 5] = [
    ("xsmall", "krds-sizing-height-xsmall", "krds-typography-font-size-body-small"),
    ("small", "krds-sizing-height-small", "krds-typography-font-size-body-small"),
    ("medium", "krds-sizing-height-medium", "krds-typography-font-size-body-medium"),
    ("large", "krds-sizing-height-large", "krds-typography-font-size-body-medium"),
    ("xlarge", "krds-sizing-height-xlarge", "krds-typography-font-size-heading-small"),
];

pub fn button(class: &str) -> String {
    let mut rules = vec![
        CssRule::new(sel(class, ""))
            .decl("display", "inline-flex")
            .decl("align-items", "center")
            .decl("gap", var_ref("krds-spacing-2"))
            .decl("height", var_ref("krds-sizing-height-medium"))
            .decl("padding", format!("0 {}", var_ref("krds-spacing-4")))
            .decl("border", border("krds-light-color-border-primary"))
            .decl("border-radius", var_ref("krds-border-radius-medium"))
            .decl(
                "background-color",
                var_ref("krds-light-color-primary-background-default"),
            )
            .decl("color", var_ref("krds-light-color-primary-text-default"))
            .decl("font-family", var_ref("krds-typography-font-family-base"))
            .decl("font-weight", var_ref("krds-typography-font-weight-bold"))
            .decl(
                "transition",
                format!(
                    "background-color {} {}",
                    var_ref("krds-motion-duration-fast"),
                    var_ref("krds-motion-easing-standard")
                ),
            ),
    ];

    for (size, height, font_size) in CONTROL_SIZES {
        rules.push(
            CssRule::new(sel(class, &format!(".{size}")))
                .decl("height", var_ref(height))
                .decl("font-size", var_ref(font_size)),
        );
    }

    rules.push(
        CssRule::new(format!("{}, {}", sel(class, ":hover"), sel(class, ".hover"))).decl(
            "background-color",
            var_ref("krds-light-color-primary-background-hover"),
        ),
    );
    rules.push(
        CssRule::new(format!("{}, {}", sel(class, ":focus"), sel(class, ".focus")))
            .decl("outline", border("krds-light-color-border-primary"))
            .decl("outline-offset", var_ref("krds-spacing-1")),
    );
    rules.push(
        CssRule::new(format!("{}, {}", sel(class, ":disabled"), sel(class, ".disabled")))
            .decl("background-color", var_ref("krds-light-color-background-gray-subtle"))
            .decl("border-color", var_ref("krds-light-color-border-gray-light"))
            .decl("color", var_ref("krds-light-color-text-disabled"))
            .decl("cursor", "not-allowed"),
    );

    render_rules(&rules)
}

pub fn link(class: &str) -> String {
    render_rules(&[
        CssRule::new(sel(class, ""))
            .decl("color", var_ref("krds-light-color-text-primary"))
            .decl("font-size", var_ref("krds-typography-font-size-body-medium"))
            .decl("text-decoration", "underline"),
        CssRule::new(sel(class, ".small"))
            .decl("font-size", var_ref("krds-typography-font-size-body-small")),
        CssRule::new(sel(class, ".disabled"))
            .decl("color", var_ref("krds-light-color-text-disabled"))
            .decl("pointer-events", "none"),
    ])
}

/// Shared by fieldset inputs and bare controls
pub fn input(class: &str) -> String {
    render_rules(&[
        CssRule::new(".krds-form-group")
            .decl("display", "flex")
            .decl("flex-direction", "column")
            .decl("gap", var_ref("krds-spacing-2"))
            .decl("border", "none")
            .decl("margin", "0")
            .decl("padding", "0"),
        CssRule::new(".krds-form-group .form-label")
            .decl("color", var_ref("krds-light-color-text-basic"))
            .decl("font-weight", var_ref("krds-typography-font-weight-bold")),
        CssRule::new(sel(class, ""))
            .decl("min-height", var_ref("krds-sizing-height-medium"))
            .decl("padding", format!("0 {}", var_ref("krds-spacing-3")))
            .decl("border", border("krds-light-color-border-gray"))
            .decl("border-radius", var_ref("krds-border-radius-medium"))
            .decl("color", var_ref("krds-light-color-text-basic"))
            .decl("font-family", var_ref("krds-typography-font-family-base"))
            .decl("font-size", var_ref("krds-typography-font-size-body-medium"))
            .decl("line-height", var_ref("krds-typography-line-height-base")),
        CssRule::new(sel(class, ":focus"))
            .decl("border-color", var_ref("krds-light-color-border-primary")),
        CssRule::new(sel(class, ".error"))
            .decl("border-color", var_ref("krds-light-color-border-danger")),
        CssRule::new(format!("{}, {}", sel(class, ":disabled"), sel(class, "[readonly]")))
            .decl("background-color", var_ref("krds-light-color-background-gray-subtle"))
            .decl("color", var_ref("krds-light-color-text-disabled")),
    ])
}

/// Checkbox and radio wrappers
pub fn choice(class: &str) -> String {
    render_rules(&[
        CssRule::new(sel(class, ""))
            .decl("display", "inline-flex")
            .decl("align-items", "center")
            .decl("gap", var_ref("krds-spacing-2"))
            .decl("color", var_ref("krds-light-color-text-basic"))
            .decl("font-size", var_ref("krds-typography-font-size-body-medium")),
        CssRule::new(sel(class, " input:disabled + label"))
            .decl("color", var_ref("krds-light-color-text-disabled")),
    ])
}

pub fn navigation(class: &str) -> String {
    render_rules(&[
        CssRule::new(sel(class, " ul"))
            .decl("display", "flex")
            .decl("gap", var_ref("krds-spacing-4"))
            .decl("margin", "0")
            .decl("padding", "0")
            .decl("list-style", "none"),
        CssRule::new(sel(class, ".vertical ul"))
            .decl("flex-direction", "column")
            .decl("gap", var_ref("krds-spacing-2")),
        CssRule::new(sel(class, " a"))
            .decl("color", var_ref("krds-light-color-text-basic"))
            .decl("text-decoration", "none"),
        CssRule::new(sel(class, " a[aria-current=\"page\"]"))
            .decl("color", var_ref("krds-light-color-text-primary"))
            .decl("font-weight", var_ref("krds-typography-font-weight-bold")),
    ])
}

pub fn breadcrumb(class: &str) -> String {
    render_rules(&[
        CssRule::new(sel(class, ""))
            .decl("display", "flex")
            .decl("gap", var_ref("krds-spacing-2"))
            .decl("margin", "0")
            .decl("padding", "0")
            .decl("list-style", "none")
            .decl("font-size", var_ref("krds-typography-font-size-body-small")),
        CssRule::new(sel(class, " a")).decl("color", var_ref("krds-light-color-text-subtle")),
        CssRule::new(sel(class, " [aria-current=\"page\"]"))
            .decl("color", var_ref("krds-light-color-text-basic")),
    ])
}

/// Alert type to the color group carrying its tokens
fn alert_palette(kind: &str) -> &'static str {
    match kind {
        "success" => "success",
        "warning" => "warning",
        "error" => "danger",
        _ => "information",
    }
}

pub fn alert(class: &str) -> String {
    let mut rules = vec![
        CssRule::new(sel(class, ""))
            .decl("display", "flex")
            .decl("flex-direction", "column")
            .decl("gap", var_ref("krds-spacing-1"))
            .decl("padding", var_ref("krds-spacing-4"))
            .decl("border-radius", var_ref("krds-border-radius-medium"))
            .decl("color", var_ref("krds-light-color-text-basic")),
    ];
    for kind in crate::variant::TYPES {
        let palette = alert_palette(kind);
        rules.push(
            CssRule::new(sel(class, &format!(".{kind}")))
                .decl("border", border(&format!("krds-light-color-border-{palette}")))
                .decl(
                    "background-color",
                    var_ref(&format!("krds-light-color-{palette}-background-subtle")),
                ),
        );
    }
    render_rules(&rules)
}

pub fn card(class: &str) -> String {
    render_rules(&[
        CssRule::new(sel(class, ""))
            .decl("display", "flex")
            .decl("flex-direction", "column")
            .decl("border", border("krds-light-color-border-gray-light"))
            .decl("border-radius", var_ref("krds-border-radius-large"))
            .decl("background-color", var_ref("krds-light-color-background-white"))
            .decl("box-shadow", var_ref("krds-shadow-1")),
        CssRule::new(format!(
            "{}, {}, {}",
            sel(class, "-header"),
            sel(class, "-body"),
            sel(class, "-footer")
        ))
        .decl("padding", var_ref("krds-spacing-4")),
        CssRule::new(sel(class, "-footer"))
            .decl("border-top", border("krds-light-color-border-gray-light")),
    ])
}

pub fn modal(class: &str) -> String {
    let mut rules = vec![
        CssRule::new(sel(class, "-overlay"))
            .decl("position", "fixed")
            .decl("inset", "0")
            .decl("display", "flex")
            .decl("align-items", "center")
            .decl("justify-content", "center")
            .decl("background-color", var_ref("krds-light-color-background-dim")),
        CssRule::new(sel(class, ""))
            .decl("width", var_ref("krds-component-modal-width-medium"))
            .decl("max-width", format!("calc(100% - {})", var_ref("krds-spacing-8")))
            .decl("border-radius", var_ref("krds-border-radius-large"))
            .decl("background-color", var_ref("krds-light-color-background-white"))
            .decl("box-shadow", var_ref("krds-shadow-2")),
    ];
    for size in ["small", "medium", "large"] {
        rules.push(
            CssRule::new(sel(class, &format!(".{size}")))
                .decl("width", var_ref(&format!("krds-component-modal-width-{size}"))),
        );
    }
    rules.push(
        CssRule::new(format!(
            "{}, {}, {}",
            sel(class, "-header"),
            sel(class, "-body"),
            sel(class, "-footer")
        ))
        .decl("padding", var_ref("krds-spacing-6")),
    );
    render_rules(&rules)
}

pub fn table(class: &str) -> String {
    render_rules(&[
        CssRule::new(sel(class, ""))
            .decl("width", "100%")
            .decl("border-collapse", "collapse")
            .decl("font-size", var_ref("krds-typography-font-size-body-medium")),
        CssRule::new(format!("{}, {}", sel(class, " th"), sel(class, " td")))
            .decl("padding", format!("{} {}", var_ref("krds-spacing-2"), var_ref("krds-spacing-3")))
            .decl("border-bottom", border("krds-light-color-border-gray-light"))
            .decl("text-align", "left"),
        CssRule::new(sel(class, " th"))
            .decl("background-color", var_ref("krds-light-color-background-gray-subtle"))
            .decl("font-weight", var_ref("krds-typography-font-weight-bold")),
    ])
}

pub fn generic(class: &str) -> String {
    CssRule::new(sel(class, ""))
        .decl("display", "block")
        .decl("color", var_ref("krds-light-color-text-basic"))
        .decl("font-family", var_ref("krds-typography-font-family-base"))
        .render()
}

/// Minimal box used by the fallback stub
pub fn minimal_box(class: &str) -> String {
    CssRule::new(sel(class, ""))
        .decl("display", "block")
        .decl("padding", var_ref("krds-spacing-4"))
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_size_rules() {
        let css = button("krds-btn");
        assert!(css.starts_with(".krds-btn {\n  display: inline-flex;\n"));
        assert!(css.contains(".krds-btn.small {\n  height: var(--krds-sizing-height-small);\n"));
        assert!(css.contains(".krds-btn:disabled, .krds-btn.disabled {"));
    }

    #[test]
    fn test_alert_maps_types_to_palettes() {
        let css = alert("krds-alert");
        assert!(css.contains(".krds-alert.error {\n  border: var(--krds-border-width-default) solid var(--krds-light-color-border-danger);"));
        assert!(css.contains("var(--krds-light-color-information-background-subtle)"));
        assert!(css.contains(".krds-alert.success {"));
    }

    #[test]
    fn test_builders_use_custom_properties_only() {
        for css in [
            button("krds-btn"),
            link("krds-link"),
            input("krds-input"),
            choice("krds-checkbox"),
            navigation("krds-nav"),
            breadcrumb("krds-breadcrumb"),
            alert("krds-alert"),
            card("krds-card"),
            modal("krds-modal"),
            table("krds-table"),
            generic("krds-x"),
            minimal_box("krds-x"),
        ] {
            assert!(!css.contains('#'), "literal color in {css}");
            assert!(!css.contains("px"), "literal length in {css}");
            assert!(css.contains("var(--krds-"));
        }
    }

    #[test]
    fn test_minimal_box() {
        assert_eq!(
            minimal_box("krds-x"),
            ".krds-x {\n  display: block;\n  padding: var(--krds-spacing-4);\n}\n"
        );
    }
}
